//! Cap extrusion.

use mesh_extract::BoundaryEdges;
use mesh_types::{IndexedMesh, MeshError, Point3, Vector3, Vertex};
use tracing::{debug, warn};

use super::wall::wall_triangles;
use crate::error::{ShellError, ShellResult};
use crate::params::ExtrudeParams;

/// Result of cap extrusion.
#[derive(Debug, Clone)]
pub struct ExtrusionResult {
    /// The shell, or the untouched cap when extrusion was skipped.
    pub mesh: IndexedMesh,

    /// A shell was built.
    pub extruded: bool,

    /// Vertices in the input cap.
    pub cap_vertices: usize,

    /// Faces in the input cap.
    pub cap_faces: usize,

    /// Boundary edges walled.
    pub boundary_edges: usize,

    /// Side-wall triangles added.
    pub wall_faces: usize,

    /// The boundary formed one closed loop.
    pub closed_boundary: bool,
}

impl ExtrusionResult {
    fn passthrough(cap: &IndexedMesh, boundary: &BoundaryEdges) -> Self {
        Self {
            mesh: cap.clone(),
            extruded: false,
            cap_vertices: cap.vertices.len(),
            cap_faces: cap.faces.len(),
            boundary_edges: boundary.len(),
            wall_faces: 0,
            closed_boundary: boundary.is_closed_loop(),
        }
    }
}

impl std::fmt::Display for ExtrusionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.extruded {
            return write!(
                f,
                "Extrusion skipped: {} vertices, {} faces passed through",
                self.cap_vertices, self.cap_faces
            );
        }
        write!(
            f,
            "Extrusion: {} vertices, {} faces → {} vertices, {} faces ({} wall faces, boundary {})",
            self.cap_vertices,
            self.cap_faces,
            self.mesh.vertices.len(),
            self.mesh.faces.len(),
            self.wall_faces,
            if self.closed_boundary { "closed" } else { "OPEN" }
        )
    }
}

/// Extrude a cap into a shell.
///
/// The shell holds, in order:
///
/// 1. the bottom layer: the cap vertices with negated normals
/// 2. the top layer: the cap vertices moved by `direction * distance`
/// 3. three fresh vertices per side-wall triangle, two triangles per
///    boundary edge
///
/// Faces are the cap faces on the bottom layer, the same faces on the top
/// layer, then the walls. Wall triangles take their winding from the
/// boundary edge direction, which for edges from
/// [`extract_cap`](mesh_extract::extract_cap) faces them outward. Normals
/// and tangents are recalculated once everything is in place.
///
/// An `n`-vertex, `f`-face cap with `e` boundary edges gives `2n + 6e`
/// vertices and `2f + 2e` faces.
///
/// The cap passes through unchanged when the parameters are inactive
/// (see [`ExtrudeParams::is_active`]) or the cap is empty.
///
/// # Errors
///
/// - [`ShellError::InvalidMesh`] if the cap fails validation or the shell
///   would need more vertices than `u32` can index
/// - [`ShellError::EdgeOutOfRange`] if a boundary edge refers to a missing
///   cap vertex
/// - [`ShellError::NonFiniteOffset`] if `direction * distance` is not finite
///
/// # Example
///
/// ```
/// use mesh_extract::BoundaryEdges;
/// use mesh_shell::{extrude_cap, ExtrudeParams};
/// use mesh_types::unit_square;
///
/// let cap = unit_square();
/// let boundary = BoundaryEdges::from_flat_pairs(&[1, 0, 2, 1, 3, 2, 0, 3])?;
/// let result = extrude_cap(&cap, &boundary, &ExtrudeParams::upward(1.0))?;
///
/// assert_eq!(result.mesh.faces.len(), 12);
/// assert_eq!(result.mesh.vertices.len(), 32);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extrude_cap(
    cap: &IndexedMesh,
    boundary: &BoundaryEdges,
    params: &ExtrudeParams,
) -> ShellResult<ExtrusionResult> {
    cap.validate()?;

    let vertex_count = cap.vertices.len();
    for (position, edge) in boundary.iter().enumerate() {
        for index in [edge.from, edge.to] {
            if index as usize >= vertex_count {
                return Err(ShellError::edge_out_of_range(position, index, vertex_count));
            }
        }
    }

    if !params.is_active() || cap.vertices.is_empty() {
        debug!(
            vertices = vertex_count,
            faces = cap.faces.len(),
            "Extrusion skipped"
        );
        return Ok(ExtrusionResult::passthrough(cap, boundary));
    }

    let offset = params.offset();
    if !offset.iter().all(|c| c.is_finite()) {
        return Err(ShellError::NonFiniteOffset);
    }

    let closed_boundary = boundary.is_closed_loop();
    if !closed_boundary {
        warn!(
            edges = boundary.len(),
            "Boundary is not a single closed loop, side walls may leave gaps"
        );
    }

    let shell_vertices = 2 * vertex_count + 6 * boundary.len();
    let top_layer = u32::try_from(vertex_count)
        .ok()
        .filter(|_| u32::try_from(shell_vertices).is_ok())
        .ok_or(MeshError::TooManyVertices {
            count: shell_vertices,
        })?;

    let mut mesh = IndexedMesh::with_capacity(
        shell_vertices,
        2 * cap.faces.len() + 2 * boundary.len(),
    );

    mesh.vertices.extend(cap.vertices.iter().map(|v| Vertex {
        normal: -v.normal,
        ..*v
    }));
    mesh.vertices.extend(cap.vertices.iter().map(|v| Vertex {
        position: v.position + offset,
        ..*v
    }));

    if params.flip_bottom {
        mesh.faces.extend(cap.faces.iter().map(|&[a, b, c]| [a, c, b]));
    } else {
        mesh.faces.extend_from_slice(&cap.faces);
    }
    mesh.faces.extend(cap.faces.iter().map(|face| face.map(|i| i + top_layer)));

    let walls = wall_triangles(boundary.as_slice());
    let mut next_index = 2 * top_layer;
    for &triangle in &walls {
        let [(p0, uv0), (p1, uv1), (p2, uv2)] = triangle.map(|wv| {
            let layered = &mesh.vertices[wv.shell_index(top_layer) as usize];
            (layered.position, layered.uv)
        });
        let [n0, n1, n2] = corner_normals([p0, p1, p2]);

        mesh.vertices.push(Vertex::with_attributes(p0, n0, uv0));
        mesh.vertices.push(Vertex::with_attributes(p1, n1, uv1));
        mesh.vertices.push(Vertex::with_attributes(p2, n2, uv2));
        mesh.faces.push([next_index, next_index + 1, next_index + 2]);
        next_index += 3;
    }

    mesh.recalculate_normals();
    mesh.recalculate_tangents();

    debug!(
        cap_vertices = vertex_count,
        cap_faces = cap.faces.len(),
        boundary_edges = boundary.len(),
        wall_faces = walls.len(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Extruded cap"
    );

    Ok(ExtrusionResult {
        mesh,
        extruded: true,
        cap_vertices: vertex_count,
        cap_faces: cap.faces.len(),
        boundary_edges: boundary.len(),
        wall_faces: walls.len(),
        closed_boundary,
    })
}

/// Unnormalized normal at each corner, from the two edges leaving it.
fn corner_normals([p0, p1, p2]: [Point3<f64>; 3]) -> [Vector3<f64>; 3] {
    [
        (p1 - p0).cross(&(p2 - p0)),
        (p2 - p1).cross(&(p0 - p1)),
        (p0 - p2).cross(&(p1 - p2)),
    ]
}
