//! Midpoint subdivision.

use mesh_types::{IndexedMesh, MeshError};
use tracing::{debug, warn};

use crate::error::{SubdivideError, SubdivideResult};
use crate::params::SubdivideParams;
use crate::result::SubdivisionResult;

/// Subdivide a mesh by repeated midpoint splitting.
///
/// Every pass splits each triangle into four: one per original corner and
/// one joining the three edge midpoints. Midpoints are not shared between
/// neighbouring triangles, so each pass adds exactly three vertices per
/// triangle. Shared positions stay identical bit for bit, which is what
/// position-keyed smoothing relies on.
///
/// Pass counts outside `0..=6` are clamped and reported in
/// [`SubdivisionResult::clamp`]. Zero passes, or a mesh without faces,
/// returns an identical copy. Otherwise normals and tangents are
/// recalculated once after the last pass.
///
/// # Errors
///
/// - [`SubdivideError::InvalidMesh`] if the mesh fails validation or the
///   result would need more vertices than `u32` can index
/// - [`SubdivideError::MeshTooLarge`] if the result would exceed
///   `max_faces`
///
/// # Examples
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_subdivide::{subdivide_mesh, SubdivideParams};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_passes(2))?;
///
/// // 1 * 4^2 faces, 3 + 3 * 1 + 3 * 4 vertices
/// assert_eq!(result.final_faces, 16);
/// assert_eq!(result.final_vertices, 18);
/// # Ok::<(), mesh_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_mesh(
    mesh: &IndexedMesh,
    params: &SubdivideParams,
) -> SubdivideResult<SubdivisionResult> {
    let (passes, clamp) = params.clamped_passes();
    if let Some(clamp) = &clamp {
        warn!(
            requested = clamp.requested,
            applied = clamp.applied,
            "Subdivision passes out of range, clamped"
        );
    }

    mesh.validate()?;

    let original_faces = mesh.faces.len();
    let original_vertices = mesh.vertices.len();

    if passes == 0 || mesh.faces.is_empty() {
        return Ok(SubdivisionResult {
            mesh: mesh.clone(),
            original_faces,
            final_faces: original_faces,
            original_vertices,
            final_vertices: original_vertices,
            passes_applied: 0,
            clamp,
        });
    }

    let too_large = SubdivideError::MeshTooLarge {
        current: original_faces,
        projected: usize::MAX,
        max: params.max_faces,
    };
    let projected = SubdivideParams::expected_faces(original_faces, passes).ok_or(too_large)?;
    if projected > params.max_faces {
        return Err(SubdivideError::MeshTooLarge {
            current: original_faces,
            projected,
            max: params.max_faces,
        });
    }

    // Each pass adds three vertices per face of the pass's input, which
    // sums to `faces * (4^passes - 1)` over all passes.
    let added = projected - original_faces;
    let final_vertices = original_vertices.saturating_add(added);
    if u32::try_from(final_vertices).is_err() {
        return Err(MeshError::TooManyVertices {
            count: final_vertices,
        }
        .into());
    }

    debug!(
        faces = original_faces,
        vertices = original_vertices,
        passes,
        "Subdividing mesh"
    );

    let mut current = mesh.clone();
    for pass in 0..passes {
        current = subdivide_once(&current);
        debug!(
            pass = pass + 1,
            faces = current.faces.len(),
            vertices = current.vertices.len(),
            "Subdivision pass"
        );
    }

    current.recalculate_normals();
    current.recalculate_tangents();

    Ok(SubdivisionResult {
        original_faces,
        final_faces: current.faces.len(),
        original_vertices,
        final_vertices: current.vertices.len(),
        passes_applied: passes,
        clamp,
        mesh: current,
    })
}

/// Split every triangle into four, appending three midpoints per triangle.
///
/// Corner triangles keep the winding of their source triangle:
/// `[m20, v0, m01]`, `[m01, v1, m12]`, `[m12, v2, m20]`, then the centre
/// `[m20, m01, m12]`. Index range was checked by the caller.
#[allow(clippy::cast_possible_truncation)]
fn subdivide_once(mesh: &IndexedMesh) -> IndexedMesh {
    let mut vertices = Vec::with_capacity(mesh.vertices.len() + 3 * mesh.faces.len());
    vertices.extend_from_slice(&mesh.vertices);
    let mut faces = Vec::with_capacity(mesh.faces.len() * 4);

    for &[v0, v1, v2] in &mesh.faces {
        let [a, b, c] = [v0, v1, v2].map(|i| &mesh.vertices[i as usize]);

        let m01 = vertices.len() as u32;
        let m12 = m01 + 1;
        let m20 = m01 + 2;
        vertices.push(a.midpoint(b));
        vertices.push(b.midpoint(c));
        vertices.push(c.midpoint(a));

        faces.push([m20, v0, m01]);
        faces.push([m01, v1, m12]);
        faces.push([m12, v2, m20]);
        faces.push([m20, m01, m12]);
    }

    IndexedMesh::from_parts(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{unit_cube, unit_square, MeshTopology, Point3, Vector2, Vector3, Vertex};

    fn create_triangle() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::with_attributes(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::y(),
            Vector2::new(0.0, 0.0),
        ));
        mesh.vertices.push(Vertex::with_attributes(
            Point3::new(0.0, 0.0, 2.0),
            Vector3::y(),
            Vector2::new(0.0, 1.0),
        ));
        mesh.vertices.push(Vertex::with_attributes(
            Point3::new(2.0, 0.0, 0.0),
            Vector3::y(),
            Vector2::new(1.0, 0.0),
        ));
        mesh.faces.push([0, 1, 2]);
        mesh
    }

    #[test]
    fn test_zero_passes_is_identity() {
        let mesh = unit_cube();
        let result = subdivide_mesh(&mesh, &SubdivideParams::none()).unwrap();
        assert_eq!(result.mesh, mesh);
        assert_eq!(result.passes_applied, 0);
        assert!(!result.was_subdivided());
    }

    #[test]
    fn test_empty_mesh_passes_through() {
        let result = subdivide_mesh(&IndexedMesh::new(), &SubdivideParams::new()).unwrap();
        assert!(result.mesh.vertices.is_empty());
        assert_eq!(result.final_faces, 0);
    }

    #[test]
    fn test_single_pass_counts() {
        let result = subdivide_mesh(&create_triangle(), &SubdivideParams::new()).unwrap();
        assert_eq!(result.final_faces, 4);
        assert_eq!(result.final_vertices, 6);
        assert_eq!(result.passes_applied, 1);
    }

    #[test]
    fn test_midpoints_not_shared() {
        // Two triangles share the diagonal; each gets its own midpoint.
        let result = subdivide_mesh(&unit_square(), &SubdivideParams::new()).unwrap();
        assert_eq!(result.final_vertices, 4 + 6);

        let diagonal_mid = Point3::new(0.5, 0.0, 0.5);
        let copies = result
            .mesh
            .vertices
            .iter()
            .filter(|v| v.position == diagonal_mid)
            .count();
        assert_eq!(copies, 2);
    }

    #[test]
    fn test_midpoint_attributes() {
        let result = subdivide_mesh(&create_triangle(), &SubdivideParams::new()).unwrap();
        let m01 = &result.mesh.vertices[3];
        let m12 = &result.mesh.vertices[4];
        let m20 = &result.mesh.vertices[5];

        assert_relative_eq!(m01.position, Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(m12.position, Point3::new(1.0, 0.0, 1.0));
        assert_relative_eq!(m20.position, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(m01.uv, Vector2::new(0.0, 0.5));
        assert_relative_eq!(m12.uv, Vector2::new(0.5, 0.5));
    }

    #[test]
    fn test_winding_preserved() {
        let result = subdivide_mesh(&create_triangle(), &SubdivideParams::new()).unwrap();
        for tri in result.mesh.triangles() {
            let n = tri.normal().unwrap();
            assert_relative_eq!(n, Vector3::y(), epsilon = 1e-12);
        }
        for vertex in &result.mesh.vertices {
            assert_relative_eq!(vertex.normal, Vector3::y(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tangents_recalculated() {
        let result = subdivide_mesh(&create_triangle(), &SubdivideParams::new()).unwrap();
        for vertex in &result.mesh.vertices {
            let tangent = vertex.tangent.xyz();
            assert_relative_eq!(tangent.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(tangent.dot(&vertex.normal), 0.0, epsilon = 1e-12);
            assert_relative_eq!(vertex.tangent.w.abs(), 1.0);
        }
    }

    #[test]
    fn test_surface_area_preserved() {
        let mesh = unit_cube();
        let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_passes(3)).unwrap();
        assert_relative_eq!(result.mesh.surface_area(), mesh.surface_area(), epsilon = 1e-9);
    }

    #[test]
    fn test_clamped_high() {
        let result =
            subdivide_mesh(&create_triangle(), &SubdivideParams::new().with_passes(8)).unwrap();
        assert_eq!(result.passes_applied, 6);
        assert_eq!(result.final_faces, 4096);
        assert_eq!(result.clamp.map(|c| c.applied), Some(6));
    }

    #[test]
    fn test_clamped_low_is_identity() {
        let mesh = create_triangle();
        let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_passes(-3)).unwrap();
        assert_eq!(result.mesh, mesh);
        assert!(result.clamp.is_some());
    }

    #[test]
    fn test_too_large() {
        let params = SubdivideParams::new().with_passes(2).with_max_faces(10);
        let err = subdivide_mesh(&create_triangle(), &params).unwrap_err();
        assert_eq!(
            err,
            SubdivideError::MeshTooLarge {
                current: 1,
                projected: 16,
                max: 10
            }
        );
    }

    #[test]
    fn test_invalid_mesh() {
        let mut mesh = create_triangle();
        mesh.faces.push([0, 1, 7]);
        let err = subdivide_mesh(&mesh, &SubdivideParams::new()).unwrap_err();
        assert!(matches!(err, SubdivideError::InvalidMesh(_)));
    }
}
