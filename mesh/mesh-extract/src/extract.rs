//! Directional cap extraction.

use hashbrown::{HashMap, HashSet};
use mesh_types::{IndexedMesh, PositionKey, Vertex};
use nalgebra::{Point3, Vector3};
use tracing::{debug, trace};

use crate::boundary::{BoundaryClassifier, DirectedEdge, EdgeKey};
use crate::error::{ExtractError, ExtractResult};
use crate::frame::ObjectFrame;
use crate::params::ExtractParams;
use crate::record::VertexRecord;
use crate::result::ExtractionResult;

/// How far debug rays run past the vertex they point at.
const DEBUG_RAY_OVERSHOOT: f64 = 2.0;

/// Corner pairs of a triangle, in winding order.
const CORNER_PAIRS: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

/// Extract the part of a mesh that faces a direction.
///
/// Every vertex normal is rotated into the object's frame, with the pivot
/// moved by `params.pivot_offset`, and compared against
/// `params.direction`. A vertex is selected if the angle is strictly
/// below `params.max_angle_degrees`.
///
/// Selected vertices are merged by exact position. When several selected
/// vertices share a position, the one with the lowest index supplies the
/// normal and UV. Cap vertices keep the input order of those suppliers.
/// A triangle is copied into the cap when every corner position was
/// selected, whichever vertex instance it references.
///
/// Triangles with exactly two selected corners yield candidate boundary
/// edges in their own winding order; see
/// [`BoundaryClassifier`](crate::BoundaryClassifier) for which survive.
///
/// Positions, normals and UVs in the result are in mesh space.
///
/// # Errors
///
/// - [`ExtractError::ZeroDirection`] if `params.direction` is zero
/// - [`ExtractError::InvalidAngle`] if `params.max_angle_degrees` is not finite
/// - [`ExtractError::InvalidMesh`] if the mesh has bad face indices
///
/// # Example
///
/// ```
/// use mesh_extract::{extract_cap, ExtractParams, ObjectFrame};
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// let result = extract_cap(&cube, &ObjectFrame::identity(), &ExtractParams::upward(45.0))?;
///
/// // The top face: four corners, two triangles, four perimeter edges.
/// assert_eq!(result.mesh.vertices.len(), 4);
/// assert_eq!(result.mesh.faces.len(), 2);
/// assert_eq!(result.boundary_edges.len(), 4);
/// assert!(result.boundary_edges.is_closed_loop());
/// # Ok::<(), mesh_extract::ExtractError>(())
/// ```
pub fn extract_cap(
    mesh: &IndexedMesh,
    frame: &ObjectFrame,
    params: &ExtractParams,
) -> ExtractResult<ExtractionResult> {
    if !params.max_angle_degrees.is_finite() {
        return Err(ExtractError::InvalidAngle(params.max_angle_degrees));
    }
    if params.direction.norm_squared() <= 0.0 {
        return Err(ExtractError::ZeroDirection);
    }
    mesh.validate()?;

    let pivot = frame.with_pivot_offset(params.pivot_offset);

    // Position -> lowest selected vertex index at that position.
    let mut suppliers: HashMap<PositionKey, u32> = HashMap::new();
    let mut records = Vec::new();
    let mut selected_vertex_count = 0;

    for (original_index, vertex) in (0u32..).zip(&mesh.vertices) {
        let world_normal = pivot.transform_direction(&vertex.normal);
        let angle = angle_degrees(&world_normal, &params.direction);
        let selected = angle.is_some_and(|a| a < params.max_angle_degrees);

        if selected {
            selected_vertex_count += 1;
            suppliers
                .entry(PositionKey::new(&vertex.position))
                .or_insert(original_index);

            if params.debug_rays {
                trace_ray(&pivot, &frame.transform_point(&vertex.position), original_index);
            }
        }

        if params.keep_records {
            records.push(VertexRecord {
                original_index,
                local_position: vertex.position,
                local_normal: vertex.normal,
                world_position: frame.transform_point(&vertex.position),
                world_normal,
                angle_degrees: angle,
                uv: vertex.uv,
                selected,
                cap_index: None,
                on_boundary: false,
            });
        }
    }

    let mut retained: Vec<u32> = suppliers.into_values().collect();
    retained.sort_unstable();

    let mut cap_index: HashMap<PositionKey, u32> = HashMap::with_capacity(retained.len());
    let mut cap = IndexedMesh::with_capacity(retained.len(), 0);
    for (new_index, &original) in (0u32..).zip(&retained) {
        let source = &mesh.vertices[original as usize];
        cap_index.insert(PositionKey::new(&source.position), new_index);
        cap.vertices.push(Vertex::with_attributes(source.position, source.normal, source.uv));
    }

    let mut classifier = BoundaryClassifier::new();
    let mut collapsed_face_count = 0;

    for face in &mesh.faces {
        let keys = face.map(|i| PositionKey::new(&mesh.vertices[i as usize].position));
        let found = keys.map(|k| cap_index.get(&k).copied());

        match found {
            [Some(a), Some(b), Some(c)] => {
                if a == b || b == c || c == a {
                    collapsed_face_count += 1;
                    continue;
                }
                cap.faces.push([a, b, c]);
                classifier.add_cap_triangle(
                    CORNER_PAIRS.map(|(x, y)| EdgeKey::from_keys(keys[x], keys[y])),
                );
            }
            _ if found.iter().flatten().count() == 2 => {
                for (x, y) in CORNER_PAIRS {
                    if let (Some(from), Some(to)) = (found[x], found[y]) {
                        if from != to {
                            classifier.add_candidate(
                                DirectedEdge::new(from, to),
                                EdgeKey::from_keys(keys[x], keys[y]),
                            );
                        }
                    }
                }
            }
            _ => {}
        }
    }

    let classification = classifier.classify();

    if params.keep_records {
        let boundary_vertices: HashSet<u32> = classification
            .boundary
            .iter()
            .flat_map(|e| [e.from, e.to])
            .collect();
        for record in &mut records {
            record.cap_index = cap_index
                .get(&PositionKey::new(&record.local_position))
                .copied();
            record.on_boundary = record
                .cap_index
                .is_some_and(|i| boundary_vertices.contains(&i));
        }
    }

    if cap.vertices.is_empty() {
        debug!(
            vertices = mesh.vertices.len(),
            max_angle = params.max_angle_degrees,
            "Extraction selected no vertices"
        );
    } else {
        debug!(
            selected = selected_vertex_count,
            cap_vertices = cap.vertices.len(),
            cap_faces = cap.faces.len(),
            boundary_edges = classification.boundary.len(),
            pruned = classification.pruned_count,
            interior = classification.interior_count,
            "Extracted cap"
        );
    }

    Ok(ExtractionResult {
        mesh: cap,
        boundary_edges: classification.boundary,
        selected_vertex_count,
        candidate_edge_count: classification.candidate_count,
        pruned_edge_count: classification.pruned_count,
        interior_edge_count: classification.interior_count,
        collapsed_face_count,
        records,
    })
}

/// Angle in degrees, or `None` for a zero-length normal.
fn angle_degrees(normal: &Vector3<f64>, direction: &Vector3<f64>) -> Option<f64> {
    if normal.norm_squared() > 0.0 {
        Some(normal.angle(direction).to_degrees())
    } else {
        None
    }
}

fn trace_ray(pivot: &ObjectFrame, world: &Point3<f64>, vertex: u32) {
    let start = pivot.position;
    let heading = (world - start)
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::zeros);
    let end = world + heading * DEBUG_RAY_OVERSHOOT;
    trace!(vertex, ?start, ?end, "Selection ray");
}
