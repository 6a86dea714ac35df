//! Grid mesh construction.

use mesh_types::{Aabb, IndexedMesh, MeshBounds, Vertex};
use nalgebra::{Point3, Vector2, Vector4};
use tracing::debug;

use crate::error::{HeightFieldError, HeightFieldResult};
use crate::sampler::HeightSampler;

/// Tangent given to every grid vertex.
pub const GRID_TANGENT: Vector4<f64> = Vector4::new(0.0, 1.0, 0.0, -1.0);

/// Result of building a height-field grid.
#[derive(Debug, Clone)]
pub struct HeightFieldMesh {
    /// The grid mesh, in coordinates local to `origin`.
    pub mesh: IndexedMesh,

    /// World position the grid was sampled from; local `(0, 0, 0)` sits
    /// under it.
    pub origin: Point3<f64>,

    /// Cells along X.
    pub width: u32,

    /// Cells along Z.
    pub depth: u32,

    /// Bounds of the grid mesh.
    pub bounds: Aabb,
}

impl std::fmt::Display for HeightFieldMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Height field: {} x {} cells → {} vertices, {} faces",
            self.width,
            self.depth,
            self.mesh.vertices.len(),
            self.mesh.faces.len()
        )
    }
}

/// Build a grid mesh that follows a height field.
///
/// The grid has `width` cells along X and `depth` cells along Z, one unit
/// apart, giving `(width + 1) * (depth + 1)` vertices. Vertex
/// `z * (width + 1) + x` sits at local `(x, h, z)`, where `h` is sampled at
/// `start + (x, 0, z)`, with UV `(x / width, z / depth)`. Each cell is two
/// triangles wound to face +Y. Normals are recalculated and every tangent
/// is [`GRID_TANGENT`].
///
/// # Errors
///
/// - [`HeightFieldError::InvalidDimensions`] if `width` or `depth` is zero
/// - [`HeightFieldError::GridTooLarge`] if the vertex count exceeds what
///   `u32` can index
/// - [`HeightFieldError::NonFiniteHeight`] if the sampler returns NaN or
///   infinity
///
/// # Example
///
/// ```
/// use mesh_heightfield::build_height_field_grid;
/// use mesh_types::Point3;
///
/// let terrain = |x: f64, z: f64| 0.1 * x + 0.2 * z;
/// let grid = build_height_field_grid(&terrain, Point3::new(10.0, 0.0, 5.0), 1, 1)?;
///
/// assert_eq!(grid.mesh.vertices.len(), 4);
/// assert_eq!(grid.mesh.faces.len(), 2);
/// # Ok::<(), mesh_heightfield::HeightFieldError>(())
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn build_height_field_grid<S>(
    sampler: &S,
    start: Point3<f64>,
    width: u32,
    depth: u32,
) -> HeightFieldResult<HeightFieldMesh>
where
    S: HeightSampler + ?Sized,
{
    if width == 0 || depth == 0 {
        return Err(HeightFieldError::InvalidDimensions { width, depth });
    }

    let vertex_count = (u64::from(width) + 1) * (u64::from(depth) + 1);
    if u32::try_from(vertex_count).is_err() {
        return Err(HeightFieldError::GridTooLarge { width, depth });
    }
    // Fits in u32, so fits in usize.
    let face_count = 2 * width as usize * depth as usize;

    let mut mesh = IndexedMesh::with_capacity(vertex_count as usize, face_count);
    let (w, d) = (f64::from(width), f64::from(depth));

    for z in 0..=depth {
        for x in 0..=width {
            let (fx, fz) = (f64::from(x), f64::from(z));
            let (sx, sz) = (start.x + fx, start.z + fz);
            let height = sampler.sample_height(sx, sz);
            if !height.is_finite() {
                return Err(HeightFieldError::NonFiniteHeight { x: sx, z: sz });
            }
            mesh.vertices.push(
                Vertex::new(Point3::new(fx, height, fz)).with_uv(Vector2::new(fx / w, fz / d)),
            );
        }
    }

    let row = width + 1;
    for z in 0..depth {
        for x in 0..width {
            let vi = z * row + x;
            mesh.faces.push([vi, vi + row, vi + 1]);
            mesh.faces.push([vi + 1, vi + row, vi + row + 1]);
        }
    }

    mesh.recalculate_normals();
    mesh.set_uniform_tangent(GRID_TANGENT);
    let bounds = mesh.bounds();

    debug!(
        width,
        depth,
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Built height-field grid"
    );

    Ok(HeightFieldMesh {
        mesh,
        origin: start,
        width,
        depth,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::HeightGrid;
    use approx::assert_relative_eq;
    use mesh_types::{MeshTopology, Vector3};

    fn flat(_: f64, _: f64) -> f64 {
        0.0
    }

    #[test]
    fn test_single_cell() {
        let grid = build_height_field_grid(&flat, Point3::origin(), 1, 1).unwrap();
        assert_eq!(grid.mesh.vertex_count(), 4);
        assert_eq!(grid.mesh.face_count(), 2);
        assert_eq!(grid.mesh.faces, vec![[0, 2, 1], [1, 2, 3]]);
    }

    #[test]
    fn test_counts() {
        let grid = build_height_field_grid(&flat, Point3::origin(), 4, 3).unwrap();
        assert_eq!(grid.mesh.vertex_count(), 5 * 4);
        assert_eq!(grid.mesh.face_count(), 2 * 4 * 3);
        assert!(grid.mesh.validate().is_ok());
    }

    #[test]
    fn test_flat_grid_faces_up() {
        let grid = build_height_field_grid(&flat, Point3::origin(), 3, 2).unwrap();
        for vertex in &grid.mesh.vertices {
            assert_relative_eq!(vertex.normal, Vector3::y(), epsilon = 1e-12);
            assert_eq!(vertex.tangent, GRID_TANGENT);
        }
    }

    #[test]
    fn test_layout_and_uvs() {
        let grid = build_height_field_grid(&flat, Point3::origin(), 4, 2).unwrap();
        // Vertex z * (width + 1) + x.
        let v = &grid.mesh.vertices[2 * 5 + 3];
        assert_relative_eq!(v.position, Point3::new(3.0, 0.0, 2.0));
        assert_relative_eq!(v.uv, Vector2::new(0.75, 1.0));
    }

    #[test]
    fn test_samples_at_start_offset() {
        let terrain = |x: f64, z: f64| x * 10.0 + z;
        let grid = build_height_field_grid(&terrain, Point3::new(5.0, 100.0, 7.0), 2, 2).unwrap();

        // Local (1, _, 2) is sampled at world (6, 9).
        let v = &grid.mesh.vertices[2 * 3 + 1];
        assert_relative_eq!(v.position, Point3::new(1.0, 69.0, 2.0));
        assert_eq!(grid.origin, Point3::new(5.0, 100.0, 7.0));
    }

    #[test]
    fn test_height_grid_sampler() {
        let heights = HeightGrid::from_fn(4, 4, 1.0, |x, _| x * 0.5).unwrap();
        let grid = build_height_field_grid(&heights, Point3::origin(), 3, 3).unwrap();
        assert_relative_eq!(grid.bounds.max.y, 1.5);
        assert_relative_eq!(grid.bounds.min.y, 0.0);
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(
            build_height_field_grid(&flat, Point3::origin(), 0, 1).unwrap_err(),
            HeightFieldError::InvalidDimensions { width: 0, depth: 1 }
        );
        assert!(build_height_field_grid(&flat, Point3::origin(), 1, 0).is_err());
    }

    #[test]
    fn test_too_large() {
        let err = build_height_field_grid(&flat, Point3::origin(), u32::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            HeightFieldError::GridTooLarge {
                width: u32::MAX,
                depth: 1
            }
        );
    }

    #[test]
    fn test_non_finite_height() {
        let hole = |x: f64, _: f64| if x > 0.5 { f64::NAN } else { 0.0 };
        let err = build_height_field_grid(&hole, Point3::origin(), 2, 1).unwrap_err();
        assert!(matches!(err, HeightFieldError::NonFiniteHeight { .. }));
    }

    #[test]
    fn test_display() {
        let grid = build_height_field_grid(&flat, Point3::origin(), 2, 2).unwrap();
        assert_eq!(format!("{grid}"), "Height field: 2 x 2 cells → 9 vertices, 8 faces");
    }
}
