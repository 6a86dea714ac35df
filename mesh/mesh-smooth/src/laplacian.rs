//! Laplacian mesh smoothing.
//!
//! Laplacian smoothing moves each vertex toward the centroid of its
//! neighbours. It is simple and fast but shrinks the mesh over many passes.
//!
//! # Algorithm
//!
//! For each vertex v with neighbour positions N(v), all read from the
//! previous pass:
//! ```text
//! v_new = v - (v - centroid(N(v))) * factor
//! ```

use mesh_types::{Aabb, IndexedMesh, MeshBounds};
use tracing::debug;

use crate::adjacency::AdjacencyMap;
use crate::error::{SmoothError, SmoothResult};
use crate::params::SmoothParams;

/// Result of Laplacian smoothing.
#[derive(Debug, Clone)]
pub struct LaplacianResult {
    /// The smoothed mesh.
    pub mesh: IndexedMesh,

    /// Number of passes performed.
    pub passes_performed: u32,

    /// Maximum single vertex displacement across all passes.
    pub max_displacement: f64,

    /// Sum of each pass's maximum displacement.
    pub total_displacement: f64,

    /// Bounds of the smoothed mesh.
    pub bounds: Aabb,
}

impl std::fmt::Display for LaplacianResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Smoothing: {} passes → max displacement {:.4}, total {:.4}",
            self.passes_performed, self.max_displacement, self.total_displacement
        )
    }
}

/// Smooth a mesh with `params.passes` Laplacian passes.
///
/// The adjacency map is rebuilt from the current positions at the start of
/// every pass, and all vertices of a pass move based on the positions from
/// before it. Vertices at the same position move identically. Vertices no
/// face uses stay put.
///
/// Only positions are smoothed. After at least one pass, normals and
/// tangents are recalculated; bounds are reported either way.
///
/// # Errors
///
/// - [`SmoothError::InvalidFactor`] if `params.factor` is NaN or infinite
/// - [`SmoothError::InvalidMesh`] if the mesh fails validation
///
/// # Example
///
/// ```
/// use mesh_smooth::{smooth_laplacian, SmoothParams};
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// let result = smooth_laplacian(&cube, &SmoothParams::new().with_factor(0.5).with_passes(2))?;
///
/// assert_eq!(result.passes_performed, 2);
/// assert_eq!(result.mesh.faces, cube.faces);
/// assert!(result.max_displacement > 0.0);
/// # Ok::<(), mesh_smooth::SmoothError>(())
/// ```
pub fn smooth_laplacian(
    mesh: &IndexedMesh,
    params: &SmoothParams,
) -> SmoothResult<LaplacianResult> {
    if !params.factor.is_finite() {
        return Err(SmoothError::InvalidFactor(params.factor));
    }
    mesh.validate()?;

    let mut current = mesh.clone();
    let mut max_displacement = 0.0_f64;
    let mut total_displacement = 0.0;

    for pass in 0..params.passes {
        let pass_max = smooth_pass(&mut current, params.factor);
        max_displacement = max_displacement.max(pass_max);
        total_displacement += pass_max;
        debug!(pass = pass + 1, max_displacement = pass_max, "Smoothing pass");
    }

    if params.passes > 0 {
        current.recalculate_normals();
        current.recalculate_tangents();
    }
    let bounds = current.bounds();

    debug!(
        vertices = current.vertices.len(),
        passes = params.passes,
        max_displacement,
        "Smoothed mesh"
    );

    Ok(LaplacianResult {
        mesh: current,
        passes_performed: params.passes,
        max_displacement,
        total_displacement,
        bounds,
    })
}

/// Run one pass in place and return the largest displacement.
fn smooth_pass(mesh: &mut IndexedMesh, factor: f64) -> f64 {
    let adjacency = AdjacencyMap::build(mesh);
    let mut max_displacement = 0.0_f64;

    for vertex in &mut mesh.vertices {
        let Some(centroid) = adjacency.centroid(&vertex.position) else {
            continue;
        };
        let displacement = (vertex.position - centroid) * factor;
        vertex.position -= displacement;
        max_displacement = max_displacement.max(displacement.norm());
    }

    max_displacement
}
