//! Laplacian smoothing over position-keyed adjacency.
//!
//! - [`AdjacencyMap`] - neighbour positions per position, built from faces
//! - [`smooth_laplacian`] - move vertices toward their neighbour centroid
//!
//! Adjacency is keyed by position rather than by vertex index, so meshes
//! with split vertices (hard edges, UV seams, or the duplicated midpoints
//! left by `mesh-subdivide`) smooth as one surface and stay closed.
//!
//! # Example
//!
//! ```
//! use mesh_smooth::{smooth_laplacian, SmoothParams};
//! use mesh_types::unit_square;
//!
//! let square = unit_square();
//! let result = smooth_laplacian(&square, &SmoothParams::new().with_factor(0.0).with_passes(3))?;
//! assert_eq!(result.mesh.positions().collect::<Vec<_>>(), square.positions().collect::<Vec<_>>());
//! # Ok::<(), mesh_smooth::SmoothError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod error;
mod laplacian;
mod params;

pub use adjacency::AdjacencyMap;
pub use error::{SmoothError, SmoothResult};
pub use laplacian::{smooth_laplacian, LaplacianResult};
pub use params::SmoothParams;
