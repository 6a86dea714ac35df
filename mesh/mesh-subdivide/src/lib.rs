//! Bounded midpoint subdivision.
//!
//! Splits every triangle into four by inserting its edge midpoints, for a
//! clamped number of passes. Used to add vertex density before smoothing.
//!
//! Midpoints are not shared between neighbouring triangles. The mesh keeps
//! the same shape and gains duplicate vertices along every original edge,
//! which position-keyed smoothing treats as one.
//!
//! # Examples
//!
//! ```
//! use mesh_types::unit_square;
//! use mesh_subdivide::{subdivide_mesh, SubdivideParams};
//!
//! let result = subdivide_mesh(&unit_square(), &SubdivideParams::new().with_passes(2))?;
//! assert_eq!(result.final_faces, 2 * 16);
//! assert!(result.clamp.is_none());
//!
//! // Out-of-range pass counts are clamped, not rejected.
//! let result = subdivide_mesh(&unit_square(), &SubdivideParams::new().with_passes(-1))?;
//! assert_eq!(result.passes_applied, 0);
//! assert!(result.clamp.is_some());
//! # Ok::<(), mesh_subdivide::SubdivideError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;
mod result;
mod subdivide;

pub use error::{SubdivideError, SubdivideResult};
pub use params::{PassClamp, SubdivideParams, MAX_PASSES};
pub use result::SubdivisionResult;
pub use subdivide::subdivide_mesh;
