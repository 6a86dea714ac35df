//! Directional cap extraction.
//!
//! Pulls the part of a mesh that faces a given direction out into a new,
//! reindexed mesh (the *cap*) and reports the cap's perimeter as directed
//! boundary edges, ready for extrusion.
//!
//! - [`extract_cap`] - select by normal angle, reindex, collect edges
//! - [`BoundaryClassifier`] - separate perimeter edges from interior edges
//!   and line-like false positives
//! - [`EdgeKey`] - direction-independent edge identity by position
//! - [`ObjectFrame`] - the object transform normals are measured in
//!
//! # Example
//!
//! ```
//! use mesh_extract::{extract_cap, ExtractParams, ObjectFrame};
//! use mesh_types::{unit_cube, MeshTopology};
//!
//! let cube = unit_cube();
//! let params = ExtractParams::upward(45.0);
//! let result = extract_cap(&cube, &ObjectFrame::identity(), &params)?;
//!
//! assert_eq!(result.mesh.face_count(), 2);
//! println!("{result}");
//! # Ok::<(), mesh_extract::ExtractError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod boundary;
mod error;
mod extract;
mod frame;
mod params;
mod record;
mod result;

pub use boundary::{
    canonical_cmp, BoundaryClassifier, BoundaryEdges, Classification, DirectedEdge, EdgeKey,
};
pub use error::{ExtractError, ExtractResult};
pub use extract::extract_cap;
pub use frame::ObjectFrame;
pub use params::ExtractParams;
pub use record::VertexRecord;
pub use result::ExtractionResult;
