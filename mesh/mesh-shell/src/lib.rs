//! Cap extrusion into closed shells.
//!
//! Takes a cap and its boundary edges (usually from `mesh-extract`) and
//! thickens it: a bottom layer, a top layer moved along the extrusion
//! direction, and side walls stitched along every boundary edge.
//!
//! # Quick Start
//!
//! ```
//! use mesh_extract::{extract_cap, ExtractParams, ObjectFrame};
//! use mesh_shell::{extrude_cap, validate_shell, ExtrudeParams};
//! use mesh_types::unit_cube;
//!
//! let cube = unit_cube();
//! let cap = extract_cap(&cube, &ObjectFrame::identity(), &ExtractParams::upward(45.0))?;
//!
//! let shell = extrude_cap(&cap.mesh, &cap.boundary_edges, &ExtrudeParams::upward(0.2))?;
//! assert!(shell.closed_boundary);
//!
//! let validation = validate_shell(&shell.mesh);
//! assert!(validation.is_closed());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Side Walls
//!
//! Every boundary edge becomes two triangles. Which half of the wall quad
//! comes first is tracked by [`WallCorner`], a two-state machine walked by
//! [`wall_triangles`]. Each wall triangle gets its own three vertices, so
//! seams stay hard after normals are recalculated.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;
mod shell;

pub use error::{ShellError, ShellResult};
pub use params::ExtrudeParams;

// Extrusion
pub use shell::{extrude_cap, ExtrusionResult};

// Side walls
pub use shell::{wall_triangles, WallCorner, WallStep, WallVertex};

// Shell validation
pub use shell::{validate_shell, ShellIssue, ShellValidation};
