//! Height-field grid meshes.
//!
//! Builds a regular grid mesh whose vertices follow a height source, such
//! as a terrain patch to lay snow on.
//!
//! - [`HeightSampler`] - anything that reports a height at `(x, z)`,
//!   including plain closures
//! - [`HeightGrid`] - a sampled grid with bilinear interpolation
//! - [`build_height_field_grid`] - the mesh builder
//!
//! Heights run along +Y and the grid spans X (width) and Z (depth).

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod grid;
mod sampler;

pub use error::{HeightFieldError, HeightFieldResult};
pub use grid::{build_height_field_grid, HeightFieldMesh, GRID_TANGENT};
pub use sampler::{HeightGrid, HeightSampler};
