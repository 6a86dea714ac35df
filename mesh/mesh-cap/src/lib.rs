//! Procedural cap shells.
//!
//! Builds a thin shell over the part of an object that faces a given
//! direction, such as a layer of snow on a roof:
//!
//! 1. **Extract** the faces within an angle of the direction
//!    ([`mesh_extract`])
//! 2. **Extrude** them into a closed shell along the same direction
//!    ([`mesh_shell`])
//! 3. **Subdivide** the shell ([`mesh_subdivide`])
//! 4. **Smooth** it with Laplacian smoothing ([`mesh_smooth`])
//!
//! [`build_cap_shell`] runs the pipeline for one object. [`build_caps`]
//! runs it for a [`CapParamsList`], looking objects up through a
//! [`MeshResolver`].
//!
//! # Example
//!
//! ```
//! use mesh_cap::{build_caps, CapParams, CapParamsList, InMemoryScene};
//! use mesh_extract::ObjectFrame;
//! use mesh_types::unit_cube;
//!
//! let mut scene = InMemoryScene::new();
//! scene.insert("Cabin/Roof", unit_cube(), ObjectFrame::identity());
//!
//! let mut list = CapParamsList::new();
//! list.push(CapParams::new("Cabin/Roof").with_extrude_distance(0.2));
//!
//! let shells = build_caps(&scene, &list)?;
//! assert_eq!(shells[0].name, "Cabin_snow");
//! println!("{}", shells[0]);
//! # Ok::<(), mesh_cap::CapError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;
mod pipeline;
mod scene;

pub use error::{CapError, CapResult};
pub use params::{CapParams, CapParamsList, PATH_SEPARATOR};
pub use pipeline::{build_cap_shell, CapShell};
pub use scene::{build_caps, InMemoryScene, MeshResolver};
