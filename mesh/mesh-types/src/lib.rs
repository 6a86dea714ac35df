//! Core mesh types for the snow-cap pipeline.
//!
//! This crate provides the data model every pipeline stage consumes and
//! produces:
//!
//! - [`Vertex`] - position with normal, UV and tangent
//! - [`IndexedMesh`] - a triangle mesh with indexed vertices
//! - [`PositionKey`] - exact hash key for "same position, same corner"
//! - [`Triangle`] - a concrete triangle with vertex positions
//! - [`Aabb`] - axis-aligned bounding box
//! - [`MeshError`] - malformed-input errors
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! `+Y` is up. The face normal of `[a, b, c]` is `(b - a) × (c - a)`,
//! which matches how engine meshes with clockwise front faces store their
//! triangles.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Point3, Vector2, Vector3};
//!
//! let positions = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(1.0, 0.0, 0.0),
//! ];
//! let mesh = IndexedMesh::from_arrays(
//!     &positions,
//!     &[Vector3::y(); 3],
//!     &[Vector2::zeros(); 3],
//!     &[0, 1, 2],
//! )
//! .unwrap();
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod error;
mod key;
mod mesh;
mod traits;
mod triangle;
mod vertex;

pub use bounds::Aabb;
pub use error::{MeshError, MeshResult};
pub use key::PositionKey;
pub use mesh::{unit_cube, unit_square, IndexedMesh};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, UnitQuaternion, Vector2, Vector3, Vector4};
