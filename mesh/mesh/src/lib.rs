//! Procedural mesh toolkit for directional cap shells.
//!
//! This umbrella crate re-exports all mesh-* crates, providing a unified API
//! for building shells over the upward-facing parts of a mesh (snow on a
//! roof, moss on a rock) and for meshing height fields.
//!
//! # Quick Start
//!
//! ```
//! use mesh::prelude::*;
//!
//! let cube = unit_cube();
//! let params = CapParams::new("Crate")
//!     .with_extract_angle(30.0)
//!     .with_extrude_distance(0.1)
//!     .with_subdivision_passes(1)
//!     .with_smoothing(1, 0.5);
//!
//! let shell = build_cap_shell(&cube, &ObjectFrame::identity(), &params)?;
//! if let Some(shell) = shell {
//!     println!("{shell}");
//! }
//! # Ok::<(), mesh::cap::CapError>(())
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Core data structures: `IndexedMesh`, `Vertex`, `PositionKey`, `Aabb`
//!
//! ## Pipeline Stages
//! - [`extract`] - Directional cap extraction and boundary classification
//! - [`shell`] - Extrusion of a cap into a closed shell
//! - [`subdivide`] - Midpoint subdivision
//! - [`smooth`] - Position-keyed Laplacian smoothing
//!
//! ## Pipeline
//! - [`cap`] - Extract → Extrude → Subdivide → Smooth per object
//!
//! ## Mesh Generation
//! - [`heightfield`] - Grid meshes that follow a height source
//!
//! # Feature Flags
//!
//! - `serde` - Serialize and deserialize meshes and parameter records

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/mesh/0.7.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `IndexedMesh`, `Vertex`, `PositionKey`, `Aabb`.
pub use mesh_types as types;

/// Directional cap extraction and boundary classification.
pub use mesh_extract as extract;

/// Extrusion of a cap into a closed shell.
pub use mesh_shell as shell;

/// Midpoint subdivision.
pub use mesh_subdivide as subdivide;

/// Position-keyed Laplacian smoothing.
pub use mesh_smooth as smooth;

/// Height-field grid meshes.
pub use mesh_heightfield as heightfield;

/// The full cap pipeline.
pub use mesh_cap as cap;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for cap and height-field work.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{
        unit_cube, unit_square, Aabb, IndexedMesh, MeshBounds, MeshTopology, Point3,
        PositionKey, Vector3, Vertex,
    };

    // Stages
    pub use mesh_extract::{extract_cap, BoundaryEdges, ExtractParams, ObjectFrame};
    pub use mesh_shell::{extrude_cap, validate_shell, ExtrudeParams};
    pub use mesh_smooth::{smooth_laplacian, SmoothParams};
    pub use mesh_subdivide::{subdivide_mesh, SubdivideParams};

    // Pipeline (main use case)
    pub use mesh_cap::{build_cap_shell, build_caps, CapParams, CapParamsList, InMemoryScene};

    // Height fields
    pub use mesh_heightfield::{build_height_field_grid, HeightGrid, HeightSampler};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let mesh = IndexedMesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_module_reexports() {
        let _ = types::IndexedMesh::new();
        let _ = extract::ExtractParams::default();
        let _ = shell::ExtrudeParams::default();
        let _ = subdivide::SubdivideParams::default();
        let _ = smooth::SmoothParams::default();
        let _ = cap::CapParams::default();
        let _ = heightfield::GRID_TANGENT;
    }
}
