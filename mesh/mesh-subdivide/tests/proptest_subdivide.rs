//! Property-based tests for subdivision.
//!
//! Run with: cargo test -p mesh-subdivide -- proptest

use mesh_subdivide::{subdivide_mesh, SubdivideParams};
use mesh_types::{IndexedMesh, PositionKey, Vertex};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Generate a random vertex position in a bounded range.
fn arb_position() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-100.0..100.0f64)
}

/// Generate a random vertex with position only.
fn arb_vertex() -> impl Strategy<Value = Vertex> {
    arb_position().prop_map(|[x, y, z]| Vertex::from_coords(x, y, z))
}

/// Generate a valid mesh: every face uses three distinct in-range indices.
fn arb_mesh(max_vertices: usize, max_faces: usize) -> impl Strategy<Value = IndexedMesh> {
    (3..=max_vertices).prop_flat_map(move |num_vertices| {
        let n = u32::try_from(num_vertices).unwrap_or(u32::MAX);
        let face = prop::array::uniform3(0..n)
            .prop_filter("corners must differ", |[a, b, c]| a != b && b != c && c != a);

        (
            prop::collection::vec(arb_vertex(), num_vertices),
            prop::collection::vec(face, 0..=max_faces),
        )
            .prop_map(|(vertices, faces)| IndexedMesh { vertices, faces })
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Zero passes returns the input unchanged.
    #[test]
    fn zero_passes_is_identity(mesh in arb_mesh(20, 20)) {
        let result = subdivide_mesh(&mesh, &SubdivideParams::none()).unwrap();
        prop_assert_eq!(result.mesh, mesh);
    }

    /// Face count grows by exactly 4 per pass.
    #[test]
    fn faces_grow_by_four_per_pass(mesh in arb_mesh(12, 10), passes in 0i32..=3) {
        let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_passes(passes)).unwrap();
        let expected = mesh.faces.len() * 4usize.pow(passes.unsigned_abs());
        prop_assert_eq!(result.mesh.faces.len(), expected);
    }

    /// Vertex count grows by three per input face per pass.
    #[test]
    fn vertices_grow_by_three_per_face(mesh in arb_mesh(12, 10), passes in 1i32..=3) {
        let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_passes(passes)).unwrap();
        let faces = mesh.faces.len();
        let added = faces * (4usize.pow(passes.unsigned_abs()) - 1);
        prop_assert_eq!(result.mesh.vertices.len(), mesh.vertices.len() + added);
    }

    /// Out-of-range pass counts never fail; they are clamped and reported.
    #[test]
    fn out_of_range_passes_clamp(passes in prop_oneof![-100i32..0, 7i32..100]) {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.faces.push([0, 1, 2]);

        let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_passes(passes)).unwrap();
        let clamp = result.clamp.unwrap();
        prop_assert_eq!(clamp.requested, passes);
        prop_assert!(result.passes_applied == 0 || result.passes_applied == 6);
    }

    /// Original vertices keep their exact positions and the result is a
    /// valid mesh.
    #[test]
    fn original_positions_kept(mesh in arb_mesh(12, 10)) {
        let result = subdivide_mesh(&mesh, &SubdivideParams::new()).unwrap();
        for (before, after) in mesh.vertices.iter().zip(&result.mesh.vertices) {
            prop_assert_eq!(PositionKey::new(&before.position), PositionKey::new(&after.position));
        }
        prop_assert!(result.mesh.validate().is_ok());
    }
}
