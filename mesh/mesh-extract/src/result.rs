//! Result type for cap extraction.

use mesh_types::IndexedMesh;

use crate::boundary::BoundaryEdges;
use crate::record::VertexRecord;

/// Result of cap extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The cap: selected positions, reindexed from 0, and the triangles
    /// whose three corners were all selected.
    pub mesh: IndexedMesh,

    /// True boundary edges in cap vertex indices.
    pub boundary_edges: BoundaryEdges,

    /// Input vertices that passed the angle test, before merging by
    /// position.
    pub selected_vertex_count: usize,

    /// Candidate edges from triangles with exactly two selected corners.
    pub candidate_edge_count: usize,

    /// Candidates dropped because no cap triangle owns them.
    pub pruned_edge_count: usize,

    /// Candidates dropped because they are interior to the cap.
    pub interior_edge_count: usize,

    /// Fully selected triangles dropped because two corners share a
    /// position.
    pub collapsed_face_count: usize,

    /// Per-vertex working data, empty unless requested.
    pub records: Vec<VertexRecord>,
}

impl ExtractionResult {
    /// Check if nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.vertices.is_empty()
    }
}

impl std::fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Extraction: {} selected → {} cap vertices, {} faces, {} boundary edges ({} pruned, {} interior)",
            self.selected_vertex_count,
            self.mesh.vertices.len(),
            self.mesh.faces.len(),
            self.boundary_edges.len(),
            self.pruned_edge_count,
            self.interior_edge_count
        )
    }
}
