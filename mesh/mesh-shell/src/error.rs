//! Error types for shell operations.

use mesh_types::MeshError;
use thiserror::Error;

/// Result type alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors that can occur during shell operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The cap mesh is malformed.
    #[error("invalid cap mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// A boundary edge refers to a vertex the cap does not have.
    #[error("boundary edge {edge} refers to vertex {index}, but the cap has {vertex_count} vertices")]
    EdgeOutOfRange {
        /// Position of the edge in the boundary list.
        edge: usize,
        /// The offending vertex index.
        index: u32,
        /// Number of cap vertices.
        vertex_count: usize,
    },

    /// The extrusion offset is not a finite vector.
    #[error("extrusion offset is not finite")]
    NonFiniteOffset,
}

impl ShellError {
    /// Create an edge out of range error.
    #[must_use]
    pub const fn edge_out_of_range(edge: usize, index: u32, vertex_count: usize) -> Self {
        Self::EdgeOutOfRange {
            edge,
            index,
            vertex_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::edge_out_of_range(3, 9, 4);
        let display = format!("{err}");
        assert!(display.contains("edge 3"));
        assert!(display.contains("vertex 9"));
        assert!(display.contains("4 vertices"));

        let err = ShellError::from(MeshError::IndexCountNotMultipleOfThree { count: 4 });
        assert!(format!("{err}").starts_with("invalid cap mesh"));

        let err = ShellError::NonFiniteOffset;
        assert!(format!("{err}").contains("not finite"));
    }
}
