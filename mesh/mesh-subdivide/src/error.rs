//! Error types for mesh subdivision operations.

use mesh_types::MeshError;
use thiserror::Error;

/// Errors that can occur during subdivision operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivideError {
    /// The input mesh is malformed.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// Mesh would exceed maximum size.
    #[error("Subdivision would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after subdivision.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SubdivideError::from(MeshError::IndexOutOfRange {
            face: 0,
            index: 5,
            vertex_count: 3,
        });
        assert!(format!("{err}").starts_with("invalid mesh"));

        let err = SubdivideError::MeshTooLarge {
            current: 1000,
            projected: 4000,
            max: 2000,
        };
        let display = format!("{err}");
        assert!(display.contains("1000"));
        assert!(display.contains("4000"));
        assert!(display.contains("2000"));
    }
}
