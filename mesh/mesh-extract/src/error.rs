//! Error types for cap extraction.

use mesh_types::MeshError;
use thiserror::Error;

/// Errors that can occur during cap extraction.
///
/// An extraction that selects nothing is not an error: it yields an empty
/// cap with no boundary edges.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// The input mesh is malformed.
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// The extraction direction has zero length.
    #[error("extraction direction must be non-zero")]
    ZeroDirection,

    /// The maximum angle is NaN or infinite.
    #[error("invalid extraction angle: {0} (must be finite)")]
    InvalidAngle(f64),

    /// A flat boundary list cannot be split into (from, to) pairs.
    #[error("boundary edge list has odd length {0}")]
    OddEdgeList(usize),
}

/// Result type for cap extraction.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::InvalidAngle(f64::NAN);
        assert!(format!("{err}").contains("NaN"));

        let err = ExtractError::OddEdgeList(7);
        assert!(format!("{err}").contains('7'));

        let err: ExtractError = MeshError::IndexCountNotMultipleOfThree { count: 4 }.into();
        assert!(format!("{err}").starts_with("invalid input mesh"));
    }
}
