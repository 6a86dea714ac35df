//! Error types for smoothing.

use mesh_types::MeshError;
use thiserror::Error;

/// Errors that can occur during smoothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmoothError {
    /// The input mesh is malformed.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// The smoothing factor is NaN or infinite.
    #[error("smoothing factor must be finite, got {0}")]
    InvalidFactor(f64),
}

/// Result type for smoothing operations.
pub type SmoothResult<T> = Result<T, SmoothError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SmoothError::InvalidFactor(f64::NAN);
        assert!(format!("{err}").contains("NaN"));

        let err = SmoothError::from(MeshError::RepeatedCorner { face: 2, index: 1 });
        assert!(format!("{err}").contains("face 2"));
    }
}
