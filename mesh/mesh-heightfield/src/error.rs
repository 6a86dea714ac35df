//! Error types for height-field meshes.

use thiserror::Error;

/// Errors that can occur while building height-field grids.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeightFieldError {
    /// A grid needs at least one cell along each axis.
    #[error("grid dimensions must be positive, got {width} x {depth}")]
    InvalidDimensions {
        /// Cells along X.
        width: u32,
        /// Cells along Z.
        depth: u32,
    },

    /// The grid has more vertices than `u32` indices can address.
    #[error("grid of {width} x {depth} cells has more vertices than u32 can index")]
    GridTooLarge {
        /// Cells along X.
        width: u32,
        /// Cells along Z.
        depth: u32,
    },

    /// Height data does not match the grid dimensions.
    #[error("height data has {actual} samples, expected {expected}")]
    SampleCountMismatch {
        /// Samples required by the dimensions.
        expected: usize,
        /// Samples provided.
        actual: usize,
    },

    /// Cell size must be positive and finite.
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),

    /// The sampler returned NaN or infinity.
    #[error("height at ({x}, {z}) is not finite")]
    NonFiniteHeight {
        /// Sample X.
        x: f64,
        /// Sample Z.
        z: f64,
    },
}

/// Result type for height-field operations.
pub type HeightFieldResult<T> = Result<T, HeightFieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeightFieldError::InvalidDimensions { width: 0, depth: 3 };
        assert!(format!("{err}").contains("0 x 3"));

        let err = HeightFieldError::SampleCountMismatch {
            expected: 9,
            actual: 4,
        };
        assert!(format!("{err}").contains("expected 9"));

        let err = HeightFieldError::NonFiniteHeight { x: 1.0, z: 2.0 };
        assert!(format!("{err}").contains("(1, 2)"));
    }
}
