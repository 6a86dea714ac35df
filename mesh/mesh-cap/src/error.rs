//! Error types for the cap pipeline.

use mesh_extract::ExtractError;
use mesh_shell::ShellError;
use mesh_smooth::SmoothError;
use mesh_subdivide::SubdivideError;
use thiserror::Error;

/// Result type alias for cap pipeline operations.
pub type CapResult<T> = Result<T, CapError>;

/// Errors that can occur while building a cap shell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CapError {
    /// No object exists at the configured path.
    #[error("object '{0}' does not exist, check the path")]
    ObjectNotFound(String),

    /// Extraction failed.
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// Extrusion failed.
    #[error("extrusion failed: {0}")]
    Shell(#[from] ShellError),

    /// Subdivision failed.
    #[error("subdivision failed: {0}")]
    Subdivide(#[from] SubdivideError),

    /// Smoothing failed.
    #[error("smoothing failed: {0}")]
    Smooth(#[from] SmoothError),
}

impl CapError {
    /// Create an object not found error.
    #[must_use]
    pub fn object_not_found(path: impl Into<String>) -> Self {
        Self::ObjectNotFound(path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CapError::object_not_found("Cabin/Roof");
        assert!(format!("{err}").contains("'Cabin/Roof'"));

        let err = CapError::from(ExtractError::ZeroDirection);
        assert!(format!("{err}").starts_with("extraction failed"));

        let err = CapError::from(SmoothError::InvalidFactor(f64::INFINITY));
        assert!(format!("{err}").starts_with("smoothing failed"));
    }
}
