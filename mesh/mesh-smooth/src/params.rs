//! Smoothing parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for Laplacian smoothing.
///
/// Each pass moves every vertex by `(centroid - position) * factor`.
/// `factor` is not clamped: values above 1 overshoot the centroid and
/// negative values push vertices away from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmoothParams {
    /// Fraction of the way to the neighbour centroid moved per pass.
    pub factor: f64,

    /// Number of passes.
    pub passes: u32,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            factor: 0.5,
            passes: 1,
        }
    }
}

impl SmoothParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gentle smoothing: a small factor over a few passes.
    #[must_use]
    pub const fn gentle() -> Self {
        Self {
            factor: 0.25,
            passes: 2,
        }
    }

    /// Strong smoothing: full steps to the centroid, repeated.
    #[must_use]
    pub const fn strong() -> Self {
        Self {
            factor: 1.0,
            passes: 5,
        }
    }

    /// Set the smoothing factor.
    #[must_use]
    pub const fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Set number of passes.
    #[must_use]
    pub const fn with_passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }
}
