//! Subdivision parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest pass count that is honored. Each pass multiplies the face
/// count by 4, so six passes is already 4096 times the input.
pub const MAX_PASSES: u32 = 6;

/// Parameters for mesh subdivision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubdivideParams {
    /// Requested number of passes. Values outside `0..=6` are clamped.
    pub passes: i32,

    /// Maximum faces allowed in result (prevents memory issues).
    pub max_faces: usize,
}

impl Default for SubdivideParams {
    fn default() -> Self {
        Self {
            passes: 1,
            max_faces: 10_000_000, // 10M faces max
        }
    }
}

/// A pass count that had to be brought into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassClamp {
    /// The pass count asked for.
    pub requested: i32,
    /// The pass count used.
    pub applied: u32,
}

impl std::fmt::Display for PassClamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "requested {} subdivision passes, applied {} (allowed 0 to {MAX_PASSES})",
            self.requested, self.applied
        )
    }
}

impl SubdivideParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters that leave the mesh untouched.
    #[must_use]
    pub fn none() -> Self {
        Self {
            passes: 0,
            ..Self::default()
        }
    }

    /// Set number of passes.
    #[must_use]
    pub const fn with_passes(mut self, passes: i32) -> Self {
        self.passes = passes;
        self
    }

    /// Set maximum faces allowed.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// The pass count that will actually run, and the clamp if one was
    /// needed.
    #[must_use]
    pub const fn clamped_passes(&self) -> (u32, Option<PassClamp>) {
        if self.passes < 0 {
            (
                0,
                Some(PassClamp {
                    requested: self.passes,
                    applied: 0,
                }),
            )
        } else if self.passes.unsigned_abs() > MAX_PASSES {
            (
                MAX_PASSES,
                Some(PassClamp {
                    requested: self.passes,
                    applied: MAX_PASSES,
                }),
            )
        } else {
            (self.passes.unsigned_abs(), None)
        }
    }

    /// Calculate expected face count after `passes` passes.
    ///
    /// Each pass multiplies face count by 4. `None` on overflow.
    #[must_use]
    pub const fn expected_faces(current_faces: usize, passes: u32) -> Option<usize> {
        let mut faces = current_faces;
        let mut i = 0;
        while i < passes {
            faces = match faces.checked_mul(4) {
                Some(f) => f,
                None => return None,
            };
            i += 1;
        }
        Some(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SubdivideParams::default();
        assert_eq!(params.passes, 1);
        assert_eq!(params.max_faces, 10_000_000);
        assert_eq!(params.clamped_passes(), (1, None));
    }

    #[test]
    fn test_builder() {
        let params = SubdivideParams::new()
            .with_passes(3)
            .with_max_faces(1_000_000);

        assert_eq!(params.passes, 3);
        assert_eq!(params.max_faces, 1_000_000);
        assert_eq!(SubdivideParams::none().passes, 0);
    }

    #[test]
    fn test_clamp_low() {
        let (applied, clamp) = SubdivideParams::new().with_passes(-2).clamped_passes();
        assert_eq!(applied, 0);
        assert_eq!(
            clamp,
            Some(PassClamp {
                requested: -2,
                applied: 0
            })
        );
    }

    #[test]
    fn test_clamp_high() {
        let (applied, clamp) = SubdivideParams::new().with_passes(9).clamped_passes();
        assert_eq!(applied, 6);
        assert_eq!(clamp.map(|c| c.requested), Some(9));
    }

    #[test]
    fn test_in_range_not_clamped() {
        for passes in 0..=6 {
            let (applied, clamp) = SubdivideParams::new().with_passes(passes).clamped_passes();
            assert_eq!(i64::from(applied), i64::from(passes));
            assert!(clamp.is_none());
        }
    }

    #[test]
    fn test_expected_faces() {
        assert_eq!(SubdivideParams::expected_faces(100, 1), Some(400));
        assert_eq!(SubdivideParams::expected_faces(100, 2), Some(1600));
        assert_eq!(SubdivideParams::expected_faces(12, 3), Some(768)); // 12 * 4^3
        assert_eq!(SubdivideParams::expected_faces(usize::MAX, 1), None);
    }

    #[test]
    fn test_clamp_display() {
        let clamp = PassClamp {
            requested: 10,
            applied: 6,
        };
        assert_eq!(
            format!("{clamp}"),
            "requested 10 subdivision passes, applied 6 (allowed 0 to 6)"
        );
    }
}
