//! Extrusion parameters.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for cap extrusion.
///
/// The top layer sits at `direction * distance` from the cap. The direction
/// is used as given, so a non-unit direction scales the thickness.
///
/// # Example
///
/// ```
/// use mesh_shell::ExtrudeParams;
///
/// let params = ExtrudeParams::upward(0.25);
/// assert!(params.is_active());
/// assert!(!params.with_enabled(false).is_active());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtrudeParams {
    /// Extrusion direction.
    pub direction: Vector3<f64>,

    /// Extrusion distance. Zero or negative passes the cap through.
    pub distance: f64,

    /// Extrusion switch. When off the cap passes through.
    pub enabled: bool,

    /// Reverse the winding of the bottom layer so the shell is consistently
    /// oriented outward. Off by default, which keeps the bottom faces
    /// wound like the cap.
    pub flip_bottom: bool,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            direction: Vector3::y(),
            distance: 0.1,
            enabled: true,
            flip_bottom: false,
        }
    }
}

impl ExtrudeParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extrude along `+Y` by `distance`.
    #[must_use]
    pub fn upward(distance: f64) -> Self {
        Self {
            distance,
            ..Self::default()
        }
    }

    /// Extrude along `direction` by `distance`.
    #[must_use]
    pub fn along(direction: Vector3<f64>, distance: f64) -> Self {
        Self {
            direction,
            distance,
            ..Self::default()
        }
    }

    /// Parameters that pass every cap through untouched.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the extrusion direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Vector3<f64>) -> Self {
        self.direction = direction;
        self
    }

    /// Set the extrusion distance.
    #[must_use]
    pub const fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Turn extrusion on or off.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Reverse the bottom layer's winding.
    #[must_use]
    pub const fn with_flip_bottom(mut self, flip_bottom: bool) -> Self {
        self.flip_bottom = flip_bottom;
        self
    }

    /// Whether these parameters produce a shell rather than a pass-through.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && self.distance > 0.0
    }

    /// Offset from a cap vertex to its top-layer copy.
    #[must_use]
    pub fn offset(&self) -> Vector3<f64> {
        self.direction * self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params() {
        let params = ExtrudeParams::default();
        assert_eq!(params.direction, Vector3::y());
        assert!(params.enabled);
        assert!(!params.flip_bottom);
        assert!(params.is_active());
    }

    #[test]
    fn test_inactive_distances() {
        assert!(!ExtrudeParams::upward(0.0).is_active());
        assert!(!ExtrudeParams::upward(-1.0).is_active());
        assert!(!ExtrudeParams::upward(f64::NAN).is_active());
        assert!(!ExtrudeParams::disabled().is_active());
    }

    #[test]
    fn test_offset_not_normalized() {
        let params = ExtrudeParams::along(Vector3::new(0.0, 2.0, 0.0), 1.5);
        assert_relative_eq!(params.offset().y, 3.0);
    }

    #[test]
    fn test_builders() {
        let params = ExtrudeParams::new()
            .with_direction(Vector3::x())
            .with_distance(2.0)
            .with_flip_bottom(true)
            .with_enabled(false);
        assert_eq!(params.direction, Vector3::x());
        assert_relative_eq!(params.distance, 2.0);
        assert!(params.flip_bottom);
        assert!(!params.enabled);
    }
}
