//! Extraction parameters.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for cap extraction.
///
/// A vertex belongs to the cap when the angle between its world-space
/// normal and `direction` is strictly less than `max_angle_degrees`.
///
/// # Example
///
/// ```
/// use mesh_extract::ExtractParams;
/// use nalgebra::Vector3;
///
/// let params = ExtractParams::upward(30.0).with_pivot_offset(Vector3::new(0.0, -2.0, 0.0));
/// assert_eq!(params.direction, Vector3::y());
/// assert_eq!(params.max_angle_degrees, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractParams {
    /// Target direction. Any non-zero vector; it is not normalized.
    pub direction: Vector3<f64>,

    /// Selection threshold in degrees (exclusive).
    pub max_angle_degrees: f64,

    /// Offset added to the object's pivot before measuring normals.
    pub pivot_offset: Vector3<f64>,

    /// Emit a `trace` event for the ray to every selected vertex.
    pub debug_rays: bool,

    /// Keep per-vertex working records in the result.
    pub keep_records: bool,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            direction: Vector3::y(),
            max_angle_degrees: 45.0,
            pivot_offset: Vector3::zeros(),
            debug_rays: false,
            keep_records: false,
        }
    }
}

impl ExtractParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select upward-facing surface within `max_angle_degrees` of `+Y`.
    #[must_use]
    pub fn upward(max_angle_degrees: f64) -> Self {
        Self {
            max_angle_degrees,
            ..Self::default()
        }
    }

    /// Select surface facing `direction` within `max_angle_degrees`.
    #[must_use]
    pub fn toward(direction: Vector3<f64>, max_angle_degrees: f64) -> Self {
        Self {
            direction,
            max_angle_degrees,
            ..Self::default()
        }
    }

    /// Set the target direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Vector3<f64>) -> Self {
        self.direction = direction;
        self
    }

    /// Set the maximum angle in degrees.
    #[must_use]
    pub const fn with_max_angle(mut self, degrees: f64) -> Self {
        self.max_angle_degrees = degrees;
        self
    }

    /// Set the pivot offset.
    #[must_use]
    pub const fn with_pivot_offset(mut self, offset: Vector3<f64>) -> Self {
        self.pivot_offset = offset;
        self
    }

    /// Enable or disable debug rays.
    #[must_use]
    pub const fn with_debug_rays(mut self, enabled: bool) -> Self {
        self.debug_rays = enabled;
        self
    }

    /// Keep or drop per-vertex records.
    #[must_use]
    pub const fn with_keep_records(mut self, keep: bool) -> Self {
        self.keep_records = keep;
        self
    }
}
