//! Object transforms.

use nalgebra::{Point3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placement of a mesh in the world: translation, rotation and scale.
///
/// This is the object transform the scene hands over with each mesh. Its
/// position is the pivot that extraction measures directions from.
///
/// # Example
///
/// ```
/// use mesh_extract::ObjectFrame;
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
///
/// let frame = ObjectFrame::new(
///     Point3::new(10.0, 0.0, 0.0),
///     UnitQuaternion::identity(),
///     Vector3::new(2.0, 2.0, 2.0),
/// );
///
/// let world = frame.transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(world, Point3::new(12.0, 0.0, 0.0));
///
/// // Directions ignore translation and scale.
/// assert_eq!(frame.transform_direction(&Vector3::x()), Vector3::x());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectFrame {
    /// World position of the pivot.
    pub position: Point3<f64>,
    /// World rotation.
    pub rotation: UnitQuaternion<f64>,
    /// Per-axis scale.
    pub scale: Vector3<f64>,
}

impl ObjectFrame {
    /// Create a frame from its parts.
    #[must_use]
    pub const fn new(
        position: Point3<f64>,
        rotation: UnitQuaternion<f64>,
        scale: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Frame at the origin with no rotation and unit scale.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Point3::origin(), UnitQuaternion::identity(), Vector3::repeat(1.0))
    }

    /// Same rotation and scale, pivot moved by `offset`.
    ///
    /// Used to correct meshes whose pivot sits far from their visual
    /// center.
    #[must_use]
    pub fn with_pivot_offset(self, offset: Vector3<f64>) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }

    /// Local point to world: scale, then rotate, then translate.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.position + self.rotation * point.coords.component_mul(&self.scale)
    }

    /// Local direction to world. Only the rotation applies.
    #[must_use]
    pub fn transform_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * direction
    }
}

impl Default for ObjectFrame {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_is_noop() {
        let frame = ObjectFrame::identity();
        let p = Point3::new(1.0, -2.0, 3.0);
        assert_eq!(frame.transform_point(&p), p);
        assert_eq!(frame.transform_direction(&p.coords), p.coords);
    }

    #[test]
    fn rotation_applies_to_points_and_directions() {
        // Quarter turn about Z maps +X to +Y.
        let frame = ObjectFrame::new(
            Point3::new(0.0, 0.0, 5.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
            Vector3::new(3.0, 1.0, 1.0),
        );

        let p = frame.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 3.0, 5.0), epsilon = 1e-12);

        let d = frame.transform_direction(&Vector3::x());
        assert_relative_eq!(d, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn pivot_offset_moves_position_only() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.3);
        let frame = ObjectFrame::new(Point3::new(1.0, 1.0, 1.0), rotation, Vector3::repeat(2.0));
        let moved = frame.with_pivot_offset(Vector3::new(0.0, -1.0, 4.0));

        assert_eq!(moved.position, Point3::new(1.0, 0.0, 5.0));
        assert_eq!(moved.rotation, frame.rotation);
        assert_eq!(moved.scale, frame.scale);
    }
}
