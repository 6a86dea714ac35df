//! Axis-aligned bounds.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a set of positions.
///
/// Stages that move vertices report the bounds of their output, standing in
/// for an engine's "recalculate bounds" step.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let points = [Point3::new(1.0, 0.0, 3.0), Point3::new(-1.0, 2.0, 0.0)];
/// let aabb = Aabb::from_points(points.iter());
///
/// assert_eq!(aabb.min, Point3::new(-1.0, 0.0, 0.0));
/// assert_eq!(aabb.max, Point3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Smallest coordinate on each axis.
    pub min: Point3<f64>,
    /// Largest coordinate on each axis.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Bounds spanning two corners, in any order.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Bounds containing nothing. Any included point replaces both corners.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::from([f64::INFINITY; 3]),
            max: Point3::from([f64::NEG_INFINITY; 3]),
        }
    }

    /// Bounds of every point in `points`; empty for no points.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        points.fold(Self::empty(), |mut aabb, point| {
            aabb.include(point);
            aabb
        })
    }

    /// No point has been included.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    /// Grow to cover `point`.
    #[inline]
    pub fn include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_corners() {
        let aabb = Aabb::new(Point3::new(1.0, 0.0, 5.0), Point3::new(0.0, 2.0, 3.0));
        assert_eq!(aabb.min, Point3::new(0.0, 0.0, 3.0));
        assert_eq!(aabb.max, Point3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn empty_until_a_point_is_included() {
        let mut aabb = Aabb::default();
        assert!(aabb.is_empty());
        assert!(Aabb::from_points(std::iter::empty()).is_empty());

        aabb.include(&Point3::new(4.0, -1.0, 2.0));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, aabb.max);
    }

    #[test]
    fn single_axis_flat_bounds_are_not_empty() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 1.0)];
        let aabb = Aabb::from_points(points.iter());
        assert!(!aabb.is_empty());
        assert_eq!(aabb.max.y, aabb.min.y);
    }
}
