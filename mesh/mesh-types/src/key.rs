//! Exact position keys.

use nalgebra::Point3;

/// Hashable identity of a vertex position.
///
/// Two positions map to the same key exactly when their coordinates compare
/// equal as `f64` values. There is no tolerance: positions that differ in
/// the last bit are different keys. `-0.0` and `0.0` compare equal and so
/// share a key.
///
/// Meshes routinely split one geometric corner into several vertices with
/// different normals or UVs. Operations that care about geometric identity
/// (cap extraction, smoothing adjacency, closure checks) key by position
/// instead of by vertex index.
///
/// # Example
///
/// ```
/// use mesh_types::{PositionKey, Point3};
///
/// let a = PositionKey::new(&Point3::new(0.0, 1.0, 2.0));
/// let b = PositionKey::new(&Point3::new(-0.0, 1.0, 2.0));
/// assert_eq!(a, b);
/// assert_ne!(a, PositionKey::new(&Point3::new(0.0, 1.0, 2.000_000_1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionKey([u64; 3]);

impl PositionKey {
    /// Build the key for a position.
    #[inline]
    #[must_use]
    pub fn new(position: &Point3<f64>) -> Self {
        Self([
            canonical_bits(position.x),
            canonical_bits(position.y),
            canonical_bits(position.z),
        ])
    }

    /// Recover the position this key was built from.
    #[inline]
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(
            f64::from_bits(self.0[0]),
            f64::from_bits(self.0[1]),
            f64::from_bits(self.0[2]),
        )
    }
}

impl From<&Point3<f64>> for PositionKey {
    fn from(position: &Point3<f64>) -> Self {
        Self::new(position)
    }
}

// Adding positive zero maps -0.0 to 0.0 and leaves every other value intact.
#[inline]
fn canonical_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_positions_share_key() {
        let p = Point3::new(0.1 + 0.2, 1.0, -3.5);
        assert_eq!(PositionKey::new(&p), PositionKey::new(&p));
    }

    #[test]
    fn negative_zero_matches_zero() {
        let a = PositionKey::new(&Point3::new(0.0, -0.0, 0.0));
        let b = PositionKey::new(&Point3::new(-0.0, 0.0, -0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn no_tolerance() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(1.0 + f64::EPSILON, 0.0, 0.0);
        assert_ne!(PositionKey::new(&a), PositionKey::new(&b));
    }

    #[test]
    fn round_trips_to_point() {
        let p = Point3::new(1.25, -7.5, 3.0);
        assert_eq!(PositionKey::new(&p).to_point(), p);
    }
}
