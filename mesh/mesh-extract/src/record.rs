//! Per-vertex working data.

use nalgebra::{Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything extraction computed for one input vertex.
///
/// Only returned when [`ExtractParams::keep_records`](crate::ExtractParams::keep_records)
/// is set. Useful for tuning the angle and pivot offset of a difficult mesh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexRecord {
    /// Index in the input mesh.
    pub original_index: u32,

    /// Position in mesh space.
    pub local_position: Point3<f64>,

    /// Normal in mesh space.
    pub local_normal: Vector3<f64>,

    /// Position in world space.
    pub world_position: Point3<f64>,

    /// Normal direction in the pivot-corrected frame.
    pub world_normal: Vector3<f64>,

    /// Angle between `world_normal` and the target direction, in degrees.
    /// `None` when the normal has zero length.
    pub angle_degrees: Option<f64>,

    /// Texture coordinate.
    pub uv: Vector2<f64>,

    /// Passed the angle test.
    pub selected: bool,

    /// Index of this position in the cap, if the position was kept.
    ///
    /// Set for every vertex at a kept position, including duplicates that
    /// did not supply the cap vertex's attributes.
    pub cap_index: Option<u32>,

    /// The cap vertex at this position lies on a true boundary edge.
    pub on_boundary: bool,
}
