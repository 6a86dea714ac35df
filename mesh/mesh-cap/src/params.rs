//! Per-object cap parameters.

use mesh_extract::ExtractParams;
use mesh_shell::ExtrudeParams;
use mesh_smooth::SmoothParams;
use mesh_subdivide::SubdivideParams;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator between levels of an object path.
pub const PATH_SEPARATOR: char = '/';

/// Everything needed to build one object's cap shell.
///
/// With the `serde` feature, missing fields take their default values, so
/// hand-written records only need the fields they change.
///
/// # Example
///
/// ```
/// use mesh_cap::CapParams;
///
/// let params = CapParams::new("Cabin/Roof")
///     .with_extract_angle(30.0)
///     .with_extrude_distance(0.25)
///     .with_subdivision_passes(2);
///
/// assert_eq!(params.top_level_name(), "Cabin");
/// assert_eq!(params.shell_name(), "Cabin_snow");
/// assert_eq!(params.extract_params().max_angle_degrees, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapParams {
    /// Path of the object in its hierarchy, levels separated by `/`.
    pub object_path: String,

    /// Selection threshold in degrees.
    pub extract_angle: f64,

    /// Direction the cap faces, also used as the extrusion direction.
    pub extract_direction: Vector3<f64>,

    /// Shell thickness along `extract_direction`.
    pub extrude_distance: f64,

    /// Subdivision passes, clamped to `0..=6`.
    pub subdivision_passes: i32,

    /// Smoothing passes.
    pub smoothness_passes: u32,

    /// Fraction of the way to the neighbour centroid moved per pass.
    pub smoothness_factor: f64,

    /// Offset added to the object's pivot before measuring normals.
    pub pivot_adjust: Vector3<f64>,

    /// Trace the ray to every selected vertex.
    pub debug_rays: bool,

    /// Build a shell for this object.
    pub active: bool,
}

impl Default for CapParams {
    fn default() -> Self {
        Self {
            object_path: String::new(),
            extract_angle: 45.0,
            extract_direction: Vector3::y(),
            extrude_distance: 0.1,
            subdivision_passes: 1,
            smoothness_passes: 1,
            smoothness_factor: 0.5,
            pivot_adjust: Vector3::zeros(),
            debug_rays: false,
            active: true,
        }
    }
}

impl CapParams {
    /// Default parameters for the object at `object_path`.
    #[must_use]
    pub fn new(object_path: impl Into<String>) -> Self {
        Self {
            object_path: object_path.into(),
            ..Self::default()
        }
    }

    /// Set the selection angle.
    #[must_use]
    pub const fn with_extract_angle(mut self, degrees: f64) -> Self {
        self.extract_angle = degrees;
        self
    }

    /// Set the cap direction.
    #[must_use]
    pub const fn with_extract_direction(mut self, direction: Vector3<f64>) -> Self {
        self.extract_direction = direction;
        self
    }

    /// Set the shell thickness.
    #[must_use]
    pub const fn with_extrude_distance(mut self, distance: f64) -> Self {
        self.extrude_distance = distance;
        self
    }

    /// Set the subdivision pass count.
    #[must_use]
    pub const fn with_subdivision_passes(mut self, passes: i32) -> Self {
        self.subdivision_passes = passes;
        self
    }

    /// Set the smoothing passes and factor.
    #[must_use]
    pub const fn with_smoothing(mut self, passes: u32, factor: f64) -> Self {
        self.smoothness_passes = passes;
        self.smoothness_factor = factor;
        self
    }

    /// Set the pivot adjustment.
    #[must_use]
    pub const fn with_pivot_adjust(mut self, offset: Vector3<f64>) -> Self {
        self.pivot_adjust = offset;
        self
    }

    /// Turn debug rays on or off.
    #[must_use]
    pub const fn with_debug_rays(mut self, enabled: bool) -> Self {
        self.debug_rays = enabled;
        self
    }

    /// Turn this record on or off.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// First level of the object path.
    #[must_use]
    pub fn top_level_name(&self) -> &str {
        self.object_path
            .split(PATH_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// Name for the generated shell object.
    #[must_use]
    pub fn shell_name(&self) -> String {
        format!("{}_snow", self.top_level_name())
    }

    /// Extraction stage parameters.
    #[must_use]
    pub fn extract_params(&self) -> ExtractParams {
        ExtractParams::toward(self.extract_direction, self.extract_angle)
            .with_pivot_offset(self.pivot_adjust)
            .with_debug_rays(self.debug_rays)
    }

    /// Extrusion stage parameters.
    #[must_use]
    pub fn extrude_params(&self) -> ExtrudeParams {
        ExtrudeParams::along(self.extract_direction, self.extrude_distance)
    }

    /// Subdivision stage parameters.
    #[must_use]
    pub fn subdivide_params(&self) -> SubdivideParams {
        SubdivideParams::new().with_passes(self.subdivision_passes)
    }

    /// Smoothing stage parameters.
    #[must_use]
    pub fn smooth_params(&self) -> SmoothParams {
        SmoothParams::new()
            .with_factor(self.smoothness_factor)
            .with_passes(self.smoothness_passes)
    }
}

/// A list of per-object records.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapParamsList {
    /// The records, in processing order.
    pub items: Vec<CapParams>,
}

impl CapParamsList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a record.
    pub fn push(&mut self, params: CapParams) {
        self.items.push(params);
    }

    /// Records that are switched on.
    pub fn active(&self) -> impl Iterator<Item = &CapParams> {
        self.items.iter().filter(|p| p.active)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The list has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<CapParams> for CapParamsList {
    fn from_iter<I: IntoIterator<Item = CapParams>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params() {
        let params = CapParams::default();
        assert_eq!(params.extract_direction, Vector3::y());
        assert_eq!(params.pivot_adjust, Vector3::zeros());
        assert!(!params.debug_rays);
        assert!(params.active);
    }

    #[test]
    fn test_names() {
        assert_eq!(CapParams::new("Cabin/Roof/Tiles").top_level_name(), "Cabin");
        assert_eq!(CapParams::new("Rock").shell_name(), "Rock_snow");
        assert_eq!(CapParams::new("").top_level_name(), "");
    }

    #[test]
    fn test_stage_params() {
        let direction = Vector3::new(0.0, 0.0, 2.0);
        let params = CapParams::new("Wall")
            .with_extract_direction(direction)
            .with_extract_angle(20.0)
            .with_extrude_distance(0.5)
            .with_subdivision_passes(9)
            .with_smoothing(3, 0.7)
            .with_pivot_adjust(Vector3::new(0.0, -1.0, 0.0))
            .with_debug_rays(true);

        let extract = params.extract_params();
        assert_eq!(extract.direction, direction);
        assert_relative_eq!(extract.max_angle_degrees, 20.0);
        assert_relative_eq!(extract.pivot_offset.y, -1.0);
        assert!(extract.debug_rays);

        let extrude = params.extrude_params();
        assert_eq!(extrude.direction, direction);
        assert_relative_eq!(extrude.distance, 0.5);

        assert_eq!(params.subdivide_params().passes, 9);

        let smooth = params.smooth_params();
        assert_eq!(smooth.passes, 3);
        assert_relative_eq!(smooth.factor, 0.7);
    }

    #[test]
    fn test_list_active() {
        let list: CapParamsList = [
            CapParams::new("A"),
            CapParams::new("B").with_active(false),
            CapParams::new("C"),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.len(), 3);
        let active: Vec<_> = list.active().map(|p| p.object_path.as_str()).collect();
        assert_eq!(active, vec!["A", "C"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let json = r#"{ "items": [ { "object_path": "Cabin/Roof", "extrude_distance": 0.3 } ] }"#;
        let list: CapParamsList = serde_json::from_str(json).unwrap();

        let params = &list.items[0];
        assert_eq!(params.object_path, "Cabin/Roof");
        assert_relative_eq!(params.extrude_distance, 0.3);
        assert_eq!(params.extract_direction, Vector3::y());
        assert!(params.active);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let params = CapParams::new("Fence").with_smoothing(2, 0.25);
        let json = serde_json::to_string(&params).unwrap();
        let back: CapParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
