//! Height sources.
//!
//! Heights run along +Y; samplers are queried at `(x, z)`.

// Grid indices are small and bounds are checked
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]

use crate::error::{HeightFieldError, HeightFieldResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anything that can report a surface height at an `(x, z)` position.
pub trait HeightSampler {
    /// Height of the surface at `(x, z)`.
    fn sample_height(&self, x: f64, z: f64) -> f64;
}

impl<F> HeightSampler for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample_height(&self, x: f64, z: f64) -> f64 {
        self(x, z)
    }
}

/// A regular grid of height samples.
///
/// Samples are stored in row-major order, X varying fastest, and spaced
/// `cell_size` apart starting at `(0, 0)`. Queries between samples are
/// bilinearly interpolated; queries outside the grid use the nearest edge.
///
/// # Example
///
/// ```
/// use mesh_heightfield::{HeightGrid, HeightSampler};
///
/// let grid = HeightGrid::new(vec![0.0, 2.0, 0.0, 2.0], 2, 2, 1.0)?;
/// assert_eq!(grid.sample_height(0.5, 0.5), 1.0);
/// assert_eq!(grid.sample_height(9.0, 0.0), 2.0);
/// # Ok::<(), mesh_heightfield::HeightFieldError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightGrid {
    /// Height values in row-major order.
    /// Access pattern: `heights[z * width + x]`
    heights: Vec<f64>,
    /// Number of columns (samples along X).
    width: usize,
    /// Number of rows (samples along Z).
    depth: usize,
    /// Spacing between samples.
    cell_size: f64,
    /// Minimum height value.
    min_height: f64,
    /// Maximum height value.
    max_height: f64,
}

impl HeightGrid {
    /// Create a grid from height data.
    ///
    /// # Errors
    ///
    /// - [`HeightFieldError::InvalidDimensions`] if `width` or `depth` is zero
    /// - [`HeightFieldError::SampleCountMismatch`] if
    ///   `heights.len() != width * depth`
    /// - [`HeightFieldError::InvalidCellSize`] if `cell_size` is not positive
    ///   and finite
    pub fn new(
        heights: Vec<f64>,
        width: usize,
        depth: usize,
        cell_size: f64,
    ) -> HeightFieldResult<Self> {
        if width == 0 || depth == 0 {
            return Err(HeightFieldError::InvalidDimensions {
                width: u32::try_from(width).unwrap_or(u32::MAX),
                depth: u32::try_from(depth).unwrap_or(u32::MAX),
            });
        }
        let expected = width.saturating_mul(depth);
        if heights.len() != expected {
            return Err(HeightFieldError::SampleCountMismatch {
                expected,
                actual: heights.len(),
            });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(HeightFieldError::InvalidCellSize(cell_size));
        }

        let (min_height, max_height) = heights
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &h| {
                (min.min(h), max.max(h))
            });

        Ok(Self {
            heights,
            width,
            depth,
            cell_size,
            min_height,
            max_height,
        })
    }

    /// Create a flat grid at a given height.
    ///
    /// # Errors
    ///
    /// Same as [`HeightGrid::new`].
    pub fn flat(
        width: usize,
        depth: usize,
        cell_size: f64,
        height: f64,
    ) -> HeightFieldResult<Self> {
        Self::new(vec![height; width.saturating_mul(depth)], width, depth, cell_size)
    }

    /// Create a grid by sampling a function at every grid point.
    ///
    /// # Errors
    ///
    /// Same as [`HeightGrid::new`].
    pub fn from_fn<F>(width: usize, depth: usize, cell_size: f64, f: F) -> HeightFieldResult<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut heights = Vec::with_capacity(width.saturating_mul(depth));
        for z in 0..depth {
            for x in 0..width {
                heights.push(f(x as f64 * cell_size, z as f64 * cell_size));
            }
        }
        Self::new(heights, width, depth, cell_size)
    }

    /// Get the width (number of columns).
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the depth (number of rows).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Get the cell size.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Get the total X extent.
    #[must_use]
    pub fn extent_x(&self) -> f64 {
        (self.width - 1) as f64 * self.cell_size
    }

    /// Get the total Z extent.
    #[must_use]
    pub fn extent_z(&self) -> f64 {
        (self.depth - 1) as f64 * self.cell_size
    }

    /// Get the minimum height value.
    #[must_use]
    pub const fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Get the maximum height value.
    #[must_use]
    pub const fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Get the height at grid coordinates (x, z).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, z: usize) -> Option<f64> {
        if x < self.width && z < self.depth {
            Some(self.heights[z * self.width + x])
        } else {
            None
        }
    }

    /// Get the interpolated height at (x, z).
    ///
    /// Returns `None` if the point is outside the grid.
    #[must_use]
    pub fn sample(&self, x: f64, z: f64) -> Option<f64> {
        if !(0.0..=self.extent_x()).contains(&x) || !(0.0..=self.extent_z()).contains(&z) {
            return None;
        }

        let gx = x / self.cell_size;
        let gz = z / self.cell_size;

        let x0 = (gx.floor() as usize).min(self.width - 1);
        let z0 = (gz.floor() as usize).min(self.depth - 1);
        let x1 = (x0 + 1).min(self.width - 1);
        let z1 = (z0 + 1).min(self.depth - 1);

        let fx = gx - x0 as f64;
        let fz = gz - z0 as f64;

        let h00 = self.heights[z0 * self.width + x0];
        let h10 = self.heights[z0 * self.width + x1];
        let h01 = self.heights[z1 * self.width + x0];
        let h11 = self.heights[z1 * self.width + x1];

        let h0 = fx.mul_add(h10 - h00, h00);
        let h1 = fx.mul_add(h11 - h01, h01);
        Some(fz.mul_add(h1 - h0, h0))
    }

    /// Get the interpolated height, clamping to the grid if outside.
    #[must_use]
    pub fn sample_clamped(&self, x: f64, z: f64) -> f64 {
        let x = x.clamp(0.0, self.extent_x());
        let z = z.clamp(0.0, self.extent_z());
        self.sample(x, z).unwrap_or(self.min_height)
    }
}

impl HeightSampler for HeightGrid {
    fn sample_height(&self, x: f64, z: f64) -> f64 {
        self.sample_clamped(x, z)
    }
}
