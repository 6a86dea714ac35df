//! Vertex type.

use nalgebra::{Point3, Vector2, Vector3, Vector4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex with position, normal, texture coordinate and tangent.
///
/// Every vertex carries all four attributes, so a mesh's position, normal
/// and UV sequences always have the same length. Engine meshes commonly
/// hold several vertices at one position that differ only in normal or UV
/// (hard edges, UV seams); those stay separate vertices here and are
/// matched by [`PositionKey`](crate::PositionKey) where identity matters.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// assert_eq!(v1.normal.norm(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Vertex normal. Zero until assigned or recalculated.
    pub normal: Vector3<f64>,

    /// Texture coordinate.
    pub uv: Vector2<f64>,

    /// Tangent in `xyz`, bitangent handedness (±1) in `w`.
    pub tangent: Vector4<f64>,
}

impl Vertex {
    /// Create a vertex with only position set.
    #[inline]
    #[must_use]
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
            uv: Vector2::zeros(),
            tangent: Vector4::zeros(),
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.x, 1.0);
    /// assert_eq!(v.position.z, 3.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with position and normal.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Vertex, Point3, Vector3};
    ///
    /// let v = Vertex::with_normal(Point3::origin(), Vector3::y());
    /// assert_eq!(v.normal, Vector3::y());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            normal,
            ..Self::new(position)
        }
    }

    /// Create a vertex with position, normal and texture coordinate.
    #[inline]
    #[must_use]
    pub fn with_attributes(position: Point3<f64>, normal: Vector3<f64>, uv: Vector2<f64>) -> Self {
        Self {
            normal,
            uv,
            ..Self::new(position)
        }
    }

    /// Return a copy of this vertex with a different texture coordinate.
    #[inline]
    #[must_use]
    pub const fn with_uv(mut self, uv: Vector2<f64>) -> Self {
        self.uv = uv;
        self
    }

    /// Midpoint of two vertices.
    ///
    /// Position and UV are averaged. The normal is the average of both
    /// normals renormalized, or zero when they cancel out. The tangent is
    /// left zero; callers recalculate it for the whole mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Vertex, Point3, Vector2, Vector3};
    ///
    /// let a = Vertex::with_attributes(Point3::origin(), Vector3::x(), Vector2::zeros());
    /// let mut b = Vertex::from_coords(2.0, 0.0, 0.0).with_uv(Vector2::repeat(1.0));
    /// b.normal = Vector3::y();
    /// let m = a.midpoint(&b);
    ///
    /// assert_eq!(m.position, Point3::new(1.0, 0.0, 0.0));
    /// assert_eq!(m.uv, Vector2::new(0.5, 0.5));
    /// assert!((m.normal.norm() - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        let normal = (self.normal + other.normal)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros);

        Self {
            position: nalgebra::center(&self.position, &other.position),
            normal,
            uv: (self.uv + other.uv) * 0.5,
            tangent: Vector4::zeros(),
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(Point3::origin())
    }
}
