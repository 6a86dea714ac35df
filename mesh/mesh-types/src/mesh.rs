//! Indexed triangle mesh.

use crate::{Aabb, MeshBounds, MeshError, MeshResult, MeshTopology, Triangle, Vertex};
use nalgebra::{Point3, Vector2, Vector3, Vector4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by index. Each vertex owns its normal, UV and tangent, so the
/// attribute sequences are index-aligned with the positions by
/// construction.
///
/// # Winding Order
///
/// A face `[a, b, c]` faces the side its geometric normal
/// `(b - a) × (c - a)` points to. [`recalculate_normals`](Self::recalculate_normals)
/// uses the same rule.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces without validation.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from parallel attribute arrays and a flat index list.
    ///
    /// This is the layout engines hand meshes over in. Tangents start at
    /// zero.
    ///
    /// # Errors
    ///
    /// - [`MeshError::AttributeLengthMismatch`] if the three attribute
    ///   arrays differ in length
    /// - [`MeshError::IndexCountNotMultipleOfThree`] if `indices` is not a
    ///   whole number of triangles
    /// - [`MeshError::IndexOutOfRange`] or [`MeshError::RepeatedCorner`] for
    ///   a bad face
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology, Point3, Vector2, Vector3};
    ///
    /// let positions = [
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(0.0, 0.0, 1.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    /// ];
    /// let normals = [Vector3::y(); 3];
    /// let uvs = [Vector2::zeros(); 3];
    ///
    /// let mesh = IndexedMesh::from_arrays(&positions, &normals, &uvs, &[0, 1, 2]).unwrap();
    /// assert_eq!(mesh.face_count(), 1);
    ///
    /// assert!(IndexedMesh::from_arrays(&positions, &normals[..2], &uvs, &[0, 1, 2]).is_err());
    /// ```
    pub fn from_arrays(
        positions: &[Point3<f64>],
        normals: &[Vector3<f64>],
        uvs: &[Vector2<f64>],
        indices: &[u32],
    ) -> MeshResult<Self> {
        if positions.len() != normals.len() || positions.len() != uvs.len() {
            return Err(MeshError::AttributeLengthMismatch {
                positions: positions.len(),
                normals: normals.len(),
                uvs: uvs.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotMultipleOfThree {
                count: indices.len(),
            });
        }

        let vertices = positions
            .iter()
            .zip(normals)
            .zip(uvs)
            .map(|((&p, &n), &uv)| Vertex::with_attributes(p, n, uv))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        let mesh = Self { vertices, faces };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Check that every face references three distinct, existing vertices.
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshError::IndexOutOfRange`] or
    /// [`MeshError::RepeatedCorner`] found, scanning faces in order.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        if u32::try_from(vertex_count).is_err() {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
            });
        }

        for (face_idx, face) in self.faces.iter().enumerate() {
            for &index in face {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfRange {
                        face: face_idx,
                        index,
                        vertex_count,
                    });
                }
            }
            let [a, b, c] = *face;
            if a == b || a == c {
                return Err(MeshError::RepeatedCorner {
                    face: face_idx,
                    index: a,
                });
            }
            if b == c {
                return Err(MeshError::RepeatedCorner {
                    face: face_idx,
                    index: b,
                });
            }
        }

        Ok(())
    }

    /// Iterate over vertex positions.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point3<f64>> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Iterate over vertex normals.
    pub fn normals(&self) -> impl ExactSizeIterator<Item = Vector3<f64>> + '_ {
        self.vertices.iter().map(|v| v.normal)
    }

    /// Iterate over texture coordinates.
    pub fn uvs(&self) -> impl ExactSizeIterator<Item = Vector2<f64>> + '_ {
        self.vertices.iter().map(|v| v.uv)
    }

    /// Iterate over the flat triangle index list.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.faces.iter().flatten().copied()
    }

    /// Recompute vertex normals from face geometry.
    ///
    /// Each vertex normal is the area-weighted sum of the normals of the
    /// faces that reference it by index, normalized. Vertices sharing a
    /// position but not an index are not merged, so hard edges stay hard.
    /// A vertex with no incident face, or whose faces have zero area, gets
    /// a zero normal.
    ///
    /// Faces referencing missing vertices are skipped.
    pub fn recalculate_normals(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.vertices.len()];

        for face in &self.faces {
            let Some(tri) = self.face_triangle(*face) else {
                continue;
            };
            // Magnitude is twice the face area, which gives the weighting.
            let weighted = tri.normal_unnormalized();
            for &index in face {
                accumulated[index as usize] += weighted;
            }
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(accumulated) {
            vertex.normal = sum.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros);
        }
    }

    /// Recompute vertex tangents from positions, UVs and normals.
    ///
    /// Per-face UV derivatives are accumulated per vertex, then made
    /// orthogonal to the vertex normal. `w` holds the bitangent handedness,
    /// `1.0` or `-1.0`. Where the UV mapping is degenerate the tangent is
    /// any unit vector perpendicular to the normal.
    pub fn recalculate_tangents(&mut self) {
        let count = self.vertices.len();
        let mut tan_u = vec![Vector3::zeros(); count];
        let mut tan_v = vec![Vector3::zeros(); count];

        for face in &self.faces {
            if face.iter().any(|&i| i as usize >= count) {
                continue;
            }
            let [a, b, c] = face.map(|i| &self.vertices[i as usize]);

            let e1 = b.position - a.position;
            let e2 = c.position - a.position;
            let d1 = b.uv - a.uv;
            let d2 = c.uv - a.uv;

            let det = d1.x.mul_add(d2.y, -(d2.x * d1.y));
            if det.abs() < f64::EPSILON {
                continue;
            }
            let r = det.recip();
            let sdir = (e1 * d2.y - e2 * d1.y) * r;
            let tdir = (e2 * d1.x - e1 * d2.x) * r;

            for &index in face {
                tan_u[index as usize] += sdir;
                tan_v[index as usize] += tdir;
            }
        }

        for ((vertex, u), v) in self.vertices.iter_mut().zip(tan_u).zip(tan_v) {
            let n = vertex.normal;
            let tangent = (u - n * n.dot(&u))
                .try_normalize(f64::EPSILON)
                .unwrap_or_else(|| any_perpendicular(&n));
            let w = if n.cross(&tangent).dot(&v) < 0.0 { -1.0 } else { 1.0 };
            vertex.tangent = Vector4::new(tangent.x, tangent.y, tangent.z, w);
        }
    }

    /// Assign the same tangent to every vertex.
    pub fn set_uniform_tangent(&mut self, tangent: Vector4<f64>) {
        for vertex in &mut self.vertices {
            vertex.tangent = tangent;
        }
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    fn face_triangle(&self, [i0, i1, i2]: [u32; 3]) -> Option<Triangle> {
        Some(Triangle {
            v0: self.vertices.get(i0 as usize)?.position,
            v1: self.vertices.get(i1 as usize)?.position,
            v2: self.vertices.get(i2 as usize)?.position,
        })
    }
}

fn any_perpendicular(n: &Vector3<f64>) -> Vector3<f64> {
    let axis = if n.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    (axis - n * n.dot(&axis))
        .try_normalize(f64::EPSILON)
        .unwrap_or(axis)
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces
            .get(face_index)
            .and_then(|&face| self.face_triangle(face))
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces
            .iter()
            .filter_map(|&face| self.face_triangle(face))
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::empty();
        }

        let positions = self.vertices.iter().map(|v| &v.position);
        Aabb::from_points(positions)
    }
}

/// Create a unit square in the XZ plane facing +Y.
///
/// Four vertices at `(0,0,0)`, `(0,0,1)`, `(1,0,1)`, `(1,0,0)` with `+Y`
/// normals and UVs matching their XZ coordinates, split into two faces.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_square, MeshTopology};
///
/// let square = unit_square();
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square.face_count(), 2);
/// ```
#[must_use]
pub fn unit_square() -> IndexedMesh {
    let corners = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
    let vertices = corners
        .iter()
        .map(|&(x, z)| {
            Vertex::with_attributes(Point3::new(x, 0.0, z), Vector3::y(), Vector2::new(x, z))
        })
        .collect();

    IndexedMesh::from_parts(vertices, vec![[0, 1, 2], [0, 2, 3]])
}

/// Create a unit cube from `(0,0,0)` to `(1,1,1)` with split faces.
///
/// Like an engine-imported cube, every face has its own four vertices, so
/// each corner position is shared by three vertices with different normals
/// and UVs. 24 vertices and 12 outward-facing triangles.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 24);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    // Each face: outward normal and its four corners, ordered so that
    // (c1 - c0) × (c2 - c0) points along the normal.
    let sides: [([f64; 3], [[f64; 3]; 4]); 6] = [
        (
            [0.0, 1.0, 0.0],
            [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
        ),
        (
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
        ),
    ];
    let uvs = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

    let mut mesh = IndexedMesh::with_capacity(24, 12);
    for (normal, corners) in sides {
        let base = u32::try_from(mesh.vertices.len()).unwrap_or(u32::MAX);
        let normal = Vector3::from(normal);
        for (corner, uv) in corners.iter().zip(uvs) {
            mesh.vertices.push(Vertex::with_attributes(
                Point3::from(*corner),
                normal,
                Vector2::from(uv),
            ));
        }
        mesh.faces.push([base, base + 1, base + 2]);
        mesh.faces.push([base, base + 2, base + 3]);
    }
    mesh
}
