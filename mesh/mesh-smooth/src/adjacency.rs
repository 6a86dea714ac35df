//! Position-keyed vertex adjacency.
//!
//! Imported meshes often split one position into several vertices with
//! different normals or UVs. Keying by position makes those copies share
//! one neighbour list, so they move together and seams stay closed.

use hashbrown::HashMap;
use mesh_types::{IndexedMesh, PositionKey};
use nalgebra::Point3;

/// Neighbour positions for every position used by a face.
///
/// Each triangle contributes its two other corners to each of its three
/// corners. Repeats are kept, so a neighbour shared by several triangles
/// weighs more in the centroid.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    neighbors: HashMap<PositionKey, Vec<Point3<f64>>>,
}

impl AdjacencyMap {
    /// Build the map from the mesh's current positions.
    ///
    /// Faces referencing missing vertices are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_smooth::AdjacencyMap;
    /// use mesh_types::unit_square;
    ///
    /// let adjacency = AdjacencyMap::build(&unit_square());
    /// assert_eq!(adjacency.len(), 4);
    ///
    /// // Corner 0 is in both triangles, so it lists four neighbours with
    /// // the shared diagonal end twice.
    /// let corner = unit_square().vertices[0].position;
    /// assert_eq!(adjacency.neighbors(&corner).len(), 4);
    /// ```
    #[must_use]
    pub fn build(mesh: &IndexedMesh) -> Self {
        let mut neighbors: HashMap<PositionKey, Vec<Point3<f64>>> = HashMap::new();

        for face in &mesh.faces {
            let Some([a, b, c]) = corners(mesh, *face) else {
                continue;
            };
            for (corner, first, second) in [(a, b, c), (b, c, a), (c, a, b)] {
                let list = neighbors.entry(PositionKey::new(&corner)).or_default();
                list.push(first);
                list.push(second);
            }
        }

        Self { neighbors }
    }

    /// Neighbour positions of `position`, empty if no face uses it.
    #[must_use]
    pub fn neighbors(&self, position: &Point3<f64>) -> &[Point3<f64>] {
        self.neighbors
            .get(&PositionKey::new(position))
            .map_or(&[], Vec::as_slice)
    }

    /// Mean of the neighbour positions, `None` if no face uses `position`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self, position: &Point3<f64>) -> Option<Point3<f64>> {
        let list = self.neighbors.get(&PositionKey::new(position))?;
        if list.is_empty() {
            return None;
        }
        let sum = list
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.coords);
        Some(Point3::from(sum / list.len() as f64))
    }

    /// Number of distinct positions with neighbours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// No face contributed any neighbours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

fn corners(mesh: &IndexedMesh, face: [u32; 3]) -> Option<[Point3<f64>; 3]> {
    let [a, b, c] = face.map(|i| mesh.vertices.get(i as usize));
    Some([a?.position, b?.position, c?.position])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{unit_cube, unit_square, Vertex};

    #[test]
    fn test_six_insertions_per_triangle() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0));
        mesh.faces.push([0, 1, 2]);

        let adjacency = AdjacencyMap::build(&mesh);
        assert_eq!(adjacency.len(), 3);
        for vertex in &mesh.vertices {
            assert_eq!(adjacency.neighbors(&vertex.position).len(), 2);
        }
    }

    #[test]
    fn test_duplicates_kept() {
        let square = unit_square();
        let adjacency = AdjacencyMap::build(&square);

        // Corner 2 is shared by both triangles: neighbours 0, 1, 0, 3.
        let neighbors = adjacency.neighbors(&square.vertices[2].position);
        assert_eq!(neighbors.len(), 4);
        let origin_count = neighbors
            .iter()
            .filter(|p| **p == square.vertices[0].position)
            .count();
        assert_eq!(origin_count, 2);
    }

    #[test]
    fn test_split_vertices_share_one_entry() {
        // 24 vertices, 8 positions.
        let adjacency = AdjacencyMap::build(&unit_cube());
        assert_eq!(adjacency.len(), 8);

        // The origin is the first corner of three faces, so both triangles
        // of each face use it.
        let corner = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(adjacency.neighbors(&corner).len(), 12);
    }

    #[test]
    fn test_centroid() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(3.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 3.0));
        mesh.faces.push([0, 1, 2]);

        let adjacency = AdjacencyMap::build(&mesh);
        let centroid = adjacency.centroid(&Point3::origin()).unwrap();
        assert_relative_eq!(centroid, Point3::new(1.5, 0.0, 1.5));
    }

    #[test]
    fn test_unknown_position() {
        let adjacency = AdjacencyMap::build(&unit_square());
        let far = Point3::new(9.0, 9.0, 9.0);
        assert!(adjacency.neighbors(&far).is_empty());
        assert!(adjacency.centroid(&far).is_none());
    }

    #[test]
    fn test_empty_mesh() {
        let adjacency = AdjacencyMap::build(&IndexedMesh::new());
        assert!(adjacency.is_empty());
        assert_eq!(adjacency.len(), 0);
    }

    #[test]
    fn test_signed_zero_same_entry() {
        let adjacency = AdjacencyMap::build(&unit_square());
        let negative_zero = Point3::new(-0.0, 0.0, -0.0);
        assert_eq!(adjacency.neighbors(&negative_zero).len(), 4);
    }
}
