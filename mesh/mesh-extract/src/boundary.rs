//! Boundary edges of an extracted cap.
//!
//! Extraction reports every edge shared by a selected and an unselected
//! region as a candidate. Line-like fans on the input mesh produce
//! candidates that no cap triangle owns; extruding those would raise
//! zero-width walls. [`BoundaryClassifier`] keys every edge by its two
//! positions in a canonical order and keeps a candidate only when exactly
//! one cap triangle owns the same key.

use std::cmp::Ordering;

use hashbrown::{HashMap, HashSet};
use mesh_types::PositionKey;
use nalgebra::Point3;

use crate::error::{ExtractError, ExtractResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered pair of cap vertex indices.
///
/// The order is the one the edge had in the input triangle that produced
/// it. Extrusion relies on it to wind side walls outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdge {
    /// Start vertex.
    pub from: u32,
    /// End vertex.
    pub to: u32,
}

impl DirectedEdge {
    /// Create an edge.
    #[inline]
    #[must_use]
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }
}

/// Direction-independent identity of an edge, by position.
///
/// # Example
///
/// ```
/// use mesh_extract::EdgeKey;
/// use nalgebra::Point3;
///
/// let a = Point3::new(1.0, 0.0, 0.0);
/// let b = Point3::new(0.0, 0.0, 1.0);
/// assert_eq!(EdgeKey::new(&a, &b), EdgeKey::new(&b, &a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    first: PositionKey,
    second: PositionKey,
}

impl EdgeKey {
    /// Build the key for the edge between two positions.
    #[must_use]
    pub fn new(a: &Point3<f64>, b: &Point3<f64>) -> Self {
        Self::from_keys(PositionKey::new(a), PositionKey::new(b))
    }

    /// Build the key from two position keys.
    #[must_use]
    pub fn from_keys(a: PositionKey, b: PositionKey) -> Self {
        match canonical_cmp(&a.to_point(), &b.to_point()) {
            Ordering::Greater => Self {
                first: b,
                second: a,
            },
            _ => Self {
                first: a,
                second: b,
            },
        }
    }
}

/// Canonical order of two positions.
///
/// Sorts by heading `atan2(x, z)` about the origin, then by squared
/// distance from the origin, then lexicographically by `(x, y, z)` so that
/// distinct positions never compare equal.
#[must_use]
pub fn canonical_cmp(a: &Point3<f64>, b: &Point3<f64>) -> Ordering {
    let heading_a = a.x.atan2(a.z);
    let heading_b = b.x.atan2(b.z);

    heading_a
        .total_cmp(&heading_b)
        .then_with(|| a.coords.norm_squared().total_cmp(&b.coords.norm_squared()))
        .then_with(|| a.x.total_cmp(&b.x))
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.z.total_cmp(&b.z))
}

/// Ordered list of true boundary edges, in cap vertex indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryEdges {
    edges: Vec<DirectedEdge>,
}

impl BoundaryEdges {
    /// Wrap a list of edges.
    #[must_use]
    pub const fn new(edges: Vec<DirectedEdge>) -> Self {
        Self { edges }
    }

    /// Build from a flat `[from0, to0, from1, to1, ...]` list.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::OddEdgeList`] if the list has odd length.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_extract::BoundaryEdges;
    ///
    /// let edges = BoundaryEdges::from_flat_pairs(&[1, 0, 2, 1, 3, 2, 0, 3])?;
    /// assert_eq!(edges.len(), 4);
    /// assert!(edges.is_closed_loop());
    /// assert!(BoundaryEdges::from_flat_pairs(&[1, 0, 2]).is_err());
    /// # Ok::<(), mesh_extract::ExtractError>(())
    /// ```
    pub fn from_flat_pairs(pairs: &[u32]) -> ExtractResult<Self> {
        if pairs.len() % 2 != 0 {
            return Err(ExtractError::OddEdgeList(pairs.len()));
        }
        Ok(Self::new(
            pairs
                .chunks_exact(2)
                .map(|p| DirectedEdge::new(p[0], p[1]))
                .collect(),
        ))
    }

    /// Flatten to `[from0, to0, from1, to1, ...]`.
    #[must_use]
    pub fn as_flat_pairs(&self) -> Vec<u32> {
        self.edges.iter().flat_map(|e| [e.from, e.to]).collect()
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// No edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[DirectedEdge] {
        &self.edges
    }

    /// Iterate over edges in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DirectedEdge> {
        self.edges.iter()
    }

    /// Check that the edges form exactly one closed loop.
    ///
    /// Every endpoint must be shared by exactly two edges and all edges
    /// must be connected. Direction is ignored. An empty list is not a
    /// loop.
    #[must_use]
    pub fn is_closed_loop(&self) -> bool {
        if self.edges.is_empty() {
            return false;
        }

        let mut neighbors: HashMap<u32, Vec<u32>> = HashMap::new();
        for edge in &self.edges {
            if edge.from == edge.to {
                return false;
            }
            neighbors.entry(edge.from).or_default().push(edge.to);
            neighbors.entry(edge.to).or_default().push(edge.from);
        }

        if neighbors.values().any(|n| n.len() != 2) {
            return false;
        }

        let start = self.edges[0].from;
        let mut visited = HashSet::with_capacity(neighbors.len());
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            if let Some(next) = neighbors.get(&v) {
                stack.extend(next.iter().filter(|n| !visited.contains(*n)));
            }
        }

        visited.len() == neighbors.len()
    }
}

impl<'a> IntoIterator for &'a BoundaryEdges {
    type Item = &'a DirectedEdge;
    type IntoIter = std::slice::Iter<'a, DirectedEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl From<Vec<DirectedEdge>> for BoundaryEdges {
    fn from(edges: Vec<DirectedEdge>) -> Self {
        Self::new(edges)
    }
}

/// Outcome of boundary classification.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Candidates owned by exactly one cap triangle, in encounter order.
    pub boundary: BoundaryEdges,
    /// Candidates seen.
    pub candidate_count: usize,
    /// Candidates no cap triangle owns.
    pub pruned_count: usize,
    /// Candidates owned by two or more cap triangles.
    pub interior_count: usize,
}

/// Collects candidate and cap edges, then separates true boundary edges
/// from interior edges and false positives.
///
/// # Example
///
/// ```
/// use mesh_extract::{BoundaryClassifier, DirectedEdge, EdgeKey};
/// use nalgebra::Point3;
///
/// let p = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, 1.0),
/// ];
/// let key = |a: usize, b: usize| EdgeKey::new(&p[a], &p[b]);
///
/// let mut classifier = BoundaryClassifier::new();
/// classifier.add_cap_triangle([key(0, 1), key(1, 2), key(2, 0)]);
/// classifier.add_candidate(DirectedEdge::new(1, 0), key(1, 0));
///
/// let result = classifier.classify();
/// assert_eq!(result.boundary.as_slice(), &[DirectedEdge::new(1, 0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoundaryClassifier {
    candidates: Vec<(DirectedEdge, EdgeKey)>,
    cap_owners: HashMap<EdgeKey, u32>,
}

impl BoundaryClassifier {
    /// Create an empty classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate edge from a triangle with two selected corners.
    pub fn add_candidate(&mut self, edge: DirectedEdge, key: EdgeKey) {
        self.candidates.push((edge, key));
    }

    /// Record the three edges of a triangle with all corners selected.
    pub fn add_cap_triangle(&mut self, keys: [EdgeKey; 3]) {
        for key in keys {
            *self.cap_owners.entry(key).or_insert(0) += 1;
        }
    }

    /// Number of cap triangles that own `key`.
    #[must_use]
    pub fn owner_count(&self, key: &EdgeKey) -> u32 {
        self.cap_owners.get(key).copied().unwrap_or(0)
    }

    /// Separate the candidates.
    ///
    /// One owner: the edge is on the cap's perimeter and is kept. Two or
    /// more: the edge is interior to the cap. None: a false positive.
    #[must_use]
    pub fn classify(self) -> Classification {
        let candidate_count = self.candidates.len();
        let mut edges = Vec::new();
        let mut pruned_count = 0;
        let mut interior_count = 0;

        for (edge, key) in &self.candidates {
            match self.owner_count(key) {
                0 => pruned_count += 1,
                1 => edges.push(*edge),
                _ => interior_count += 1,
            }
        }

        Classification {
            boundary: BoundaryEdges::new(edges),
            candidate_count,
            pruned_count,
            interior_count,
        }
    }
}
