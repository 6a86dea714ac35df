//! Side-wall triangulation.
//!
//! Each boundary edge becomes a quad between its bottom edge and the
//! matching top edge, split into two triangles. [`WallCorner`] is the two
//! state machine that decides which half of the quad comes next.

use mesh_extract::DirectedEdge;

/// A wall triangle corner: a cap vertex on the bottom or the top layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallVertex {
    /// Index of the vertex in the cap.
    pub cap_index: u32,

    /// On the offset (top) layer.
    pub lifted: bool,
}

impl WallVertex {
    /// A vertex on the bottom layer.
    #[must_use]
    pub const fn bottom(cap_index: u32) -> Self {
        Self {
            cap_index,
            lifted: false,
        }
    }

    /// A vertex on the top layer.
    #[must_use]
    pub const fn top(cap_index: u32) -> Self {
        Self {
            cap_index,
            lifted: true,
        }
    }

    /// Index of this vertex in a shell whose top layer starts at `offset`.
    #[must_use]
    pub const fn shell_index(self, offset: u32) -> u32 {
        if self.lifted {
            self.cap_index + offset
        } else {
            self.cap_index
        }
    }
}

/// Which half of a wall quad is emitted next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WallCorner {
    /// The half anchored at the top of the edge's `to` end.
    #[default]
    Top,
    /// The half anchored at the bottom of the edge's `from` end.
    BottomLeft,
}

/// One step of the wall state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallStep {
    /// The emitted triangle.
    pub triangle: [WallVertex; 3],

    /// State for the next step.
    pub next: WallCorner,

    /// The edge is finished and the walk moves to the next one.
    pub advance: bool,
}

impl WallCorner {
    /// Emit this state's triangle for `edge`.
    ///
    /// `Top` emits `(to', to, from)` and stays on the edge; `BottomLeft`
    /// emits `(from, from', to')` and moves on, where `'` marks the top
    /// layer.
    #[must_use]
    pub const fn step(self, edge: DirectedEdge) -> WallStep {
        match self {
            Self::Top => WallStep {
                triangle: [
                    WallVertex::top(edge.to),
                    WallVertex::bottom(edge.to),
                    WallVertex::bottom(edge.from),
                ],
                next: Self::BottomLeft,
                advance: false,
            },
            Self::BottomLeft => WallStep {
                triangle: [
                    WallVertex::bottom(edge.from),
                    WallVertex::top(edge.from),
                    WallVertex::top(edge.to),
                ],
                next: Self::Top,
                advance: true,
            },
        }
    }
}

/// Walk the boundary and collect every wall triangle in emission order.
///
/// Produces exactly two triangles per edge.
#[must_use]
pub fn wall_triangles(edges: &[DirectedEdge]) -> Vec<[WallVertex; 3]> {
    let mut triangles = Vec::with_capacity(edges.len() * 2);
    let mut state = WallCorner::Top;
    let mut index = 0;

    while let Some(&edge) = edges.get(index) {
        let step = state.step(edge);
        triangles.push(step.triangle);
        state = step.next;
        if step.advance {
            index += 1;
        }
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_stays_on_edge() {
        let step = WallCorner::Top.step(DirectedEdge::new(1, 0));
        assert_eq!(
            step.triangle,
            [WallVertex::top(0), WallVertex::bottom(0), WallVertex::bottom(1)]
        );
        assert_eq!(step.next, WallCorner::BottomLeft);
        assert!(!step.advance);
    }

    #[test]
    fn test_bottom_left_advances() {
        let step = WallCorner::BottomLeft.step(DirectedEdge::new(1, 0));
        assert_eq!(
            step.triangle,
            [WallVertex::bottom(1), WallVertex::top(1), WallVertex::top(0)]
        );
        assert_eq!(step.next, WallCorner::Top);
        assert!(step.advance);
    }

    #[test]
    fn test_two_triangles_per_edge() {
        let edges = [
            DirectedEdge::new(1, 0),
            DirectedEdge::new(2, 1),
            DirectedEdge::new(3, 2),
        ];
        let triangles = wall_triangles(&edges);
        assert_eq!(triangles.len(), 6);

        // Every pair starts from the top of its edge's `to` end.
        for (pair, edge) in triangles.chunks(2).zip(&edges) {
            assert_eq!(pair[0][0], WallVertex::top(edge.to));
            assert_eq!(pair[1][0], WallVertex::bottom(edge.from));
        }
    }

    #[test]
    fn test_empty_boundary() {
        assert!(wall_triangles(&[]).is_empty());
    }

    #[test]
    fn test_shell_index() {
        assert_eq!(WallVertex::bottom(3).shell_index(10), 3);
        assert_eq!(WallVertex::top(3).shell_index(10), 13);
    }
}
