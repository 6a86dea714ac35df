//! Shell closure checks.
//!
//! Edges are identified by the positions of their endpoints, not by vertex
//! index. The shell duplicates vertices along every wall seam, so index
//! identity would report every seam as open.

use hashbrown::HashMap;
use mesh_types::{IndexedMesh, PositionKey};
use tracing::{debug, warn};

/// Result of shell validation.
#[derive(Debug, Clone, Default)]
pub struct ShellValidation {
    /// Total vertex count.
    pub vertex_count: usize,
    /// Total face count.
    pub face_count: usize,
    /// Edges used by exactly one face.
    pub open_edge_count: usize,
    /// Edges used by more than two faces.
    pub non_manifold_edge_count: usize,
    /// Edges walked in the same direction by more than one face.
    pub inconsistent_edge_count: usize,
    /// Faces with two corners at the same position.
    pub degenerate_face_count: usize,
    /// List of issues found.
    pub issues: Vec<ShellIssue>,
}

impl ShellValidation {
    /// Every edge is shared by exactly two faces.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.face_count > 0 && self.open_edge_count == 0 && self.non_manifold_edge_count == 0
    }

    /// Neighbouring faces walk their shared edges in opposite directions.
    #[must_use]
    pub const fn is_consistently_wound(&self) -> bool {
        self.inconsistent_edge_count == 0
    }

    /// Get the total number of issues found.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

impl std::fmt::Display for ShellValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Shell Validation:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(
            f,
            "  Closed: {} (open edges: {}, non-manifold edges: {})",
            if self.is_closed() { "yes" } else { "NO" },
            self.open_edge_count,
            self.non_manifold_edge_count
        )?;
        writeln!(
            f,
            "  Consistent winding: {} (inconsistent edges: {})",
            if self.is_consistently_wound() {
                "yes"
            } else {
                "NO"
            },
            self.inconsistent_edge_count
        )?;

        if !self.issues.is_empty() {
            writeln!(f, "  Issues ({}):", self.issues.len())?;
            for issue in &self.issues {
                writeln!(f, "    - {issue}")?;
            }
        }

        Ok(())
    }
}

/// Issues that can be found during shell validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellIssue {
    /// Shell has zero faces.
    EmptyShell,
    /// Some edges belong to a single face.
    OpenEdges {
        /// Number of open edges.
        count: usize,
    },
    /// Some edges belong to more than two faces.
    NonManifold {
        /// Number of non-manifold edges.
        count: usize,
    },
    /// Some shared edges are walked the same way by both faces.
    InconsistentWinding {
        /// Number of inconsistent edges.
        count: usize,
    },
    /// Some faces collapse to a line or a point.
    DegenerateFaces {
        /// Number of degenerate faces.
        count: usize,
    },
}

impl std::fmt::Display for ShellIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyShell => write!(f, "Shell is empty (no faces)"),
            Self::OpenEdges { count } => write!(f, "Shell is open ({count} open edges)"),
            Self::NonManifold { count } => {
                write!(f, "Shell is not manifold ({count} non-manifold edges)")
            }
            Self::InconsistentWinding { count } => {
                write!(f, "Shell has inconsistent winding ({count} edges)")
            }
            Self::DegenerateFaces { count } => write!(f, "Shell has {count} degenerate faces"),
        }
    }
}

/// Validate a shell mesh.
///
/// Faces that reference missing vertices are ignored.
#[must_use]
pub fn validate_shell(shell: &IndexedMesh) -> ShellValidation {
    let mut result = ShellValidation {
        vertex_count: shell.vertices.len(),
        face_count: shell.faces.len(),
        ..ShellValidation::default()
    };

    if shell.faces.is_empty() {
        result.issues.push(ShellIssue::EmptyShell);
        return result;
    }

    let mut undirected: HashMap<(PositionKey, PositionKey), usize> = HashMap::new();
    let mut directed: HashMap<(PositionKey, PositionKey), usize> = HashMap::new();

    for face in &shell.faces {
        let Some(keys) = face_keys(shell, *face) else {
            continue;
        };
        if keys[0] == keys[1] || keys[1] == keys[2] || keys[2] == keys[0] {
            result.degenerate_face_count += 1;
            continue;
        }
        for (a, b) in [(keys[0], keys[1]), (keys[1], keys[2]), (keys[2], keys[0])] {
            *directed.entry((a, b)).or_insert(0) += 1;
            *undirected.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }

    result.open_edge_count = undirected.values().filter(|&&n| n == 1).count();
    result.non_manifold_edge_count = undirected.values().filter(|&&n| n > 2).count();
    result.inconsistent_edge_count = directed.values().filter(|&&n| n > 1).count();

    if result.open_edge_count > 0 {
        warn!(count = result.open_edge_count, "Shell has open edges");
        result.issues.push(ShellIssue::OpenEdges {
            count: result.open_edge_count,
        });
    }
    if result.non_manifold_edge_count > 0 {
        warn!(
            count = result.non_manifold_edge_count,
            "Shell has non-manifold edges"
        );
        result.issues.push(ShellIssue::NonManifold {
            count: result.non_manifold_edge_count,
        });
    }
    if result.inconsistent_edge_count > 0 {
        result.issues.push(ShellIssue::InconsistentWinding {
            count: result.inconsistent_edge_count,
        });
    }
    if result.degenerate_face_count > 0 {
        result.issues.push(ShellIssue::DegenerateFaces {
            count: result.degenerate_face_count,
        });
    }

    debug!(
        edges = undirected.len(),
        open = result.open_edge_count,
        non_manifold = result.non_manifold_edge_count,
        inconsistent = result.inconsistent_edge_count,
        "Validated shell"
    );

    result
}

fn face_keys(mesh: &IndexedMesh, face: [u32; 3]) -> Option<[PositionKey; 3]> {
    let [a, b, c] = face.map(|i| mesh.vertices.get(i as usize));
    Some([a?, b?, c?].map(|v| PositionKey::new(&v.position)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{unit_cube, unit_square, Vertex};

    #[test]
    fn test_empty_shell() {
        let result = validate_shell(&IndexedMesh::new());
        assert!(!result.is_closed());
        assert_eq!(result.issues, vec![ShellIssue::EmptyShell]);
    }

    #[test]
    fn test_open_square() {
        let result = validate_shell(&unit_square());
        assert!(!result.is_closed());
        assert_eq!(result.open_edge_count, 4);
        assert!(result.is_consistently_wound());
    }

    #[test]
    fn test_split_cube_is_closed_by_position() {
        // The cube has separate vertices per face, so it only closes when
        // edges are matched by position.
        let result = validate_shell(&unit_cube());
        assert!(result.is_closed(), "{result}");
        assert!(result.is_consistently_wound());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_non_manifold_fin() {
        let mut mesh = unit_cube();
        let apex = Vertex::from_coords(0.5, 2.0, 0.5);
        let base = mesh.vertices.len() as u32;
        // Reuse an existing top edge from the first two top vertices.
        let top = mesh
            .faces
            .iter()
            .find(|f| f.iter().all(|&i| mesh.vertices[i as usize].position.y > 0.5))
            .copied()
            .unwrap();
        mesh.vertices.push(mesh.vertices[top[0] as usize]);
        mesh.vertices.push(mesh.vertices[top[1] as usize]);
        mesh.vertices.push(apex);
        mesh.faces.push([base, base + 1, base + 2]);

        let result = validate_shell(&mesh);
        assert_eq!(result.non_manifold_edge_count, 1);
        assert!(!result.is_closed());
        assert!(result
            .issues
            .contains(&ShellIssue::NonManifold { count: 1 }));
    }

    #[test]
    fn test_degenerate_face_counted() {
        let mut mesh = unit_square();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.faces.push([0, 4, 1]);

        let result = validate_shell(&mesh);
        assert_eq!(result.degenerate_face_count, 1);
        assert_eq!(result.open_edge_count, 4);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", validate_shell(&unit_square()));
        assert!(display.contains("Closed: NO"));
        assert!(display.contains("open edges: 4"));
        assert!(display.contains("Shell is open"));
    }
}
