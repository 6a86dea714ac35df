//! Shell construction from an extracted cap.

mod extrude;
pub mod validation;
pub mod wall;

pub use extrude::{extrude_cap, ExtrusionResult};
pub use validation::{validate_shell, ShellIssue, ShellValidation};
pub use wall::{wall_triangles, WallCorner, WallStep, WallVertex};
