//! The Extract → Extrude → Subdivide → Smooth pipeline.

use mesh_extract::{extract_cap, ObjectFrame};
use mesh_shell::extrude_cap;
use mesh_smooth::smooth_laplacian;
use mesh_subdivide::{subdivide_mesh, PassClamp};
use mesh_types::{Aabb, IndexedMesh};
use tracing::{info, warn};

use crate::error::CapResult;
use crate::params::CapParams;

/// A finished cap shell and what each stage did to get there.
#[derive(Debug, Clone)]
pub struct CapShell {
    /// Name for the new object, `"{top level}_snow"`.
    pub name: String,

    /// The final mesh, in the source object's local space.
    pub mesh: IndexedMesh,

    /// Vertices in the extracted cap.
    pub cap_vertices: usize,

    /// Faces in the extracted cap.
    pub cap_faces: usize,

    /// Boundary edges found on the cap.
    pub boundary_edges: usize,

    /// The boundary edges formed one closed loop.
    pub closed_boundary: bool,

    /// Extrusion ran (positive distance and a non-empty cap).
    pub extruded: bool,

    /// Subdivision passes actually applied.
    pub subdivision_passes: u32,

    /// Set when the requested pass count was clamped.
    pub clamp: Option<PassClamp>,

    /// Smoothing passes performed.
    pub smoothing_passes: u32,

    /// Largest single-vertex move during smoothing.
    pub max_displacement: f64,

    /// Bounds of the final mesh.
    pub bounds: Aabb,
}

impl CapShell {
    /// The cap selected nothing, so the shell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.vertices.is_empty()
    }
}

impl std::fmt::Display for CapShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: cap {} vertices, {} faces, {} edges → shell {} vertices, {} faces ({} subdivision, {} smoothing passes)",
            self.name,
            self.cap_vertices,
            self.cap_faces,
            self.boundary_edges,
            self.mesh.vertices.len(),
            self.mesh.faces.len(),
            self.subdivision_passes,
            self.smoothing_passes
        )
    }
}

/// Build the cap shell for one object.
///
/// Extracts the part of `mesh` facing `params.extract_direction`, extrudes
/// it the same way by `params.extrude_distance`, subdivides and smooths it.
/// Each stage consumes the previous stage's output. The result stays in
/// the mesh's local space.
///
/// Returns `Ok(None)` for an inactive record. A cap that selects nothing
/// still yields a (empty) shell.
///
/// # Errors
///
/// Any stage error, wrapped in [`CapError`](crate::CapError).
///
/// # Example
///
/// ```
/// use mesh_cap::{build_cap_shell, CapParams};
/// use mesh_extract::ObjectFrame;
/// use mesh_types::unit_cube;
///
/// let params = CapParams::new("Crate").with_smoothing(0, 0.0);
/// let shell = build_cap_shell(&unit_cube(), &ObjectFrame::identity(), &params)?
///     .expect("record is active");
///
/// assert_eq!(shell.name, "Crate_snow");
/// // 12 shell faces, one subdivision pass
/// assert_eq!(shell.mesh.faces.len(), 48);
/// # Ok::<(), mesh_cap::CapError>(())
/// ```
pub fn build_cap_shell(
    mesh: &IndexedMesh,
    frame: &ObjectFrame,
    params: &CapParams,
) -> CapResult<Option<CapShell>> {
    if !params.active {
        info!(object = %params.object_path, "Skipping inactive object");
        return Ok(None);
    }

    let name = params.shell_name();
    info!(object = %params.object_path, shell = %name, "Building cap shell");

    let extraction = extract_cap(mesh, frame, &params.extract_params())?;
    if extraction.is_empty() {
        warn!(
            object = %params.object_path,
            angle = params.extract_angle,
            "No vertices face the extraction direction"
        );
    }
    info!("{extraction}");

    let extrusion = extrude_cap(
        &extraction.mesh,
        &extraction.boundary_edges,
        &params.extrude_params(),
    )?;
    info!("{extrusion}");

    let subdivision = subdivide_mesh(&extrusion.mesh, &params.subdivide_params())?;
    info!("{subdivision}");

    let smoothing = smooth_laplacian(&subdivision.mesh, &params.smooth_params())?;
    info!("{smoothing}");

    let shell = CapShell {
        name,
        mesh: smoothing.mesh,
        cap_vertices: extraction.mesh.vertices.len(),
        cap_faces: extraction.mesh.faces.len(),
        boundary_edges: extraction.boundary_edges.len(),
        closed_boundary: extrusion.closed_boundary,
        extruded: extrusion.extruded,
        subdivision_passes: subdivision.passes_applied,
        clamp: subdivision.clamp,
        smoothing_passes: smoothing.passes_performed,
        max_displacement: smoothing.max_displacement,
        bounds: smoothing.bounds,
    };
    info!("{shell}");

    Ok(Some(shell))
}
