//! Looking up source objects by path.

use hashbrown::HashMap;
use mesh_extract::ObjectFrame;
use mesh_types::IndexedMesh;
use tracing::error;

use crate::error::{CapError, CapResult};
use crate::params::CapParamsList;
use crate::pipeline::{build_cap_shell, CapShell};

/// Supplies the mesh and transform of a named object.
///
/// Implement this over whatever holds your scene. [`InMemoryScene`] is a
/// ready-made map-backed version.
pub trait MeshResolver {
    /// Look up the object at `path`, returning its mesh and frame.
    fn resolve(&self, path: &str) -> Option<(IndexedMesh, ObjectFrame)>;
}

/// A map from object path to mesh and frame.
///
/// # Example
///
/// ```
/// use mesh_cap::{InMemoryScene, MeshResolver};
/// use mesh_extract::ObjectFrame;
/// use mesh_types::unit_cube;
///
/// let mut scene = InMemoryScene::new();
/// scene.insert("Crate/Body", unit_cube(), ObjectFrame::identity());
///
/// assert!(scene.resolve("Crate/Body").is_some());
/// assert!(scene.resolve("Crate/Lid").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    objects: HashMap<String, (IndexedMesh, ObjectFrame)>,
}

impl InMemoryScene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the object at `path`.
    pub fn insert(&mut self, path: impl Into<String>, mesh: IndexedMesh, frame: ObjectFrame) {
        self.objects.insert(path.into(), (mesh, frame));
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// The scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl MeshResolver for InMemoryScene {
    fn resolve(&self, path: &str) -> Option<(IndexedMesh, ObjectFrame)> {
        self.objects.get(path).cloned()
    }
}

/// Build a cap shell for every active record in `list`.
///
/// Records are processed in order and inactive ones are skipped. Processing
/// stops at the first record whose object cannot be found or whose
/// pipeline fails.
///
/// # Errors
///
/// - [`CapError::ObjectNotFound`] if `resolver` has no object at a record's
///   path
/// - any stage error from [`build_cap_shell`]
pub fn build_caps<R: MeshResolver + ?Sized>(
    resolver: &R,
    list: &CapParamsList,
) -> CapResult<Vec<CapShell>> {
    let mut shells = Vec::with_capacity(list.len());

    for params in list.active() {
        let Some((mesh, frame)) = resolver.resolve(&params.object_path) else {
            error!(object = %params.object_path, "Object does not exist, check the path");
            return Err(CapError::object_not_found(params.object_path.as_str()));
        };

        if let Some(shell) = build_cap_shell(&mesh, &frame, params)? {
            shells.push(shell);
        }
    }

    Ok(shells)
}
