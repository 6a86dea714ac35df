//! Error types for mesh construction and validation.

use thiserror::Error;

/// Errors reported for malformed mesh input.
///
/// A stage that receives a mesh failing these checks refuses to process it
/// rather than emitting corrupt geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Parallel attribute arrays differ in length.
    #[error("attribute length mismatch: {positions} positions, {normals} normals, {uvs} uvs")]
    AttributeLengthMismatch {
        /// Number of positions.
        positions: usize,
        /// Number of normals.
        normals: usize,
        /// Number of texture coordinates.
        uvs: usize,
    },

    /// Flat index list length is not a multiple of three.
    #[error("index count {count} is not a multiple of 3")]
    IndexCountNotMultipleOfThree {
        /// Length of the index list.
        count: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Face index.
        face: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face uses the same vertex index for more than one corner.
    #[error("face {face} repeats vertex index {index}")]
    RepeatedCorner {
        /// Face index.
        face: usize,
        /// Repeated vertex index.
        index: u32,
    },

    /// The mesh needs more vertices than `u32` indices can address.
    #[error("mesh needs {count} vertices, more than u32 indices can address")]
    TooManyVertices {
        /// Required vertex count.
        count: usize,
    },
}

/// Result type for mesh construction and validation.
pub type MeshResult<T> = Result<T, MeshError>;
