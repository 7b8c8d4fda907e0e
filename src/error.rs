use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a conversion.
/// Parse errors carry the 1-based line number they were found on
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("line {line_number}: per-vertex color information is missing, only OBJ files with per-vertex coloring are supported: {line}")]
    MissingColorData { line_number: usize, line: String },

    #[error("line {line_number}: OBJ files linked with an MTL library are not supported (only per-vertex coloring is supported)")]
    UnsupportedMaterialLibrary { line_number: usize },

    #[error("line {line_number}: unexpected line {line}")]
    UnrecognizedLine { line_number: usize, line: String },

    #[error("line {line_number}: {token:?} is not a valid number")]
    MalformedNumber { line_number: usize, token: String },

    #[error("line {line_number}: faces must reference exactly 3 vertices, found {found}")]
    UnsupportedFaceArity { line_number: usize, found: usize },

    #[error("line {line_number}: face corner {corner:?} references texture coordinates or normals, which are not supported")]
    UnsupportedFaceAttributes { line_number: usize, corner: String },

    #[error("line {line_number}: face references vertex {index} but only {vertex_count} vertices are defined")]
    VertexIndexOutOfRange {
        line_number: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("triangle {triangle} references vertex {index} but the mesh has {vertex_count} vertices")]
    InvalidTriangle {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("mesh is empty: {0}")]
    EmptyMesh(&'static str),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("host error: {0}")]
    Host(String),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
