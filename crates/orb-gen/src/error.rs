//! Error types for the generator binary.

use orb_config::ConfigError;
use orb_mesh::MeshError;

/// Errors that can occur while writing a mesh file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write mesh file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode mesh as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure of one generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
