//! Error types for the model artifact store.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type ModelStoreResult<T> = Result<T, ModelStoreError>;

/// Errors raised while loading model artifacts.
///
/// Any of these is fatal at startup: the dashboard must not run against a
/// partial model set.
#[derive(Debug, Error)]
pub enum ModelStoreError {
    /// Artifact file does not exist.
    #[error("model artifact not found: {path}")]
    ArtifactMissing { path: PathBuf },
    /// Artifact file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Artifact content is not the expected JSON shape.
    #[error("malformed model artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Artifact content does not match its sidecar checksum.
    #[error("checksum mismatch for {path}: expected {expected}, computed {computed}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        computed: String,
    },
    /// Store configuration is invalid.
    #[error("invalid store configuration: {0}")]
    Config(String),
}
