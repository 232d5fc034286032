//! Filesystem storage: source blobs (intake and processed areas) and
//! explanation artifacts (one JSON document per job).

pub mod artifacts;
pub mod blobs;

pub use artifacts::ArtifactStore;
pub use blobs::BlobStore;

/// Errors from blob and artifact storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested blob or artifact does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
