use std::sync::Arc;

use deckhand_store::{ArtifactStore, BlobStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already cheap
/// to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: deckhand_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source blob storage (intake and processed areas).
    pub blobs: Arc<BlobStore>,
    /// Explanation artifact storage.
    pub artifacts: Arc<ArtifactStore>,
}
