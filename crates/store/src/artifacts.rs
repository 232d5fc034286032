//! Explanation artifact storage.
//!
//! One pretty-printed JSON document per completed job, keyed by the
//! job's uid: `{dir}/{uid}.json`. The document body is the
//! `slide1..slideN` mapping exactly as the pipeline produced it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use deckhand_core::SlideExplanations;

use crate::StoreError;

/// Artifact store over a single output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the output directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Path of the artifact document for a job.
    pub fn path(&self, uid: Uuid) -> PathBuf {
        self.dir.join(format!("{uid}.json"))
    }

    /// Persist the explanation mapping for a job.
    pub async fn write(&self, uid: Uuid, explanations: &SlideExplanations) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let body = serde_json::to_vec_pretty(explanations)?;
        tokio::fs::write(self.path(uid), body).await?;
        tracing::debug!(%uid, slides = explanations.len(), "Artifact written");
        Ok(())
    }

    /// Read the explanation mapping for a job, failing with `NotFound`
    /// if no artifact exists for that uid.
    pub async fn read(&self, uid: Uuid) -> Result<SlideExplanations, StoreError> {
        let bytes = read_or_not_found(&self.path(uid), uid).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

async fn read_or_not_found(path: &Path, uid: Uuid) -> Result<Vec<u8>, StoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(uid.to_string())),
        Err(e) => Err(StoreError::Io(e)),
    }
}
