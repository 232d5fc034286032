//! Source blob storage.
//!
//! Uploaded presentations land in the intake area under their
//! `stored_name` and stay there while the job is pending or
//! processing. Completing a job moves the blob to the processed area
//! so the worker never rescans finished files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::StoreError;

/// Blob store over two sibling directories: intake and processed.
#[derive(Debug, Clone)]
pub struct BlobStore {
    intake_dir: PathBuf,
    processed_dir: PathBuf,
}

impl BlobStore {
    pub fn new(intake_dir: impl Into<PathBuf>, processed_dir: impl Into<PathBuf>) -> Self {
        Self {
            intake_dir: intake_dir.into(),
            processed_dir: processed_dir.into(),
        }
    }

    /// Create both areas if they do not exist yet.
    pub async fn ensure_dirs(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.intake_dir).await?;
        tokio::fs::create_dir_all(&self.processed_dir).await?;
        Ok(())
    }

    /// Path of a blob in the intake area.
    pub fn intake_path(&self, stored_name: &str) -> PathBuf {
        self.intake_dir.join(stored_name)
    }

    /// Path of a blob in the processed area.
    pub fn processed_path(&self, stored_name: &str) -> PathBuf {
        self.processed_dir.join(stored_name)
    }

    /// Write an uploaded blob into the intake area.
    pub async fn write_intake(&self, stored_name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.intake_dir).await?;
        tokio::fs::write(self.intake_path(stored_name), bytes).await?;
        Ok(())
    }

    /// Read a blob from the intake area.
    pub async fn read_intake(&self, stored_name: &str) -> Result<Vec<u8>, StoreError> {
        read_or_not_found(&self.intake_path(stored_name), stored_name).await
    }

    /// Move a blob from the intake area to the processed area.
    pub async fn promote(&self, stored_name: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.processed_dir).await?;
        let from = self.intake_path(stored_name);
        let to = self.processed_path(stored_name);
        tokio::fs::rename(&from, &to).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(stored_name.to_string())
            } else {
                StoreError::Io(e)
            }
        })?;
        tracing::debug!(stored_name, "Blob moved to processed area");
        Ok(())
    }

    /// Whether a blob currently sits in the intake area.
    pub async fn intake_contains(&self, stored_name: &str) -> bool {
        tokio::fs::try_exists(self.intake_path(stored_name))
            .await
            .unwrap_or(false)
    }

    /// Whether a blob currently sits in the processed area.
    pub async fn processed_contains(&self, stored_name: &str) -> bool {
        tokio::fs::try_exists(self.processed_path(stored_name))
            .await
            .unwrap_or(false)
    }
}

async fn read_or_not_found(path: &Path, key: &str) -> Result<Vec<u8>, StoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(key.to_string())),
        Err(e) => Err(StoreError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> BlobStore {
        BlobStore::new(dir.path().join("uploads"), dir.path().join("processed"))
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = store(&dir);

        blobs.write_intake("abc.pptx", b"deck bytes").await.unwrap();
        assert!(blobs.intake_contains("abc.pptx").await);

        let bytes = blobs.read_intake("abc.pptx").await.unwrap();
        assert_eq!(bytes, b"deck bytes");
    }

    #[tokio::test]
    async fn missing_blob_reads_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = store(&dir);
        blobs.ensure_dirs().await.unwrap();

        let err = blobs.read_intake("ghost.pptx").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(name) if name == "ghost.pptx"));
    }

    #[tokio::test]
    async fn promote_moves_between_areas() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = store(&dir);

        blobs.write_intake("abc.pptx", b"deck bytes").await.unwrap();
        blobs.promote("abc.pptx").await.unwrap();

        assert!(!blobs.intake_contains("abc.pptx").await);
        assert!(blobs.processed_contains("abc.pptx").await);
    }

    #[tokio::test]
    async fn promoting_a_missing_blob_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = store(&dir);
        blobs.ensure_dirs().await.unwrap();

        let err = blobs.promote("ghost.pptx").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
