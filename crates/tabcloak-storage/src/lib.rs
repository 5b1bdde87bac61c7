//! Named-blob storage for tabular text content.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

mod error;

pub use error::StorageError;

/// Fetches and stores whole blobs by name. No partial reads, no retries.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, StorageError>;
    async fn store(&self, name: &str, content: &str) -> Result<(), StorageError>;
}

/// Blob store backed by a directory; one file per blob.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn fetch(&self, name: &str) -> Result<String, StorageError> {
        let path = self.blob_path(name);

        debug!(blob = name, "fetching blob");

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn store(&self, name: &str, content: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;

        debug!(blob = name, bytes = content.len(), "storing blob");

        tokio::fs::write(self.blob_path(name), content).await?;
        Ok(())
    }
}
