use std::path::PathBuf;

use async_trait::async_trait;
use tracing::error;

use crate::media::application::domain::entities::UploadCategory;
use crate::media::application::ports::outgoing::{MediaStorage, StorageError};

/// Writes uploads below `UPLOAD_DIR`, one subdirectory per category.
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub const DEFAULT_UPLOAD_DIR: &'static str = "./public/images";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Self {
        let root = std::env::var("UPLOAD_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIR.to_string());
        Self::new(root)
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(
        &self,
        category: UploadCategory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), StorageError> {
        let dir = self.root.join(category.as_str());
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            error!("Failed to create {}: {}", dir.display(), e);
            StorageError::Io(e.to_string())
        })?;

        let path = dir.join(file_name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            error!("Failed to write {}: {}", path.display(), e);
            StorageError::Io(e.to_string())
        })
    }
}
