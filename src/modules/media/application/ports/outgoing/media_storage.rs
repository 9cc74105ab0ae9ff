use async_trait::async_trait;

use crate::media::application::domain::entities::UploadCategory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persists `bytes` as `<category>/<file_name>`. The file name is
    /// generated by the caller and never contains a path separator.
    async fn store(
        &self,
        category: UploadCategory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), StorageError>;
}
