use async_trait::async_trait;

use crate::media::application::domain::entities::{IncomingFile, StoredImage};
use crate::media::application::domain::policies::FileTypeError;
use crate::media::application::ports::outgoing::StorageError;

#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    /// Raw `type` form field; validated against the category allowlist.
    pub category: String,
    pub file: Option<IncomingFile>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid upload type: {0}")]
    InvalidUploadType(String),

    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("Invalid file type: {0}")]
    InvalidFileType(#[from] FileTypeError),

    #[error("File too large (max {max_bytes} bytes)")]
    FileTooLarge { max_bytes: u64 },

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(&self, command: UploadImageCommand) -> Result<StoredImage, UploadError>;
}
