use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use crate::media::application::domain::entities::{StoredImage, UploadCategory};
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::{
    UploadError, UploadImageCommand, UploadImageUseCase,
};
use crate::media::application::ports::outgoing::MediaStorage;

pub struct UploadImageService<S>
where
    S: MediaStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> UploadImageService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

/// `<unix millis>-<random below 1e9>.<ext>`; no client-controlled text.
fn generate_file_name(ext: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{}-{}.{}", Utc::now().timestamp_millis(), suffix, ext)
}

#[async_trait]
impl<S> UploadImageUseCase for UploadImageService<S>
where
    S: MediaStorage,
{
    async fn execute(&self, command: UploadImageCommand) -> Result<StoredImage, UploadError> {
        let category: UploadCategory = command.category.parse().map_err(|_| {
            warn!("Rejected upload type {:?}", command.category);
            UploadError::InvalidUploadType(command.category.clone())
        })?;

        let file = command.file.ok_or(UploadError::NoFileUploaded)?;

        let ext = self
            .policy
            .check_file_type(&file.original_name, &file.mime_type)?;

        if self.policy.exceeds_limit(file.size_bytes) {
            return Err(UploadError::FileTooLarge {
                max_bytes: self.policy.max_file_size_bytes,
            });
        }

        let file_name = generate_file_name(&ext);
        self.storage.store(category, &file_name, &file.bytes).await?;

        info!("Stored {} byte upload as {}/{}", file.size_bytes, category, file_name);
        Ok(StoredImage {
            url: format!("/images/{}/{}", category, file_name),
        })
    }
}
