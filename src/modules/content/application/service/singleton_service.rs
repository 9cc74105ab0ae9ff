use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

use crate::content::application::domain::record::{merge_fields, parse_fields, SingletonDocument};
use crate::content::application::ports::incoming::use_cases::{ContentError, SingletonUseCase};
use crate::content::application::ports::outgoing::DocumentRepository;

pub struct SingletonService<T, R>
where
    R: DocumentRepository<T>,
{
    repository: R,
    write_lock: Mutex<()>,
    _document: PhantomData<fn() -> T>,
}

impl<T, R> SingletonService<T, R>
where
    R: DocumentRepository<T>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
            _document: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> SingletonUseCase<T> for SingletonService<T, R>
where
    T: SingletonDocument,
    R: DocumentRepository<T>,
{
    async fn get(&self) -> Result<T, ContentError> {
        Ok(self.repository.load().await?)
    }

    async fn replace(&self, payload: Value) -> Result<T, ContentError> {
        let document: T =
            parse_fields(payload).map_err(|e| ContentError::ValidationError(e.to_string()))?;
        document.validate().map_err(ContentError::ValidationError)?;

        let _guard = self.write_lock.lock().await;
        self.repository.save(&document).await?;

        info!("Replaced {}", T::LABEL);
        Ok(document)
    }

    async fn merge(&self, patch: Value) -> Result<T, ContentError> {
        let _guard = self.write_lock.lock().await;
        let current = self.repository.load().await?;

        let merged = merge_fields(&current, patch)
            .map_err(|e| ContentError::ValidationError(e.to_string()))?;
        self.repository.save(&merged).await?;

        info!("Updated {}", T::LABEL);
        Ok(merged)
    }
}
