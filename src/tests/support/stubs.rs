use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::content::application::domain::record::Record;
use crate::content::application::ports::incoming::use_cases::{CollectionUseCase, ContentError};
use crate::content::application::ports::outgoing::{
    CollectionRepository, DocumentRepository, RepositoryError,
};
use crate::media::application::domain::entities::UploadCategory;
use crate::media::application::ports::outgoing::{MediaStorage, StorageError};

/// Collection kept in memory; saves can be forced to fail.
pub struct InMemoryCollection<T> {
    records: Mutex<Vec<Record<T>>>,
    save_error: Mutex<Option<RepositoryError>>,
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<T> InMemoryCollection<T> {
    pub fn with_records(records: Vec<Record<T>>) -> Self {
        Self {
            records: Mutex::new(records),
            save_error: Mutex::new(None),
        }
    }

    pub fn fail_saves(&self, error: RepositoryError) {
        *self.save_error.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl<T> CollectionRepository<T> for InMemoryCollection<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Vec<Record<T>>, RepositoryError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save(&self, records: &[Record<T>]) -> Result<(), RepositoryError> {
        if let Some(e) = self.save_error.lock().unwrap().clone() {
            return Err(e);
        }
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}

pub struct InMemoryDocument<T> {
    document: Mutex<T>,
}

impl<T> InMemoryDocument<T> {
    pub fn new(document: T) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

#[async_trait]
impl<T> DocumentRepository<T> for InMemoryDocument<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<T, RepositoryError> {
        Ok(self.document.lock().unwrap().clone())
    }

    async fn save(&self, document: &T) -> Result<(), RepositoryError> {
        *self.document.lock().unwrap() = document.clone();
        Ok(())
    }
}

/// Every call fails with the given error.
pub struct FailingCollection(pub ContentError);

#[async_trait]
impl<T: Send + Sync + 'static> CollectionUseCase<T> for FailingCollection {
    async fn list(&self) -> Result<Vec<Record<T>>, ContentError> {
        Err(self.0.clone())
    }

    async fn get(&self, _id: &str) -> Result<Record<T>, ContentError> {
        Err(self.0.clone())
    }

    async fn create(&self, _payload: Value) -> Result<Record<T>, ContentError> {
        Err(self.0.clone())
    }

    async fn update(&self, _id: &str, _patch: Value) -> Result<Record<T>, ContentError> {
        Err(self.0.clone())
    }

    async fn delete(&self, _id: &str) -> Result<(), ContentError> {
        Err(self.0.clone())
    }
}

/// Accepts every upload and keeps nothing.
pub struct DiscardingMediaStorage;

#[async_trait]
impl MediaStorage for DiscardingMediaStorage {
    async fn store(
        &self,
        _category: UploadCategory,
        _file_name: &str,
        _bytes: &[u8],
    ) -> Result<(), StorageError> {
        Ok(())
    }
}
