use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::content::application::domain::record::{
    merge_fields, parse_fields, CollectionEntity, Record,
};
use crate::content::application::ports::incoming::use_cases::{CollectionUseCase, ContentError};
use crate::content::application::ports::outgoing::CollectionRepository;

pub struct CollectionService<T, R>
where
    R: CollectionRepository<T>,
{
    repository: R,
    // Serialises read-modify-write cycles on this collection.
    write_lock: Mutex<()>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> CollectionService<T, R>
where
    R: CollectionRepository<T>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> CollectionUseCase<T> for CollectionService<T, R>
where
    T: CollectionEntity,
    R: CollectionRepository<T>,
{
    async fn list(&self) -> Result<Vec<Record<T>>, ContentError> {
        Ok(self.repository.load().await?)
    }

    async fn get(&self, id: &str) -> Result<Record<T>, ContentError> {
        self.repository
            .load()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(ContentError::NotFound)
    }

    async fn create(&self, payload: Value) -> Result<Record<T>, ContentError> {
        let fields: T =
            parse_fields(payload).map_err(|e| ContentError::ValidationError(e.to_string()))?;
        fields.validate().map_err(ContentError::ValidationError)?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.repository.load().await?;
        let record = Record::new(Uuid::new_v4().to_string(), fields);
        records.push(record.clone());
        self.repository.save(&records).await?;

        info!("Created {} {}", T::LABEL, record.id);
        Ok(record)
    }

    async fn update(&self, id: &str, patch: Value) -> Result<Record<T>, ContentError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.repository.load().await?;

        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(ContentError::NotFound)?;

        record.fields = merge_fields(&record.fields, patch)
            .map_err(|e| ContentError::ValidationError(e.to_string()))?;
        let updated = record.clone();

        self.repository.save(&records).await?;
        debug!("Updated {} {}", T::LABEL, id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), ContentError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.repository.load().await?;

        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(ContentError::NotFound);
        }

        self.repository.save(&records).await?;
        info!("Deleted {} {}", T::LABEL, id);
        Ok(())
    }
}
