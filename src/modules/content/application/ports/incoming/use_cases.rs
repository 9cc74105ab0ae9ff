use async_trait::async_trait;
use serde_json::Value;

use crate::content::application::domain::entities::Blog;
use crate::content::application::domain::record::Record;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error("Record not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Persistence failed: {0}")]
    PersistenceError(String),
}

//
// ──────────────────────────────────────────────────────────
// Collections
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CollectionUseCase<T>: Send + Sync {
    /// All records in stored order.
    async fn list(&self) -> Result<Vec<Record<T>>, ContentError>;

    async fn get(&self, id: &str) -> Result<Record<T>, ContentError>;

    /// Validates the payload, assigns a fresh id and appends.
    async fn create(&self, payload: Value) -> Result<Record<T>, ContentError>;

    /// Shallow merge of the supplied top-level fields.
    async fn update(&self, id: &str, patch: Value) -> Result<Record<T>, ContentError>;

    async fn delete(&self, id: &str) -> Result<(), ContentError>;
}

#[async_trait]
pub trait FindBlogBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Record<Blog>, ContentError>;
}

//
// ──────────────────────────────────────────────────────────
// Singletons
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SingletonUseCase<T>: Send + Sync {
    async fn get(&self) -> Result<T, ContentError>;

    /// Validates and replaces the whole document.
    async fn replace(&self, payload: Value) -> Result<T, ContentError>;

    /// Shallow merge over the current document.
    async fn merge(&self, patch: Value) -> Result<T, ContentError>;
}
