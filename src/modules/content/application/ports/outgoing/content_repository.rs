use async_trait::async_trait;

use crate::content::application::domain::record::Record;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Document not found: {0}")]
    MissingDocument(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Whole-document access to one collection. Callers do read-modify-write.
#[async_trait]
pub trait CollectionRepository<T>: Send + Sync {
    async fn load(&self) -> Result<Vec<Record<T>>, RepositoryError>;
    async fn save(&self, records: &[Record<T>]) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait DocumentRepository<T>: Send + Sync {
    async fn load(&self) -> Result<T, RepositoryError>;
    async fn save(&self, document: &T) -> Result<(), RepositoryError>;
}
