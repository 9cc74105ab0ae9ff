use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::content::application::domain::record::{CollectionEntity, Record, SingletonDocument};
use crate::content::application::ports::outgoing::{
    CollectionRepository, DocumentRepository, RepositoryError,
};

/// One pretty-printed JSON document on disk per entity type.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: CollectionEntity> JsonFileRepository<T> {
    pub fn collection(data_dir: &Path) -> Self {
        Self::new(data_dir.join(T::FILE_NAME))
    }
}

impl<T: SingletonDocument> JsonFileRepository<T> {
    pub fn document(data_dir: &Path) -> Self {
        Self::new(data_dir.join(T::FILE_NAME))
    }
}

async fn read_json<V: DeserializeOwned>(path: &Path) -> Result<Option<V>, RepositoryError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            return Err(RepositoryError::Io(e.to_string()));
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| {
            error!("Corrupt document {}: {}", path.display(), e);
            RepositoryError::Serialization(e.to_string())
        })
}

/// Writes the full document to a sibling temp file, then renames it over
/// the target so readers never see a partial document.
async fn write_json<V: Serialize + ?Sized>(path: &Path, value: &V) -> Result<(), RepositoryError> {
    let mut body =
        serde_json::to_vec_pretty(value).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
    body.push(b'\n');

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, &body)
        .await
        .map_err(|e| RepositoryError::Io(e.to_string()))?;
    tokio::fs::rename(&tmp, path).await.map_err(|e| {
        error!("Failed to replace {}: {}", path.display(), e);
        RepositoryError::Io(e.to_string())
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), body.len());
    Ok(())
}

#[async_trait]
impl<T: CollectionEntity> CollectionRepository<T> for JsonFileRepository<T> {
    /// An absent document is an empty collection.
    async fn load(&self) -> Result<Vec<Record<T>>, RepositoryError> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }

    async fn save(&self, records: &[Record<T>]) -> Result<(), RepositoryError> {
        write_json(&self.path, records).await
    }
}

#[async_trait]
impl<T: SingletonDocument> DocumentRepository<T> for JsonFileRepository<T> {
    async fn load(&self) -> Result<T, RepositoryError> {
        read_json(&self.path)
            .await?
            .ok_or_else(|| RepositoryError::MissingDocument(self.path.display().to_string()))
    }

    async fn save(&self, document: &T) -> Result<(), RepositoryError> {
        write_json(&self.path, document).await
    }
}

/// Returns the file names under `data_dir` that do not exist.
pub async fn missing_documents(data_dir: &Path, file_names: &[&str]) -> Vec<String> {
    let mut missing = Vec::new();
    for name in file_names {
        match tokio::fs::try_exists(data_dir.join(name)).await {
            Ok(true) => {}
            _ => missing.push((*name).to_string()),
        }
    }
    missing
}
