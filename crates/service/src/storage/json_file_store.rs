use std::{io::ErrorKind, path::PathBuf};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::CollectionStore;
use crate::errors::ServiceError;
use crate::record::{Collection, Record};

/// JSON file-backed collection store.
///
/// Each collection is one pretty-printed JSON array under `data_dir`
/// (`books.json`, `members.json`). Writes overwrite the file in place and are
/// not atomic; callers serialize read-modify-write cycles themselves.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// Full path of the document backing `collection`.
    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn read(&self, collection: Collection) -> Result<Vec<Record>, ServiceError> {
        let path = self.path_of(collection);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%collection, path = %path.display(), "collection file absent; treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ServiceError::Storage(format!("{}: {}", path.display(), e))),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::MalformedStorage(format!("{}: {}", path.display(), e)))
    }

    async fn write(&self, collection: Collection, records: &[Record]) -> Result<(), ServiceError> {
        fs::create_dir_all(&self.data_dir).await?;
        let path = self.path_of(collection);
        let data = serde_json::to_vec_pretty(records).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&path, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("{}: {}", path.display(), e)))?;
        debug!(%collection, count = records.len(), "collection written");
        Ok(())
    }
}
