use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CollectionStore;
use crate::errors::ServiceError;
use crate::record::{Collection, Record};

/// In-memory collection store for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<Collection, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `collection` with `records`, replacing anything already there.
    pub fn with_records(mut self, collection: Collection, records: Vec<Record>) -> Self {
        self.inner.get_mut().insert(collection, records);
        self
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn read(&self, collection: Collection) -> Result<Vec<Record>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(&collection).cloned().unwrap_or_default())
    }

    async fn write(&self, collection: Collection, records: &[Record]) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(collection, records.to_vec());
        Ok(())
    }
}
