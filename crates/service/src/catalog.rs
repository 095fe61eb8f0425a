//! Catalog operations over the books and members collections.
//!
//! Every operation loads the whole collection from the injected store. The
//! mutating ones write it back under a per-collection lock, so concurrent
//! requests inside one process cannot lose each other's updates.

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::errors::ServiceError;
use crate::pagination::{paginate, Page, PageRequest};
use crate::record::{folded_field, merge, record_id, Collection, Record};
use crate::storage::CollectionStore;

#[derive(Default)]
struct CollectionLocks {
    books: Mutex<()>,
    members: Mutex<()>,
}

impl CollectionLocks {
    async fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        match collection {
            Collection::Books => self.books.lock().await,
            Collection::Members => self.members.lock().await,
        }
    }
}

pub struct CatalogService {
    store: Arc<dyn CollectionStore>,
    locks: CollectionLocks,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store, locks: CollectionLocks::default() }
    }

    async fn load(&self, collection: Collection) -> Result<Vec<Record>, ServiceError> {
        let _guard = self.locks.lock(collection).await;
        self.store.read(collection).await
    }

    /// One page of `collection`.
    pub async fn list(&self, collection: Collection, request: PageRequest) -> Result<Page<Record>, ServiceError> {
        // validate before touching storage
        request.validate()?;
        let records = self.load(collection).await?;
        paginate(records, request)
    }

    /// Books whose `title` or `author` contains `query`, ignoring case.
    pub async fn search_books(&self, query: &str) -> Result<Vec<Record>, ServiceError> {
        let needle = query.to_lowercase();
        let books = self.load(Collection::Books).await?;
        Ok(books
            .into_iter()
            .filter(|book| {
                folded_field(book, "title").contains(&needle) || folded_field(book, "author").contains(&needle)
            })
            .collect())
    }

    /// First record of `collection` with the given id.
    pub async fn get(&self, collection: Collection, id: i64) -> Result<Record, ServiceError> {
        self.load(collection)
            .await?
            .into_iter()
            .find(|r| record_id(r) == Some(id))
            .ok_or_else(|| ServiceError::not_found(collection.label()))
    }

    /// Append `record` verbatim. Id uniqueness is not checked.
    pub async fn create(&self, collection: Collection, record: Record) -> Result<(), ServiceError> {
        let _guard = self.locks.lock(collection).await;
        let mut records = self.store.read(collection).await?;
        let id = record_id(&record);
        records.push(record);
        self.store.write(collection, &records).await?;
        info!(%collection, ?id, total = records.len(), "record created");
        Ok(())
    }

    /// Merge `patch` into the first record with the given id.
    /// Storage is left untouched when nothing matches.
    pub async fn update(&self, collection: Collection, id: i64, patch: Record) -> Result<(), ServiceError> {
        let _guard = self.locks.lock(collection).await;
        let mut records = self.store.read(collection).await?;
        let target = records
            .iter_mut()
            .find(|r| record_id(r) == Some(id))
            .ok_or_else(|| ServiceError::not_found(collection.label()))?;
        merge(target, patch);
        self.store.write(collection, &records).await?;
        info!(%collection, id, "record updated");
        Ok(())
    }

    /// Remove every record with the given id; returns how many were removed.
    pub async fn delete(&self, collection: Collection, id: i64) -> Result<usize, ServiceError> {
        let _guard = self.locks.lock(collection).await;
        let mut records = self.store.read(collection).await?;
        let before = records.len();
        records.retain(|r| record_id(r) != Some(id));
        let removed = before - records.len();
        self.store.write(collection, &records).await?;
        info!(%collection, id, removed, "records deleted");
        Ok(removed)
    }
}
