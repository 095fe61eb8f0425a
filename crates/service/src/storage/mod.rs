//! Storage abstractions for service layer
//!
//! A collection is read and written as a whole. Implementations decide where
//! the ordered record list lives; the catalog service owns locking.

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::record::{Collection, Record};

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

/// Whole-collection storage. Implementations can be file-backed or in-memory.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Load every record of `collection`, in stored order. Missing storage is an empty list.
    async fn read(&self, collection: Collection) -> Result<Vec<Record>, ServiceError>;
    /// Replace the stored list of `collection` with `records`.
    async fn write(&self, collection: Collection, records: &[Record]) -> Result<(), ServiceError>;
}
