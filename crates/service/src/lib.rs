//! Service layer for the library catalog.
//! - `storage`: whole-collection stores (JSON files, in-memory).
//! - `catalog`: list/search/create/update/delete/get over books and members.
//! - `pagination`: page slicing and metadata.

pub mod errors;
pub mod record;
pub mod pagination;
pub mod storage;
pub mod catalog;

pub use catalog::CatalogService;
pub use errors::ServiceError;
pub use record::{Collection, Record};
