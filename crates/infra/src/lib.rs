//! Infrastructure layer: JSON file persistence for the catalog and order log.

pub mod catalog;
pub mod error;
pub mod json_file;
pub mod order_log;

pub use catalog::{CatalogStore, InMemoryCatalogStore, JsonCatalogStore, LoadReport};
pub use error::{StoreError, StoreResult};
pub use order_log::{InMemoryOrderLog, JsonOrderLog, OrderLog};
