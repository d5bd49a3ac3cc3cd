//! Catalog persistence boundary.
//!
//! A store loads the whole catalog once and writes the whole catalog back after
//! every mutation. Lookups happen on the in-memory [`Catalog`].

pub mod in_memory;
pub mod json;

pub use in_memory::InMemoryCatalogStore;
pub use json::JsonCatalogStore;

use stocktrack_core::DomainError;
use stocktrack_products::Catalog;

use crate::error::StoreResult;

/// Result of a catalog load.
///
/// A missing backing file is not fatal: the catalog comes back empty and
/// `issue` carries [`DomainError::CatalogFileMissing`] for the caller to show.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub issue: Option<DomainError>,
}

impl LoadReport {
    pub fn loaded(catalog: Catalog) -> Self {
        Self {
            catalog,
            issue: None,
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        Self {
            catalog: Catalog::empty(),
            issue: Some(DomainError::catalog_missing(path)),
        }
    }
}

/// Storage for the product catalog.
pub trait CatalogStore {
    /// Read every product. Malformed content fails the whole load.
    fn load(&self) -> StoreResult<LoadReport>;

    /// Overwrite stored state with `catalog` in full.
    fn save(&self, catalog: &Catalog) -> StoreResult<()>;
}
