use std::sync::RwLock;

use stocktrack_products::{Catalog, ProductRecord};

use super::{CatalogStore, LoadReport};
use crate::error::{StoreError, StoreResult};

/// In-memory catalog store.
///
/// `None` plays the part of an absent file. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    records: RwLock<Option<Vec<ProductRecord>>>,
}

impl InMemoryCatalogStore {
    /// A store whose backing "file" does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self {
            records: RwLock::new(Some(catalog.to_records())),
        }
    }

    /// Snapshot of what is currently stored.
    pub fn records(&self) -> StoreResult<Option<Vec<ProductRecord>>> {
        let guard = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.clone())
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self) -> StoreResult<LoadReport> {
        Ok(match self.records()? {
            Some(records) => LoadReport::loaded(records.into_iter().collect()),
            None => LoadReport::missing("<memory>"),
        })
    }

    fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let mut guard = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        *guard = Some(catalog.to_records());
        Ok(())
    }
}
