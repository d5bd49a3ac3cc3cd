use std::path::{Path, PathBuf};

use stocktrack_products::{Catalog, ProductRecord};

use super::{CatalogStore, LoadReport};
use crate::error::StoreResult;
use crate::json_file;

/// Catalog stored as a JSON array of product records.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self) -> StoreResult<LoadReport> {
        match json_file::read_records::<ProductRecord>(&self.path)? {
            Some(records) => {
                let catalog: Catalog = records.into_iter().collect();
                tracing::info!(path = %self.path.display(), products = catalog.len(), "catalog loaded");
                Ok(LoadReport::loaded(catalog))
            }
            None => {
                tracing::warn!(path = %self.path.display(), "catalog file not found; starting with an empty catalog");
                Ok(LoadReport::missing(self.path.display().to_string()))
            }
        }
    }

    fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        json_file::write_records(&self.path, &catalog.to_records())?;
        tracing::info!(path = %self.path.display(), products = catalog.len(), "catalog saved");
        Ok(())
    }
}
