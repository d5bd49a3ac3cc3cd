use std::path::{Path, PathBuf};

use serde_json::Value;
use stocktrack_core::{DomainError, OrderId};
use stocktrack_sales::OrderRecord;

use super::OrderLog;
use crate::error::{StoreError, StoreResult};
use crate::json_file;

const ORDER_ID_KEY: &str = "siparis_id";

/// Order log stored as a JSON array of order records.
///
/// Earlier entries are carried through an append as raw JSON, so keys and
/// number formatting written by other tools survive untouched.
#[derive(Debug, Clone)]
pub struct JsonOrderLog {
    path: PathBuf,
}

impl JsonOrderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn raw_entries(&self) -> StoreResult<Vec<Value>> {
        Ok(json_file::read_records(&self.path)?.unwrap_or_default())
    }
}

fn has_order_id(entry: &Value, id: OrderId) -> bool {
    entry.get(ORDER_ID_KEY).and_then(Value::as_u64) == Some(u64::from(id.get()))
}

impl OrderLog for JsonOrderLog {
    fn entries(&self) -> StoreResult<Vec<OrderRecord>> {
        Ok(json_file::read_records(&self.path)?.unwrap_or_default())
    }

    fn contains(&self, id: OrderId) -> StoreResult<bool> {
        Ok(self.raw_entries()?.iter().any(|entry| has_order_id(entry, id)))
    }

    fn append_record(&self, record: OrderRecord) -> StoreResult<()> {
        let mut entries = self.raw_entries()?;
        let order_id = record.order_id;
        if entries.iter().any(|entry| has_order_id(entry, order_id)) {
            return Err(DomainError::DuplicateOrderId(order_id).into());
        }

        let entry = serde_json::to_value(&record).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;
        entries.push(entry);
        json_file::write_records(&self.path, &entries)?;
        tracing::info!(path = %self.path.display(), %order_id, entries = entries.len(), "order logged");
        Ok(())
    }
}
