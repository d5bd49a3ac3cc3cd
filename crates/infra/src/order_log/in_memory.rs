use std::sync::RwLock;

use stocktrack_sales::OrderRecord;

use super::{OrderLog, push_unique};
use crate::error::{StoreError, StoreResult};

/// In-memory order log.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderLog {
    entries: RwLock<Vec<OrderRecord>>,
}

impl InMemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderLog for InMemoryOrderLog {
    fn entries(&self) -> StoreResult<Vec<OrderRecord>> {
        let guard = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn append_record(&self, record: OrderRecord) -> StoreResult<()> {
        let mut guard = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        push_unique(&mut guard, record)
    }
}
