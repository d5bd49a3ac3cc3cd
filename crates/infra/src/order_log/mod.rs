//! Order log persistence boundary.
//!
//! The log is append-only history. Entries are read back only to reject a
//! duplicate order id; they are never updated, removed, or loaded into the
//! catalog.

pub mod in_memory;
pub mod json;

pub use in_memory::InMemoryOrderLog;
pub use json::JsonOrderLog;

use stocktrack_core::entity::find_by_id;
use stocktrack_core::{DomainError, OrderId};
use stocktrack_sales::{Order, OrderRecord};

use crate::error::StoreResult;

/// Append-only store of placed orders.
pub trait OrderLog {
    /// Every entry, oldest first. An absent log is empty.
    fn entries(&self) -> StoreResult<Vec<OrderRecord>>;

    /// Append `record` unless its id is already logged.
    ///
    /// On a duplicate, fails with [`DomainError::DuplicateOrderId`] and leaves
    /// the log untouched.
    fn append_record(&self, record: OrderRecord) -> StoreResult<()>;

    fn contains(&self, id: OrderId) -> StoreResult<bool> {
        Ok(find_by_id(&self.entries()?, &id).is_some())
    }

    fn append(&self, order: &Order<'_>) -> StoreResult<()> {
        self.append_record(order.to_record())
    }
}

/// Push `record` onto `entries` after the duplicate check shared by every log.
pub(crate) fn push_unique(entries: &mut Vec<OrderRecord>, record: OrderRecord) -> StoreResult<()> {
    if find_by_id(entries, &record.order_id).is_some() {
        return Err(DomainError::DuplicateOrderId(record.order_id).into());
    }
    entries.push(record);
    Ok(())
}
