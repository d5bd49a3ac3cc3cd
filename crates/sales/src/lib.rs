//! Sales domain module.
//!
//! Orders placed against catalog products, implemented purely as
//! deterministic domain logic (no IO).

pub mod order;

pub use order::{ORDER_DATE_FORMAT, Order, OrderRecord};
