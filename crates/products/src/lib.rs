//! Products domain module.
//!
//! Catalog entries and their stock rules, implemented purely as deterministic
//! domain logic (no IO).

pub mod catalog;
pub mod product;
pub mod selection;

pub use catalog::Catalog;
pub use product::{Product, ProductRecord, StockReduction};
pub use selection::ProductSelection;
