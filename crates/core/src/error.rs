//! Domain error model.

use thiserror::Error;

use crate::id::{OrderId, ProductId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is non-fatal to the process and maps to one user-visible
/// message. I/O and decoding failures belong to the storage layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input field was empty.
    #[error("missing input: {field} is required")]
    MissingInput { field: String },

    /// A field expected to hold a whole number held something else.
    #[error("invalid input: {field} must contain digits only")]
    NonNumericInput { field: String },

    /// The catalog file was absent at load time.
    #[error("catalog file not found: {path}")]
    CatalogFileMissing { path: String },

    /// No catalog entry carries the requested identifier.
    #[error("no product with id {0}")]
    ProductNotFound(ProductId),

    /// The requested quantity exceeds current stock.
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The order identifier is already present in the order log.
    #[error("order {0} already exists")]
    DuplicateOrderId(OrderId),
}

impl DomainError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingInput {
            field: field.into(),
        }
    }

    pub fn non_numeric(field: impl Into<String>) -> Self {
        Self::NonNumericInput {
            field: field.into(),
        }
    }

    pub fn catalog_missing(path: impl Into<String>) -> Self {
        Self::CatalogFileMissing { path: path.into() }
    }

    pub fn insufficient_stock(product_id: ProductId, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            product_id,
            requested,
            available,
        }
    }

    /// Short machine-readable category, stable across message wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::MissingInput { .. } => "missing_input",
            DomainError::NonNumericInput { .. } => "non_numeric_input",
            DomainError::CatalogFileMissing { .. } => "catalog_file_missing",
            DomainError::ProductNotFound(_) => "product_not_found",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
            DomainError::DuplicateOrderId(_) => "duplicate_order_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = DomainError::insufficient_stock(ProductId::new(101), 10, 2);
        assert_eq!(
            err.to_string(),
            "insufficient stock for product 101: requested 10, available 2"
        );

        let err = DomainError::DuplicateOrderId(OrderId::new(7));
        assert_eq!(err.to_string(), "order 7 already exists");

        let err = DomainError::missing("quantity");
        assert_eq!(err.to_string(), "missing input: quantity is required");
    }

    #[test]
    fn codes_are_distinct_per_category() {
        let errors = [
            DomainError::missing("a"),
            DomainError::non_numeric("a"),
            DomainError::catalog_missing("urunler.json"),
            DomainError::ProductNotFound(ProductId::new(1)),
            DomainError::insufficient_stock(ProductId::new(1), 2, 1),
            DomainError::DuplicateOrderId(OrderId::new(1)),
        ];
        let mut codes: Vec<_> = errors.iter().map(DomainError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
