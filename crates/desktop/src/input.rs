//! Validation of raw form fields.
//!
//! Every workflow receives strings exactly as typed. Emptiness is checked on
//! all fields before any digit check, so a form with a blank field reports
//! MissingInput even when another field is also malformed.

use stocktrack_core::id::parse_digits;
use stocktrack_core::{DomainError, DomainResult, OrderId, ProductId};

pub const ORDER_ID: &str = "order id";
pub const PRODUCT_ID: &str = "product id";
pub const QUANTITY: &str = "quantity";
pub const NEW_STOCK: &str = "new stock";

/// Fail with MissingInput naming the first blank field.
fn require_all(fields: &[(&'static str, &str)]) -> DomainResult<()> {
    match fields.iter().find(|(_, raw)| raw.trim().is_empty()) {
        Some((name, _)) => Err(DomainError::missing(*name)),
        None => Ok(()),
    }
}

/// A whole number of zero or more.
pub fn non_negative(field: &'static str, raw: &str) -> DomainResult<u32> {
    parse_digits(raw.trim()).ok_or_else(|| DomainError::non_numeric(field))
}

/// A whole number of one or more.
pub fn positive(field: &'static str, raw: &str) -> DomainResult<u32> {
    match non_negative(field, raw)? {
        0 => Err(DomainError::non_numeric(field)),
        n => Ok(n),
    }
}

/// Validated "create order" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRequest {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderRequest {
    pub fn parse(order_id: &str, product_id: &str, quantity: &str) -> DomainResult<Self> {
        require_all(&[(ORDER_ID, order_id), (PRODUCT_ID, product_id), (QUANTITY, quantity)])?;
        Ok(Self {
            order_id: OrderId::new(positive(ORDER_ID, order_id)?),
            product_id: ProductId::new(positive(PRODUCT_ID, product_id)?),
            quantity: positive(QUANTITY, quantity)?,
        })
    }
}

/// Validated "update stock" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockUpdateRequest {
    pub product_id: ProductId,
    pub stock: u32,
}

impl StockUpdateRequest {
    pub fn parse(product_id: &str, stock: &str) -> DomainResult<Self> {
        require_all(&[(PRODUCT_ID, product_id), (NEW_STOCK, stock)])?;
        Ok(Self {
            product_id: ProductId::new(positive(PRODUCT_ID, product_id)?),
            stock: non_negative(NEW_STOCK, stock)?,
        })
    }
}

/// Validated "calculate price" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl QuoteRequest {
    pub fn parse(product_id: &str, quantity: &str) -> DomainResult<Self> {
        require_all(&[(PRODUCT_ID, product_id), (QUANTITY, quantity)])?;
        Ok(Self {
            product_id: ProductId::new(positive(PRODUCT_ID, product_id)?),
            quantity: positive(QUANTITY, quantity)?,
        })
    }
}
