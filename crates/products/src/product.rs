use serde::{Deserialize, Serialize};

use stocktrack_core::{DomainError, DomainResult, Entity, Price, ProductId};

/// Catalog entry: identity, display name, unit price and units on hand.
///
/// Stock is unsigned, and the only decrementing path ([`Product::reduce_stock`])
/// refuses to go below zero, so stock can never become negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    stock: u32,
}

/// Outcome of [`Product::reduce_stock`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockReduction {
    /// Stock was decremented; `remaining` units are left.
    Reduced { remaining: u32 },
    /// Not enough units; stock was left untouched.
    Insufficient { available: u32 },
}

impl StockReduction {
    pub fn is_reduced(self) -> bool {
        matches!(self, StockReduction::Reduced { .. })
    }
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Take `quantity` units out of stock if that many are on hand.
    ///
    /// Callers pass a positive quantity; zero is accepted and changes nothing.
    pub fn reduce_stock(&mut self, quantity: u32) -> StockReduction {
        match self.stock.checked_sub(quantity) {
            Some(remaining) => {
                self.stock = remaining;
                StockReduction::Reduced { remaining }
            }
            None => StockReduction::Insufficient {
                available: self.stock,
            },
        }
    }

    /// Overwrite the stock count unconditionally (manual stock correction).
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }

    /// Check that `quantity` units could be taken without mutating anything.
    pub fn ensure_available(&self, quantity: u32) -> DomainResult<()> {
        if quantity <= self.stock {
            Ok(())
        } else {
            Err(DomainError::insufficient_stock(self.id, quantity, self.stock))
        }
    }

    /// Multi-line, human-readable summary.
    pub fn describe(&self) -> String {
        format!(
            "Product ID: {}\nProduct name: {}\nPrice: {}\nStock: {}",
            self.id, self.name, self.price, self.stock
        )
    }

    /// Persisted shape of this product.
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One entry of the catalog file.
///
/// Field names follow the file format; unknown or missing keys are rejected
/// so a malformed entry fails the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductRecord {
    #[serde(rename = "urun_id")]
    pub id: ProductId,
    #[serde(rename = "urun_adi")]
    pub name: String,
    #[serde(rename = "fiyat")]
    pub price: Price,
    #[serde(rename = "stok_adedi")]
    pub stock: u32,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product::new(record.id, record.name, record.price, record.stock)
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        product.to_record()
    }
}
