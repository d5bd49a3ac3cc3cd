//! Successful workflow results and their user-facing messages.

use stocktrack_core::{OrderId, Price, ProductId};

/// Currency label shown next to amounts.
pub const CURRENCY: &str = "TL";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub total_price: Price,
    pub remaining_stock: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockUpdated {
    pub product_id: ProductId,
    pub stock: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub product_id: ProductId,
    pub quantity: u32,
    pub total_price: Price,
}

impl core::fmt::Display for OrderPlaced {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order {} created successfully.\nTotal price: {} {CURRENCY}",
            self.order_id, self.total_price
        )
    }
}

impl core::fmt::Display for StockUpdated {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Stock updated successfully.\nNew stock: {}", self.stock)
    }
}

impl core::fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Total price: {} {CURRENCY}", self.total_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_totals_and_stock() {
        let placed = OrderPlaced {
            order_id: OrderId::new(1),
            product_id: ProductId::new(101),
            quantity: 3,
            total_price: Price::new(3000.0).unwrap(),
            remaining_stock: 2,
        };
        assert_eq!(
            placed.to_string(),
            "Order 1 created successfully.\nTotal price: 3000 TL"
        );

        let updated = StockUpdated {
            product_id: ProductId::new(101),
            stock: 50,
        };
        assert_eq!(
            updated.to_string(),
            "Stock updated successfully.\nNew stock: 50"
        );

        let quote = PriceQuote {
            product_id: ProductId::new(105),
            quantity: 2,
            total_price: Price::new(1499.5).unwrap(),
        };
        assert_eq!(quote.to_string(), "Total price: 1499.5 TL");
    }
}
