//! Workflows over the catalog and the order log.

use stocktrack_core::{DomainError, ProductId};
use stocktrack_infra::{CatalogStore, OrderLog};
use stocktrack_products::{Catalog, Product, ProductSelection, StockReduction};
use stocktrack_sales::Order;

use crate::error::WorkflowError;
use crate::input::{OrderRequest, QuoteRequest, StockUpdateRequest};
use crate::outcome::{OrderPlaced, PriceQuote, StockUpdated};

/// Owns the in-memory catalog and the two backing stores.
///
/// Every operation runs to completion synchronously. Validation happens
/// before the first write; once writing starts there is no rollback.
#[derive(Debug)]
pub struct Inventory<C, L> {
    catalog: Catalog,
    catalog_store: C,
    order_log: L,
    load_issue: Option<DomainError>,
}

impl<C: CatalogStore, L: OrderLog> Inventory<C, L> {
    /// Load the catalog from `catalog_store`.
    ///
    /// A missing catalog file is not an error: the inventory starts empty and
    /// [`Inventory::load_issue`] reports it. Malformed content is an error.
    pub fn open(catalog_store: C, order_log: L) -> Result<Self, WorkflowError> {
        let report = catalog_store.load()?;
        Ok(Self {
            catalog: report.catalog,
            catalog_store,
            order_log,
            load_issue: report.issue,
        })
    }

    /// Non-fatal problem encountered while loading, for display at startup.
    pub fn load_issue(&self) -> Option<&DomainError> {
        self.load_issue.as_ref()
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find(id)
    }

    pub fn catalog_store(&self) -> &C {
        &self.catalog_store
    }

    pub fn order_log(&self) -> &L {
        &self.order_log
    }

    fn lookup(&self, id: ProductId) -> Result<&Product, DomainError> {
        self.catalog.find(id).ok_or(DomainError::ProductNotFound(id))
    }

    /// Place an order from raw form input.
    ///
    /// Checks input, product, stock and order id uniqueness before touching
    /// anything. Then decrements stock and saves the catalog, and finally
    /// appends the order to the log. The two writes are independent: if the
    /// log write fails, the stock change stays saved.
    pub fn place_order(
        &mut self,
        order_id: &str,
        product_id: &str,
        quantity: &str,
    ) -> Result<OrderPlaced, WorkflowError> {
        let req = OrderRequest::parse(order_id, product_id, quantity).inspect_err(|err| {
            tracing::warn!(%err, "order rejected: invalid input");
        })?;

        let product = self.lookup(req.product_id)?;
        product.ensure_available(req.quantity).inspect_err(|err| {
            tracing::warn!(%err, "order rejected");
        })?;

        if self.order_log.contains(req.order_id)? {
            tracing::warn!(order_id = %req.order_id, "order rejected: duplicate order id");
            return Err(DomainError::DuplicateOrderId(req.order_id).into());
        }

        let record = Order::new(req.order_id, product, req.quantity).to_record();

        let remaining_stock = match self.catalog.find_mut(req.product_id) {
            Some(product) => match product.reduce_stock(req.quantity) {
                StockReduction::Reduced { remaining } => remaining,
                StockReduction::Insufficient { available } => {
                    return Err(DomainError::insufficient_stock(
                        req.product_id,
                        req.quantity,
                        available,
                    )
                    .into());
                }
            },
            None => return Err(DomainError::ProductNotFound(req.product_id).into()),
        };
        self.catalog_store.save(&self.catalog)?;

        let placed = OrderPlaced {
            order_id: record.order_id,
            product_id: record.product_id,
            quantity: record.quantity,
            total_price: record.total_price,
            remaining_stock,
        };
        self.order_log.append_record(record)?;

        tracing::info!(
            order_id = %placed.order_id,
            product_id = %placed.product_id,
            quantity = placed.quantity,
            total = %placed.total_price,
            remaining_stock,
            "order placed"
        );
        Ok(placed)
    }

    /// Overwrite a product's stock count from raw form input and save.
    pub fn update_stock(
        &mut self,
        product_id: &str,
        new_stock: &str,
    ) -> Result<StockUpdated, WorkflowError> {
        let req = StockUpdateRequest::parse(product_id, new_stock).inspect_err(|err| {
            tracing::warn!(%err, "stock update rejected: invalid input");
        })?;

        let product = self
            .catalog
            .find_mut(req.product_id)
            .ok_or(DomainError::ProductNotFound(req.product_id))
            .inspect_err(|err| {
                tracing::warn!(%err, "stock update rejected");
            })?;
        let previous = product.stock();
        product.set_stock(req.stock);
        self.catalog_store.save(&self.catalog)?;

        tracing::info!(product_id = %req.product_id, previous, stock = req.stock, "stock updated");
        Ok(StockUpdated {
            product_id: req.product_id,
            stock: req.stock,
        })
    }

    /// Price of `quantity` units without placing an order.
    pub fn quote(&self, product_id: &str, quantity: &str) -> Result<PriceQuote, WorkflowError> {
        let req = QuoteRequest::parse(product_id, quantity)?;
        let product = self.lookup(req.product_id)?;
        Ok(PriceQuote {
            product_id: req.product_id,
            quantity: req.quantity,
            total_price: product.price().times(req.quantity),
        })
    }

    /// Summary of the selected well-known product.
    pub fn product_info(&self, selection: Option<ProductSelection>) -> Result<String, WorkflowError> {
        let selection = selection.ok_or_else(|| DomainError::missing("product selection"))?;
        let product = self.lookup(selection.product_id())?;
        tracing::debug!(%selection, product_id = %product.id_typed(), "product info");
        Ok(product.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrack_core::{OrderId, Price};
    use stocktrack_infra::{InMemoryCatalogStore, InMemoryOrderLog};

    fn seeded() -> Inventory<InMemoryCatalogStore, InMemoryOrderLog> {
        let catalog = Catalog::new(vec![
            Product::new(ProductId::new(101), "Televizyon", Price::new(1000.0).unwrap(), 5),
            Product::new(ProductId::new(109), "Mouse", Price::new(150.0).unwrap(), 40),
        ]);
        Inventory::open(
            InMemoryCatalogStore::with_catalog(&catalog),
            InMemoryOrderLog::new(),
        )
        .unwrap()
    }

    fn stored_stock(inv: &Inventory<InMemoryCatalogStore, InMemoryOrderLog>, id: u32) -> Option<u32> {
        inv.catalog_store()
            .records()
            .unwrap()
            .unwrap()
            .into_iter()
            .find(|r| r.id == ProductId::new(id))
            .map(|r| r.stock)
    }

    #[test]
    fn place_order_decrements_saves_and_logs() {
        let mut inv = seeded();
        let placed = inv.place_order("1", "101", "3").unwrap();

        assert_eq!(placed.total_price, Price::new(3000.0).unwrap());
        assert_eq!(placed.remaining_stock, 2);
        assert_eq!(inv.find(ProductId::new(101)).unwrap().stock(), 2);
        assert_eq!(stored_stock(&inv, 101), Some(2));

        let entries = inv.order_log().entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].order_id, OrderId::new(1));
        assert_eq!(entries[0].quantity, 3);
    }

    #[test]
    fn place_order_rejects_insufficient_stock_without_writes() {
        let mut inv = seeded();
        let err = inv.place_order("2", "101", "10").unwrap_err();

        assert_eq!(
            err.as_domain(),
            Some(&DomainError::insufficient_stock(ProductId::new(101), 10, 5))
        );
        assert_eq!(inv.find(ProductId::new(101)).unwrap().stock(), 5);
        assert!(inv.order_log().entries().unwrap().is_empty());
    }

    #[test]
    fn place_order_rejects_duplicate_id_before_touching_stock() {
        let mut inv = seeded();
        inv.place_order("7", "109", "1").unwrap();

        let err = inv.place_order("7", "101", "1").unwrap_err();
        assert_eq!(
            err.as_domain(),
            Some(&DomainError::DuplicateOrderId(OrderId::new(7)))
        );
        assert_eq!(inv.find(ProductId::new(101)).unwrap().stock(), 5);
        assert_eq!(inv.order_log().entries().unwrap().len(), 1);
    }

    #[test]
    fn place_order_checks_input_then_product() {
        let mut inv = seeded();
        assert_eq!(
            inv.place_order("", "101", "1").unwrap_err().code(),
            "missing_input"
        );
        assert_eq!(
            inv.place_order("1", "1o1", "1").unwrap_err().code(),
            "non_numeric_input"
        );
        assert_eq!(
            inv.place_order("1", "555", "1").unwrap_err().as_domain(),
            Some(&DomainError::ProductNotFound(ProductId::new(555)))
        );
    }

    #[test]
    fn update_stock_overwrites_and_saves() {
        let mut inv = seeded();
        inv.place_order("1", "101", "3").unwrap();

        let updated = inv.update_stock("101", "50").unwrap();
        assert_eq!(updated.stock, 50);
        assert_eq!(inv.find(ProductId::new(101)).unwrap().stock(), 50);
        assert_eq!(stored_stock(&inv, 101), Some(50));
    }

    #[test]
    fn update_stock_reports_unknown_product() {
        let mut inv = seeded();
        let err = inv.update_stock("404", "1").unwrap_err();
        assert_eq!(
            err.as_domain(),
            Some(&DomainError::ProductNotFound(ProductId::new(404)))
        );
    }

    #[test]
    fn rejected_stock_update_changes_nothing() {
        let mut inv = seeded();
        let saved_before = inv.catalog_store().records().unwrap();

        for (product_id, stock) in [("101", "-1"), ("101", ""), ("abc", "3"), ("404", "3")] {
            assert!(inv.update_stock(product_id, stock).is_err(), "{product_id:?} {stock:?}");
        }

        assert_eq!(inv.find(ProductId::new(101)).unwrap().stock(), 5);
        assert_eq!(inv.catalog_store().records().unwrap(), saved_before);
    }

    #[test]
    fn quote_prices_without_side_effects() {
        let inv = seeded();
        let quote = inv.quote("109", "4").unwrap();
        assert_eq!(quote.total_price, Price::new(600.0).unwrap());
        assert_eq!(inv.find(ProductId::new(109)).unwrap().stock(), 40);
        assert!(inv.order_log().entries().unwrap().is_empty());
    }

    #[test]
    fn product_info_needs_a_selection_present_in_the_catalog() {
        let inv = seeded();
        assert_eq!(
            inv.product_info(None).unwrap_err().code(),
            "missing_input"
        );
        assert!(
            inv.product_info(Some(ProductSelection::Television))
                .unwrap()
                .starts_with("Product ID: 101\n")
        );
        assert_eq!(
            inv.product_info(Some(ProductSelection::Tablet))
                .unwrap_err()
                .as_domain(),
            Some(&DomainError::ProductNotFound(ProductId::new(103)))
        );
    }

    #[test]
    fn missing_catalog_opens_empty_with_issue() {
        let inv = Inventory::open(InMemoryCatalogStore::new(), InMemoryOrderLog::new()).unwrap();
        assert!(inv.products().is_empty());
        assert_eq!(inv.load_issue().map(DomainError::code), Some("catalog_file_missing"));
    }
}
