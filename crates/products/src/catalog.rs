//! In-memory catalog: the owned list of products workflows operate on.

use stocktrack_core::entity::{find_by_id, find_by_id_mut};
use stocktrack_core::ProductId;

use crate::product::{Product, ProductRecord};

/// The full set of known products, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Linear scan by identifier.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        find_by_id(&self.products, &id)
    }

    pub fn find_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        find_by_id_mut(&mut self.products, &id)
    }

    /// Persisted shape of every product, in catalog order.
    pub fn to_records(&self) -> Vec<ProductRecord> {
        self.products.iter().map(Product::to_record).collect()
    }
}

impl FromIterator<ProductRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrack_core::Price;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Product::new(ProductId::new(101), "Televizyon", Price::new(1000.0).unwrap(), 5),
            Product::new(ProductId::new(109), "Mouse", Price::new(150.0).unwrap(), 40),
        ])
    }

    #[test]
    fn find_returns_matching_product() {
        let catalog = sample();
        assert_eq!(catalog.find(ProductId::new(109)).map(Product::name), Some("Mouse"));
        assert!(catalog.find(ProductId::new(999)).is_none());
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut catalog = sample();
        if let Some(product) = catalog.find_mut(ProductId::new(101)) {
            product.set_stock(50);
        }
        assert_eq!(catalog.find(ProductId::new(101)).map(Product::stock), Some(50));
    }

    #[test]
    fn records_round_trip_through_collect() {
        let catalog = sample();
        let rebuilt: Catalog = catalog.to_records().into_iter().collect();
        assert_eq!(rebuilt, catalog);
        assert_eq!(rebuilt.len(), 2);
        assert!(Catalog::empty().is_empty());
    }
}
