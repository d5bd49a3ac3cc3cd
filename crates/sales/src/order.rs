use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use stocktrack_core::{Entity, OrderId, Price, ProductId};
use stocktrack_products::Product;

/// `strftime` pattern of the persisted order date, e.g. `05 March 2024, 14:07`.
pub const ORDER_DATE_FORMAT: &str = "%d %B %Y, %H:%M";

/// An order for some quantity of one product.
///
/// Borrows the catalog product it was placed against, so the total is always
/// computed from the live unit price. Orders are transient: they exist only
/// long enough to be recorded in the order log.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    id: OrderId,
    product: &'a Product,
    quantity: u32,
    created_at: DateTime<Local>,
}

impl<'a> Order<'a> {
    /// Create an order stamped with the current local time.
    ///
    /// Stock is neither checked nor touched here.
    pub fn new(id: OrderId, product: &'a Product, quantity: u32) -> Self {
        Self::with_created_at(id, product, quantity, Local::now())
    }

    /// Create an order with an explicit creation time.
    pub fn with_created_at<Tz: TimeZone>(
        id: OrderId,
        product: &'a Product,
        quantity: u32,
        created_at: DateTime<Tz>,
    ) -> Self {
        Self {
            id,
            product,
            quantity,
            created_at: created_at.with_timezone(&Local),
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Unit price of the referenced product times quantity, computed per call.
    pub fn total_price(&self) -> Price {
        self.product.price().times(self.quantity)
    }

    /// Persisted shape of this order.
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            order_id: self.id,
            product_id: self.product.id_typed(),
            quantity: self.quantity,
            total_price: self.total_price(),
            placed_at: self.created_at.format(ORDER_DATE_FORMAT).to_string(),
        }
    }
}

impl Entity for Order<'_> {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One entry of the order log file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "siparis_id")]
    pub order_id: OrderId,
    #[serde(rename = "urun_id")]
    pub product_id: ProductId,
    #[serde(rename = "adet")]
    pub quantity: u32,
    #[serde(rename = "toplam_fiyat")]
    pub total_price: Price,
    #[serde(rename = "Siparis Tarih")]
    pub placed_at: String,
}

impl Entity for OrderRecord {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}

impl From<&Order<'_>> for OrderRecord {
    fn from(order: &Order<'_>) -> Self {
        order.to_record()
    }
}
