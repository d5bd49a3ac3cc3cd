//! Value object trait: equality by value, not identity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Monetary amount in currency units (e.g. Turkish lira).
///
/// Persisted as a bare JSON number. Integral amounts are written without a
/// fractional part so `1000` stays `1000` after a load/save cycle.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Build a price; `None` for negative, NaN or infinite amounts.
    pub fn new(amount: f64) -> Option<Self> {
        (amount.is_finite() && amount >= 0.0).then_some(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Unit price times a quantity.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0 * f64::from(quantity))
    }

    fn as_whole(self) -> Option<i64> {
        // 2^53: beyond this f64 no longer represents every integer.
        const EXACT: f64 = 9_007_199_254_740_992.0;
        (self.0.fract() == 0.0 && self.0 <= EXACT).then_some(self.0 as i64)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_whole() {
            Some(whole) => write!(f, "{whole}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::new(amount).ok_or_else(|| {
            serde::de::Error::custom(format!("price must be a non-negative number, got {amount}"))
        })
    }
}
