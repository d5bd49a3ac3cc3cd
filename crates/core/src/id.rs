//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are the plain integers stored in the JSON files; the newtypes
//! keep a product id from being passed where an order id is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product (stable key, e.g. `101`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of an order, unique across the order log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

/// Parse an unsigned decimal made of ASCII digits only.
///
/// Signs, whitespace and separators are rejected, as is any value that does
/// not fit in a `u32`.
pub fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_digits(s)
                    .map(Self)
                    .ok_or_else(|| DomainError::non_numeric($name))
            }
        }
    };
}

impl_int_newtype!(ProductId, "product id");
impl_int_newtype!(OrderId, "order id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!("101".parse::<ProductId>().unwrap(), ProductId::new(101));
        assert_eq!("0007".parse::<OrderId>().unwrap(), OrderId::new(7));
    }

    #[test]
    fn rejects_signs_spaces_and_decimals() {
        for raw in ["", "-1", "+1", " 1", "1.0", "1e3", "abc", "١٢"] {
            let err = raw.parse::<ProductId>().unwrap_err();
            assert_eq!(err, DomainError::non_numeric("product id"), "input {raw:?}");
        }
    }

    #[test]
    fn rejects_values_that_overflow() {
        assert!("4294967296".parse::<OrderId>().is_err());
        assert_eq!(parse_digits("4294967295"), Some(u32::MAX));
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProductId::new(104)).unwrap();
        assert_eq!(json, "104");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProductId::new(104));
    }
}
