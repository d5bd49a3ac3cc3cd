//! The nine products the store ships with, addressable by name.

use core::str::FromStr;

use stocktrack_core::{DomainError, ProductId};

/// Well-known catalog entry with a fixed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSelection {
    Television,
    Computer,
    Tablet,
    Phone,
    Watch,
    Headphones,
    Powerbank,
    PlayStation,
    Mouse,
}

impl ProductSelection {
    pub const ALL: [ProductSelection; 9] = [
        ProductSelection::Television,
        ProductSelection::Computer,
        ProductSelection::Tablet,
        ProductSelection::Phone,
        ProductSelection::Watch,
        ProductSelection::Headphones,
        ProductSelection::Powerbank,
        ProductSelection::PlayStation,
        ProductSelection::Mouse,
    ];

    pub fn product_id(self) -> ProductId {
        let raw = match self {
            ProductSelection::Television => 101,
            ProductSelection::Computer => 102,
            ProductSelection::Tablet => 103,
            ProductSelection::Phone => 104,
            ProductSelection::Watch => 105,
            ProductSelection::Headphones => 106,
            ProductSelection::Powerbank => 107,
            ProductSelection::PlayStation => 108,
            ProductSelection::Mouse => 109,
        };
        ProductId::new(raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductSelection::Television => "television",
            ProductSelection::Computer => "computer",
            ProductSelection::Tablet => "tablet",
            ProductSelection::Phone => "phone",
            ProductSelection::Watch => "watch",
            ProductSelection::Headphones => "headphones",
            ProductSelection::Powerbank => "powerbank",
            ProductSelection::PlayStation => "playstation",
            ProductSelection::Mouse => "mouse",
        }
    }

    pub fn from_product_id(id: ProductId) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.product_id() == id)
    }
}

impl core::fmt::Display for ProductSelection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts a name (any case) or one of the fixed numeric identifiers.
impl FromStr for ProductSelection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::missing("product selection"));
        }
        if let Some(found) = Self::ALL
            .into_iter()
            .find(|sel| sel.as_str().eq_ignore_ascii_case(s))
        {
            return Ok(found);
        }
        // Anything that is neither a known name nor a number is no selection.
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::missing("product selection"));
        }
        let id: ProductId = s.parse()?;
        Self::from_product_id(id).ok_or(DomainError::ProductNotFound(id))
    }
}
