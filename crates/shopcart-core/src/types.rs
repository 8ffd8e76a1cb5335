//! # Domain Types
//!
//! Catalog entries offered to the shopper.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │        │    LineItem     │  (cart.rs)             │
//! │  │  ─────────────  │ add ─► │  ─────────────  │                        │
//! │  │  id (u32)       │        │  id             │                        │
//! │  │  name           │        │  name           │                        │
//! │  │  price (Money)  │        │  unit_price     │                        │
//! │  └─────────────────┘        │  quantity ≥ 1   │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable identifier of a catalog product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

/// Parses an id typed by the user (surrounding whitespace is ignored).
///
/// ## Example
/// ```rust
/// use shopcart_core::ProductId;
///
/// assert_eq!(" 3 ".parse::<ProductId>().unwrap(), ProductId::new(3));
/// assert!("three".parse::<ProductId>().is_err());
/// ```
impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "product id".to_string(),
            });
        }

        s.parse::<u32>()
            .map(ProductId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "product id".to_string(),
                reason: format!("'{}' is not a non-negative integer", s),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Display name shown in the catalog and the cart.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: Money,
}

impl Product {
    /// Creates a product. Field rules are checked when the product is put
    /// into a [`Catalog`](crate::catalog::Catalog).
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId(id),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
