//! # Catalog
//!
//! The fixed list of products offered during a session. The catalog is
//! built once at startup and never changes afterwards.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

/// A validated, ordered product list.
///
/// ## Invariants
/// - Product ids are unique
/// - Every product passes [`validate_product`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid products and duplicate ids.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Catalog, Money, Product};
    ///
    /// let ok = Catalog::new(vec![Product::new(7, "Cable HDMI", Money::new(25_000))]);
    /// assert!(ok.is_ok());
    ///
    /// let dup = Catalog::new(vec![
    ///     Product::new(7, "Cable HDMI", Money::new(25_000)),
    ///     Product::new(7, "Cable USB", Money::new(15_000)),
    /// ]);
    /// assert!(dup.is_err());
    /// ```
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;

            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Looks up a product by id, failing with [`CoreError::ProductNotFound`].
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The store's standard assortment.
impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            products: vec![
                Product::new(1, "Auriculares inalámbricos", Money::new(120_000)),
                Product::new(2, "Teclado mecánico", Money::new(180_000)),
                Product::new(3, "Mouse gamer", Money::new(95_000)),
                Product::new(4, "Monitor 24 pulgadas", Money::new(680_000)),
            ],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
