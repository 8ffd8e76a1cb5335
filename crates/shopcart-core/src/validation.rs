//! # Validation Module
//!
//! Field checks for products entering a catalog.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction (THIS MODULE)                           │
//! │  ├── name present and short enough                                     │
//! │  └── price non-negative                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Host command parsing                                         │
//! │  └── product id is a number (ProductId::from_str)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cart reducer: no validation, every input is accepted                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Mouse gamer").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use shopcart_core::money::Money;
/// use shopcart_core::validation::validate_price;
///
/// assert!(validate_price(Money::new(0)).is_ok());
/// assert!(validate_price(Money::new(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Monitor 24 pulgadas").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_PRODUCT_NAME_LEN)).is_ok());
        assert!(validate_product_name(&"A".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // "á" is two bytes in UTF-8
        assert!(validate_product_name(&"á".repeat(MAX_PRODUCT_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::new(0)).is_ok());
        assert!(validate_price(Money::new(120_000)).is_ok());
        assert!(validate_price(Money::new(-100)).is_err());
    }

    #[test]
    fn test_validate_product() {
        let ok = Product::new(1, "Mouse gamer", Money::new(95_000));
        assert!(validate_product(&ok).is_ok());

        let unnamed = Product::new(1, " ", Money::new(95_000));
        assert_eq!(
            validate_product(&unnamed),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }
}
