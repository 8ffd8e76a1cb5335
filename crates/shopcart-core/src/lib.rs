//! # shopcart-core: Pure Cart Logic
//!
//! This crate holds everything the shopping cart *means*: products, money,
//! line items and the reducer that turns one cart into the next. It never
//! touches I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shopcart-cli (host)                          │   │
//! │  │    stdin line ──► Command ──► CartState ──► text / JSON view    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartAction                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │ ProductId │  │           │  │ LineItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog entries (`Product`, `ProductId`)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart reducer (`Cart`, `LineItem`, `CartAction`)
//! - [`catalog`] - The fixed product list offered in a session
//! - [`error`] - Domain error types
//! - [`validation`] - Product field checks
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, Catalog, ProductId};
//!
//! let catalog = Catalog::default();
//! let headphones = catalog.get(ProductId::new(1)).unwrap();
//!
//! let cart = Cart::new().add(headphones).add(headphones);
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().amount(), 240_000);
//!
//! let cart = cart.decrement(ProductId::new(1)).decrement(ProductId::new(1));
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{reduce, Cart, CartAction, CartTotals, LineItem};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product display name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
