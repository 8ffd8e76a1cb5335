//! # Cart Commands
//!
//! Commands that read or change the session cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart     ┌──────────┐                           │
//! │  │  Empty   │──────────────────►│ In Cart  │◄──┐ increment_item        │
//! │  │  Cart    │                   │          │───┘ decrement_item (q > 1)│
//! │  └──────────┘◄──────────────────└──────────┘                           │
//! │        ▲      last line removed /     │                                 │
//! │        │      clear_cart              │                                 │
//! │        └──────── session end ◄────────┘   (cart discarded)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add_to_cart` can fail, because it needs a catalog lookup. The other
//! commands accept any id and leave the cart untouched when it is absent.

use serde::Serialize;
use shopcart_core::{Cart, CartAction, CartTotals, Catalog, LineItem, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartState;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart.cart())
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases, line keeps its position
/// - Product not in cart: appended with quantity 1
/// - Id not in catalog: `NOT_FOUND`, cart unchanged
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &mut CartState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.require(product_id)?.clone();
    Ok(CartResponse::from(cart.apply(CartAction::Add(product))))
}

/// Adds one unit to an existing line.
pub fn increment_item(cart: &mut CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "increment_item command");
    CartResponse::from(cart.apply(CartAction::Increment(product_id)))
}

/// Takes one unit off a line; the line disappears at zero.
pub fn decrement_item(cart: &mut CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "decrement_item command");
    CartResponse::from(cart.apply(CartAction::Decrement(product_id)))
}

/// Removes a line regardless of its quantity.
pub fn remove_from_cart(cart: &mut CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    CartResponse::from(cart.apply(CartAction::Remove(product_id)))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &mut CartState) -> CartResponse {
    debug!("clear_cart command");
    CartResponse::from(cart.apply(CartAction::Clear))
}
