//! # Cart State
//!
//! Owns the session's single cart.
//!
//! ## Ownership
//! The session reads one line at a time and runs each command to completion
//! before reading the next, so the cart is owned by value. Nothing else ever
//! holds a reference across commands, and no lock is involved.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Input Line              Command                 Cart State Change      │
//! │  ──────────              ───────                 ─────────────────      │
//! │                                                                         │
//! │  add 1 ─────────────────► add_to_cart() ───────► apply(Add(product))   │
//! │                                                                         │
//! │  inc 1 / dec 1 ─────────► increment_item() ────► apply(Increment(id))  │
//! │                          decrement_item() ────► apply(Decrement(id))   │
//! │                                                                         │
//! │  rm 1 ──────────────────► remove_from_cart() ──► apply(Remove(id))     │
//! │                                                                         │
//! │  clear ─────────────────► clear_cart() ────────► apply(Clear)          │
//! │                                                                         │
//! │  cart ──────────────────► get_cart() ──────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, Utc};
use shopcart_core::{reduce, Cart, CartAction};
use tracing::trace;
use uuid::Uuid;

/// The session's cart plus the identity used in logs.
#[derive(Debug)]
pub struct CartState {
    cart: Cart,
    session_id: Uuid,
    started_at: DateTime<Utc>,
}

impl CartState {
    /// Creates an empty cart for a new session.
    pub fn new() -> Self {
        CartState {
            cart: Cart::new(),
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    /// Runs `action` through the reducer and stores the result.
    pub fn apply(&mut self, action: CartAction) -> &Cart {
        trace!(session_id = %self.session_id, action = action.name(), "applying cart action");
        let current = std::mem::take(&mut self.cart);
        self.cart = reduce(current, action);
        &self.cart
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.started_at
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
