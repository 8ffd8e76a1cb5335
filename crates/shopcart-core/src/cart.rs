//! # Cart Reducer
//!
//! The shopping cart and the operations that move it from one state to the
//! next.
//!
//! ## Ownership Model
//! Every operation takes the cart **by value** and returns the next cart.
//! The previous value is moved away, so the update is observably immutable
//! while the item vector is reused in place.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Action                  Effect on items                               │
//! │  ──────                  ───────────────                               │
//! │                                                                         │
//! │  add(product) ─────────► present?  quantity += 1 (position kept)       │
//! │                          absent?   push(LineItem { quantity: 1 })      │
//! │                                                                         │
//! │  increment(id) ────────► quantity += 1        (absent: no-op)          │
//! │                                                                         │
//! │  decrement(id) ────────► quantity -= 1        (absent: no-op)          │
//! │                          reaches 0? line removed                       │
//! │                                                                         │
//! │  remove(id) ───────────► line removed         (absent: no-op)          │
//! │                                                                         │
//! │  clear() ──────────────► items emptied                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has `quantity >= 1`
//! - Lines keep insertion order; no operation reorders survivors

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Line Item
// =============================================================================

/// A product in the cart together with how many units were picked.
///
/// The product fields are copied into the line when it is created, so the
/// line renders the same way for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    /// Always `>= 1` while the line is in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The ordered set of line items for one session.
///
/// The item list is private so the invariants above can only be changed
/// through the reducer operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of `product`.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Money, Product};
    ///
    /// let mouse = Product::new(3, "Mouse gamer", Money::new(95_000));
    /// let cart = Cart::new().add(&mouse).add(&mouse);
    ///
    /// assert_eq!(cart.len(), 1);
    /// assert_eq!(cart.items()[0].quantity, 2);
    /// ```
    pub fn add(mut self, product: &Product) -> Self {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(LineItem::from_product(product)),
        }
        self
    }

    /// Adds one unit to the line for `id`. Unknown ids are ignored.
    pub fn increment(mut self, id: ProductId) -> Self {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        }
        self
    }

    /// Takes one unit off the line for `id`, dropping the line when it
    /// reaches zero. Unknown ids are ignored.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Money, Product, ProductId};
    ///
    /// let monitor = Product::new(4, "Monitor 24 pulgadas", Money::new(680_000));
    /// let cart = Cart::new().add(&monitor).decrement(ProductId::new(4));
    ///
    /// assert!(cart.is_empty());
    /// ```
    pub fn decrement(mut self, id: ProductId) -> Self {
        if let Some(index) = self.position(id) {
            let item = &mut self.items[index];
            if item.quantity > 1 {
                item.quantity -= 1;
            } else {
                self.items.remove(index);
            }
        }
        self
    }

    /// Drops the line for `id` whatever its quantity. Unknown ids are ignored.
    pub fn remove(mut self, id: ProductId) -> Self {
        self.items.retain(|item| item.id != id);
        self
    }

    /// Drops every line.
    pub fn clear(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `unit_price × quantity` across all lines.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up the line for `id`.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A single user intent against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(Product),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Clear,
}

impl CartAction {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add",
            CartAction::Increment(_) => "increment",
            CartAction::Decrement(_) => "decrement",
            CartAction::Remove(_) => "remove",
            CartAction::Clear => "clear",
        }
    }
}

/// Applies `action` to `cart` and returns the next cart.
///
/// ## Example
/// ```rust
/// use shopcart_core::{reduce, Cart, CartAction, Money, Product, ProductId};
///
/// let headphones = Product::new(1, "Auriculares inalámbricos", Money::new(120_000));
///
/// let cart = [
///     CartAction::Add(headphones.clone()),
///     CartAction::Add(headphones),
///     CartAction::Decrement(ProductId::new(1)),
/// ]
/// .into_iter()
/// .fold(Cart::new(), reduce);
///
/// assert_eq!(cart.total_items(), 1);
/// assert_eq!(cart.total_price(), Money::new(120_000));
/// ```
pub fn reduce(cart: Cart, action: CartAction) -> Cart {
    match action {
        CartAction::Add(product) => cart.add(&product),
        CartAction::Increment(id) => cart.increment(id),
        CartAction::Decrement(id) => cart.decrement(id),
        CartAction::Remove(id) => cart.remove(id),
        CartAction::Clear => cart.clear(),
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Cart totals summary for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: u64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.len(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(price))
    }

    fn ids(cart: &Cart) -> Vec<u32> {
        cart.items().iter().map(|item| item.id.get()).collect()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let p = product(1, 999);
        let cart = Cart::new().add(&p).add(&p);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_add_appends_new_products_in_order() {
        let cart = Cart::new()
            .add(&product(3, 10))
            .add(&product(1, 10))
            .add(&product(2, 10));
        assert_eq!(ids(&cart), vec![3, 1, 2]);
    }

    #[test]
    fn test_add_existing_keeps_position() {
        let a = product(1, 10);
        let b = product(2, 10);
        let cart = Cart::new().add(&a).add(&b).add(&a);

        assert_eq!(ids(&cart), vec![1, 2]);
        assert_eq!(cart.get(ProductId::new(1)).map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_decrement_quantity_one_removes_line() {
        let cart = Cart::new()
            .add(&product(1, 10))
            .decrement(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_and_decrement_preserve_order() {
        let cart = Cart::new()
            .add(&product(1, 10))
            .add(&product(2, 10))
            .add(&product(3, 10))
            .increment(ProductId::new(2))
            .increment(ProductId::new(1))
            .decrement(ProductId::new(2));

        assert_eq!(ids(&cart), vec![1, 2, 3]);
        assert_eq!(cart.get(ProductId::new(1)).map(|i| i.quantity), Some(2));
        assert_eq!(cart.get(ProductId::new(2)).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_decrement_removal_keeps_neighbours_in_order() {
        let cart = Cart::new()
            .add(&product(1, 10))
            .add(&product(2, 10))
            .add(&product(3, 10))
            .decrement(ProductId::new(2));
        assert_eq!(ids(&cart), vec![1, 3]);
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let cart = Cart::new().add(&product(1, 10));
        let before = cart.clone();

        let after = cart
            .increment(ProductId::new(9))
            .decrement(ProductId::new(9))
            .remove(ProductId::new(9));
        assert_eq!(after, before);

        let empty = Cart::new().decrement(ProductId::new(1));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let p = product(1, 10);
        let cart = Cart::new().add(&p).add(&p).add(&p).remove(p.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_then_add_starts_at_one() {
        let p = product(1, 10);
        let cart = Cart::new().add(&p).add(&p).remove(p.id).add(&p);
        assert_eq!(cart.get(p.id).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new()
            .add(&product(1, 120_000))
            .add(&product(2, 180_000))
            .add(&product(2, 180_000))
            .add(&product(3, 95_000));

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Money::new(120_000 + 2 * 180_000 + 95_000));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 3);
        assert_eq!(totals.total_items, 4);
        assert_eq!(totals.total_price, cart.total_price());
    }

    #[test]
    fn test_line_total() {
        let p = product(1, 95_000);
        let cart = Cart::new().add(&p).increment(p.id).increment(p.id);
        assert_eq!(cart.items()[0].line_total(), Money::new(285_000));
    }

    #[test]
    fn test_walkthrough() {
        let p = product(1, 120_000);

        let cart = Cart::new().add(&p);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), Money::new(120_000));

        let cart = cart.add(&p);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::new(240_000));

        let cart = cart.decrement(p.id);
        assert_eq!(cart.total_items(), 1);

        let cart = cart.decrement(p.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_reduce_matches_methods() {
        let a = product(1, 10);
        let b = product(2, 20);
        let actions = vec![
            CartAction::Add(a.clone()),
            CartAction::Add(b.clone()),
            CartAction::Increment(a.id),
            CartAction::Remove(b.id),
            CartAction::Decrement(a.id),
        ];

        let reduced = actions.into_iter().fold(Cart::new(), reduce);
        let direct = Cart::new()
            .add(&a)
            .add(&b)
            .increment(a.id)
            .remove(b.id)
            .decrement(a.id);
        assert_eq!(reduced, direct);
        assert_eq!(reduce(reduced, CartAction::Clear), Cart::new());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(CartAction::Clear.name(), "clear");
        assert_eq!(CartAction::Decrement(ProductId::new(1)).name(), "decrement");
    }

    #[test]
    fn test_serialized_shape() {
        let cart = Cart::new().add(&product(1, 10));
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["items"][0]["unitPrice"], 10);
        assert_eq!(json["items"][0]["quantity"], 1);
    }
}
