//! Cart line items and cart arithmetic.
//!
//! The cart is an ordered collection of line items keyed by product id.
//! Insertion order is preserved for display but carries no meaning. Two
//! invariants hold after every operation:
//!
//! - every quantity is at least 1 (a line that would reach zero is removed
//!   outright via [`Cart::remove_item`], never retained as a zero row)
//! - at most one line item exists per product id (repeated adds accumulate
//!   quantity instead of duplicating the line)
//!
//! Persistence is deliberately not handled here; the storefront crate owns
//! the durable cart record and serializes the whole [`Cart`] after each
//! mutation.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::{Price, ProductId};

/// A product reference paired with a quantity.
///
/// The product fields are snapshotted at add time so the cart can be
/// displayed without consulting the catalog again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Identity key of the line: the product id.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Price contribution of this line: `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The shopping cart: an ordered collection of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the line item for a product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Add one unit of a product.
    ///
    /// If a line item for this product already exists its quantity is
    /// incremented by 1; otherwise a new line with quantity 1 is appended.
    /// This never fails - repeated calls simply accumulate quantity.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartLineItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity: 1,
            });
        }
    }

    /// Set a line item's quantity to an absolute value, clamped to 1.
    ///
    /// This path can never empty a line: a requested quantity of 0 becomes
    /// 1. Use [`Cart::remove_item`] to drop a line entirely. Unknown product
    /// ids are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = quantity.max(1);
        }
    }

    /// Remove a line item outright, regardless of its quantity.
    ///
    /// No-op if the product is not in the cart.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Empty the cart. Invoked after a successful order placement.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all line items, excluding shipping.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Total number of units across all line items (the cart badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn keyboard() -> Product {
        Product {
            id: ProductId::from("p1"),
            name: "Wireless Mechanical Keyboard".to_owned(),
            price: Price::from_cents(12999),
            description: "RGB backlight, tactile brown switches.".to_owned(),
            image: "https://example.com/keyboard.jpg".to_owned(),
        }
    }

    fn headphones() -> Product {
        Product {
            id: ProductId::from("p2"),
            name: "Noise-Cancelling Headphones".to_owned(),
            price: Price::from_cents(24900),
            description: "30-hour battery life.".to_owned(),
            image: "https://example.com/headphones.jpg".to_owned(),
        }
    }

    #[test]
    fn test_add_same_product_accumulates_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());
        cart.add_item(&keyboard());

        assert_eq!(cart.items().len(), 1);
        let item = cart.get(&ProductId::from("p1")).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(cart.subtotal(), Price::from_cents(25998));
    }

    #[test]
    fn test_add_quantity_equals_call_count() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_item(&keyboard());
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(&ProductId::from("p1")).unwrap().quantity, 5);
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());
        cart.add_item(&headphones());
        cart.add_item(&headphones());

        // 129.99 + 2 * 249.00
        assert_eq!(cart.subtotal(), Price::from_cents(62799));
    }

    #[test]
    fn test_remove_changes_subtotal_by_line_contribution() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());
        cart.add_item(&headphones());

        cart.remove_item(&ProductId::from("p2"));
        assert_eq!(cart.subtotal(), Price::from_cents(12999));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());
        cart.remove_item(&ProductId::from("p9"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());

        cart.update_quantity(&ProductId::from("p1"), 0);
        assert_eq!(cart.get(&ProductId::from("p1")).unwrap().quantity, 1);

        cart.update_quantity(&ProductId::from("p1"), 7);
        assert_eq!(cart.get(&ProductId::from("p1")).unwrap().quantity, 7);
    }

    #[test]
    fn test_update_quantity_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.update_quantity(&ProductId::from("p1"), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());
        cart.add_item(&headphones());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());
        cart.add_item(&keyboard());
        cart.add_item(&headphones());
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&headphones());
        cart.add_item(&keyboard());
        cart.add_item(&headphones());

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[test]
    fn test_serde_roundtrip_reproduces_items() {
        let mut cart = Cart::new();
        cart.add_item(&keyboard());
        cart.add_item(&keyboard());
        cart.add_item(&headphones());

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
