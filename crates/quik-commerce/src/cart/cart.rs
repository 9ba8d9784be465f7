//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One product-and-quantity entry in the cart.
///
/// Holds a snapshot of the product taken at add time; quantity stays in
/// `[1, stock]` for as long as the line exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Units of the product in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price of the line's product.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_mul(i64::from(self.quantity))
    }
}

/// The shopping cart: an ordered collection of [`CartLine`]s.
///
/// Lines keep insertion order (first added first) and there is at most one
/// line per product id. Mutations never fail: out-of-range quantities are
/// clamped to the product's stock, operations on absent lines are no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product, if present.
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == id)
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line grows by `quantity`; a new line is appended at the
    /// end. Either way the resulting quantity is silently clamped to the
    /// product's stock (and to at least 1 for a new line). Returns the
    /// effective line quantity after the operation — 0 means the product
    /// is out of stock and nothing was added — so callers can detect
    /// clamping without an error path.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> u32 {
        if product.stock == 0 {
            debug!(id = %product.id, "ignoring add of out-of-stock product");
            return 0;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let requested = line.quantity.saturating_add(quantity);
            line.quantity = requested.min(product.stock);
            if line.quantity < requested {
                debug!(id = %product.id, clamped_to = line.quantity, "quantity clamped to stock");
            }
            return line.quantity;
        }

        let quantity = quantity.clamp(1, product.stock);
        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        quantity
    }

    /// Set the quantity of the line for `id`.
    ///
    /// `0` removes the line entirely; any other value is clamped to
    /// `[1, stock]`. Returns `false` (a no-op, not an error) when no line
    /// with that product id exists.
    pub fn update_quantity(&mut self, id: &ProductId, new_quantity: u32) -> bool {
        if new_quantity == 0 {
            return self.remove_item(id);
        }

        match self.lines.iter_mut().find(|l| &l.product.id == id) {
            Some(line) => {
                line.quantity = new_quantity.clamp(1, line.product.stock);
                true
            }
            None => false,
        }
    }

    /// Remove the line for `id`. Returns `false` when it was not present.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product.id != id);
        self.lines.len() < before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count: the sum of all line quantities.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Total price: the sum of quantity × unit price across all lines,
    /// computed in integer minor units.
    pub fn total_price(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map(|l| l.product.price.currency)
            .unwrap_or_default();
        self.lines.iter().fold(Money::zero(currency), |acc, l| {
            acc.saturating_add_cents(l.line_total().amount_cents)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str, cents: i64, stock: u32) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(cents, Currency::USD), "test", stock)
    }

    #[test]
    fn test_add_new_line_appends() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 10), 2);
        cart.add_item(&product("2", 2000, 10), 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product.id.as_str(), "1");
        assert_eq!(cart.lines()[1].product.id.as_str(), "2");
    }

    #[test]
    fn test_add_existing_line_merges() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 10);
        cart.add_item(&p, 1);
        cart.add_item(&p, 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_no_duplicate_lines_under_any_sequence() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 5);

        cart.add_item(&p, 1);
        cart.update_quantity(&p.id, 4);
        cart.add_item(&p, 2);
        cart.remove_item(&p.id);
        cart.add_item(&p, 1);
        cart.add_item(&p, 1);

        let matching = cart.lines().iter().filter(|l| l.product.id == p.id).count();
        assert_eq!(matching, 1);
    }

    #[test]
    fn test_add_clamps_to_stock() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 3);

        let effective = cart.add_item(&p, 5);
        assert_eq!(effective, 3);
        assert_eq!(cart.line(&p.id).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_merge_clamps_to_stock() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 3);

        cart.add_item(&p, 2);
        let effective = cart.add_item(&p, 2);
        assert_eq!(effective, 3);
    }

    #[test]
    fn test_add_zero_quantity_becomes_one() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 10);

        let effective = cart.add_item(&p, 0);
        assert_eq!(effective, 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_add_out_of_stock_is_noop() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 0);

        assert_eq!(cart.add_item(&p, 1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let p = product("1", 1000, 10);

        let mut via_update = Cart::new();
        via_update.add_item(&p, 2);
        via_update.update_quantity(&p.id, 0);

        let mut via_remove = Cart::new();
        via_remove.add_item(&p, 2);
        via_remove.remove_item(&p.id);

        assert_eq!(via_update, via_remove);
        assert!(via_update.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 4);
        cart.add_item(&p, 1);

        cart.update_quantity(&p.id, 99);
        assert_eq!(cart.line(&p.id).unwrap().quantity, 4);
    }

    #[test]
    fn test_update_absent_line_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(&ProductId::new("ghost"), 2));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_track_lines() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 10), 2);
        cart.add_item(&product("2", 2500, 10), 3);

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price().amount_cents, 2 * 1000 + 3 * 2500);
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 1000, 10), 2);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    /// The walk-through from the storefront: $10.00 product, stock 3.
    #[test]
    fn test_reference_scenario() {
        let mut cart = Cart::new();
        let p = product("1", 1000, 3);

        assert_eq!(cart.add_item(&p, 5), 3);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().amount_cents, 3000);

        cart.update_quantity(&p.id, 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().amount_cents, 1000);

        cart.remove_item(&p.id);
        assert!(cart.is_empty());
    }
}
