//! Observable cart container.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::ids::ProductId;
use std::fmt;

type Watcher = Box<dyn Fn(&Cart)>;

/// The cart state container the composition root owns and injects into
/// consumers.
///
/// Wraps a [`Cart`] with an explicit subscribe/notify contract: every
/// subscriber is called after each state-changing operation, always with
/// the fully-applied cart — never a partially-updated one. Operations that
/// change nothing (no-ops on absent lines, out-of-stock adds, clearing an
/// empty cart) do not notify.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    watchers: Vec<Watcher>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Register a subscriber invoked after every cart mutation.
    pub fn subscribe(&mut self, watcher: impl Fn(&Cart) + 'static) {
        self.watchers.push(Box::new(watcher));
    }

    /// Add units of a product; see [`Cart::add_item`].
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> u32 {
        let effective = self.cart.add_item(product, quantity);
        if effective > 0 {
            self.notify();
        }
        effective
    }

    /// Set a line's quantity; see [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, id: &ProductId, new_quantity: u32) -> bool {
        let changed = self.cart.update_quantity(id, new_quantity);
        if changed {
            self.notify();
        }
        changed
    }

    /// Remove a line; see [`Cart::remove_item`].
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove_item(id);
        if removed {
            self.notify();
        }
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if self.cart.is_empty() {
            return;
        }
        self.cart.clear();
        self.notify();
    }

    fn notify(&self) {
        for watcher in &self.watchers {
            watcher(&self.cart);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}
