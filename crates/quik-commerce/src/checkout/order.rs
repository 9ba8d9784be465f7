//! Order types.

use crate::cart::Cart;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use crate::pricing::{CartPricing, PricingPolicy};
use serde::{Deserialize, Serialize};

/// A line captured on a placed order.
///
/// Denormalized from the cart so the order is self-contained even if the
/// catalog changes later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Product name at order time.
    pub name: String,
    /// Unit price at order time.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: u32,
    /// Line total.
    pub line_total: Money,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-facing order number (e.g., "QS004217").
    pub number: String,
    /// Customer email from the shipping form.
    pub email: String,
    /// Ordered lines.
    pub lines: Vec<OrderLine>,
    /// Totals at order time.
    pub totals: CartPricing,
    /// Unix timestamp when the order was placed.
    pub placed_at: i64,
}

impl Order {
    /// Capture an order from the cart under the given pricing policy.
    pub fn from_cart(cart: &Cart, policy: &PricingPolicy, email: impl Into<String>) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                unit_price: line.unit_price(),
                quantity: line.quantity,
                line_total: line.line_total(),
            })
            .collect();

        Self {
            id: OrderId::generate(),
            number: order_number(),
            email: email.into(),
            lines,
            totals: policy.quote(cart),
            placed_at: current_timestamp(),
        }
    }

    /// Total item count across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }
}

/// Generate a "QS" order number with six digits.
fn order_number() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("QS{:06}", (timestamp as u64 ^ counter.rotate_left(20)) % 1_000_000)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Currency;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(
            &Product::new("1", "Yoga Mat", Money::new(3999, Currency::USD), "sports", 15),
            2,
        );
        cart
    }

    #[test]
    fn test_order_snapshots_cart() {
        let order = Order::from_cart(&cart(), &PricingPolicy::default(), "user@example.com");

        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].name, "Yoga Mat");
        assert_eq!(order.lines[0].line_total.amount_cents, 7998);
        assert_eq!(order.total_items(), 2);
        assert_eq!(order.totals.subtotal.amount_cents, 7998);
        assert_eq!(order.email, "user@example.com");
    }

    #[test]
    fn test_order_number_format() {
        let order = Order::from_cart(&cart(), &PricingPolicy::default(), "user@example.com");
        assert_eq!(order.number.len(), 8);
        assert!(order.number.starts_with("QS"));
        assert!(order.number[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_order_numbers_vary() {
        let policy = PricingPolicy::default();
        let a = Order::from_cart(&cart(), &policy, "a@example.com");
        let b = Order::from_cart(&cart(), &policy, "b@example.com");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_order_round_trips_as_json() {
        let order = Order::from_cart(&cart(), &PricingPolicy::default(), "user@example.com");
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
