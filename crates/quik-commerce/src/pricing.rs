//! Pricing policy: the one place tax and shipping are computed.
//!
//! Both the cart summary and the checkout review consume the same quote,
//! so the two can never drift apart.

use crate::cart::Cart;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Storefront pricing rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Sales tax rate in basis points (800 = 8%).
    pub tax_rate_bps: u32,
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Money,
    /// Flat shipping charge below the threshold.
    pub flat_shipping: Money,
}

impl Default for PricingPolicy {
    /// The QuikShop defaults: 8% tax, free shipping over $50.00,
    /// $4.99 flat otherwise.
    fn default() -> Self {
        Self {
            tax_rate_bps: 800,
            free_shipping_threshold: Money::from_major(50.0, Currency::USD),
            flat_shipping: Money::from_major(4.99, Currency::USD),
        }
    }
}

impl PricingPolicy {
    /// Shipping charge for a subtotal: free strictly above the threshold.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.amount_cents > self.free_shipping_threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            Money::new(self.flat_shipping.amount_cents, subtotal.currency)
        }
    }

    /// Tax on a subtotal, computed in minor units with half-up rounding.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        let cents = (subtotal.amount_cents.saturating_mul(i64::from(self.tax_rate_bps))
            + 5_000)
            / 10_000;
        Money::new(cents, subtotal.currency)
    }

    /// Full pricing breakdown for a cart.
    ///
    /// An empty cart quotes to all-zero — there is nothing to ship or tax.
    pub fn quote(&self, cart: &Cart) -> CartPricing {
        let subtotal = cart.total_price();

        if cart.is_empty() {
            return CartPricing {
                subtotal,
                shipping_total: Money::zero(subtotal.currency),
                tax_total: Money::zero(subtotal.currency),
                grand_total: Money::zero(subtotal.currency),
                line_items: Vec::new(),
            };
        }

        let shipping_total = self.shipping_for(subtotal);
        let tax_total = self.tax_for(subtotal);
        let grand_total = subtotal
            .saturating_add_cents(shipping_total.amount_cents)
            .saturating_add_cents(tax_total.amount_cents);

        let line_items = cart
            .lines()
            .iter()
            .map(|line| LinePricing {
                product_id: line.product.id.clone(),
                unit_price: line.unit_price(),
                quantity: line.quantity,
                line_total: line.line_total(),
            })
            .collect();

        CartPricing {
            subtotal,
            shipping_total,
            tax_total,
            grand_total,
            line_items,
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals before shipping and tax.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping_total: Money,
    /// Tax amount.
    pub tax_total: Money,
    /// Final total (subtotal + shipping + tax).
    pub grand_total: Money,
    /// Per-line breakdown.
    pub line_items: Vec<LinePricing>,
}

impl CartPricing {
    /// Check if the quote qualified for free shipping.
    pub fn free_shipping(&self) -> bool {
        self.shipping_total.is_zero() && !self.subtotal.is_zero()
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Line total (unit price × quantity).
    pub line_total: Money,
}
