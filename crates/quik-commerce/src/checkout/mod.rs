//! Checkout module.
//!
//! Contains the checkout wizard, its forms, and orders.

mod details;
mod flow;
mod order;

pub use details::{BillingDetails, CardDetails, PaymentMethod, ShippingDetails};
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{Order, OrderLine};
