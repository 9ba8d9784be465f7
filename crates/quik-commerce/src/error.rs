//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never error: out-of-range quantities are clamped, absent
/// lines are no-ops. Errors are reserved for point lookups, checkout form
/// validation, and checkout step transitions.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Point lookup for an unknown product id.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// A checkout form is missing required fields.
    #[error("missing required fields: {0}")]
    Validation(String),

    /// An order was requested for an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Checkout step machine rejected a transition.
    #[error("invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}
