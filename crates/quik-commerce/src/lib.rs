//! Commerce domain types and logic for the QuikShop storefront core.
//!
//! This crate is the headless half of the storefront: everything the view
//! layer renders but none of the rendering.
//!
//! - **Catalog**: the static product set and its query operations
//! - **Cart**: the line collection, its invariants, derived totals, and
//!   the observable container
//! - **Pricing**: the single tax/shipping policy shared by cart and
//!   checkout
//! - **Search**: browse filters and sorting over the catalog
//! - **Checkout**: the linear wizard from shipping form to placed order
//!
//! # Example
//!
//! ```rust
//! use quik_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let phone = catalog.get(&ProductId::new("1")).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add_item(phone, 1);
//!
//! let quote = PricingPolicy::default().quote(cart.cart());
//! assert_eq!(quote.grand_total.amount_cents, 99999 + 8000);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod pricing;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, ALL_CATEGORY};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartStore};

    // Pricing
    pub use crate::pricing::{CartPricing, LinePricing, PricingPolicy};

    // Search
    pub use crate::search::{Filter, ProductQuery, SortOption};

    // Checkout
    pub use crate::checkout::{
        BillingDetails, CardDetails, CheckoutFlow, CheckoutStep, Order, OrderLine,
        PaymentMethod, ShippingDetails,
    };
}
