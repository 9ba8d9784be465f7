//! Shopping cart module.
//!
//! Contains the line collection, its invariants, and the observable
//! container the composition root hands to consumers.

mod cart;
mod store;

pub use cart::{Cart, CartLine};
pub use store::CartStore;
