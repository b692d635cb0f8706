//! Shopping cart module.
//!
//! Contains the cart store, its line items and the pricing snapshot.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem};
pub use pricing::{CartPricing, LineItemPricing};
