//! Commerce domain types for the Lumière storefront.
//!
//! This crate is framework-free and holds everything the storefront view
//! needs to reason about what is for sale and what the visitor intends to buy:
//!
//! - **Catalog**: the immutable, ordered candle collection and its scent tabs
//! - **Cart**: line items with merge-on-duplicate semantics and pricing
//! - **Money**: whole-rouble amounts with checked arithmetic
//!
//! # Example
//!
//! ```rust
//! use lumiere_commerce::prelude::*;
//!
//! let catalog = Catalog::lumiere();
//! let noir = catalog.get(ProductId::new(1)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(noir);
//! cart.add(noir);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), Money::rub(9000));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogTab, Product, ScentFamily};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineItemPricing};
}
