//! Lumière candle storefront.
//!
//! A single-page Leptos client over `lumiere-commerce`. All view state lives
//! in one [`StorefrontSession`]; components read it through the reactive
//! [`Store`] handle and re-render after every mutation.

mod app;
mod cart_drawer;
pub mod config;
pub mod error;
pub mod icon;
pub mod logging;
pub mod navigation;
mod sections;
pub mod session;
pub mod view_model;

pub use app::{App, Store};
pub use config::StoreConfig;
pub use error::StorefrontError;
pub use navigation::{Navigation, Section};
pub use session::{CartEvent, SessionEvent, StorefrontSession, SubscriptionId};
