//! Page sections, one per navigation target.

mod about;
mod catalog;
mod contact;
mod delivery;
mod home;
mod product_card;

pub use about::*;
pub use catalog::*;
pub use contact::*;
pub use delivery::*;
pub use home::*;
pub use product_card::*;
