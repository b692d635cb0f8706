//! Symbolic icon names and their glyphs.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// An icon the storefront can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    ShoppingBag,
    Plus,
    Minus,
    X,
    Truck,
    MapPin,
    Package,
    Mail,
    Phone,
    Instagram,
    Facebook,
}

impl IconName {
    pub fn key(&self) -> &'static str {
        match self {
            IconName::ShoppingBag => "shopping-bag",
            IconName::Plus => "plus",
            IconName::Minus => "minus",
            IconName::X => "x",
            IconName::Truck => "truck",
            IconName::MapPin => "map-pin",
            IconName::Package => "package",
            IconName::Mail => "mail",
            IconName::Phone => "phone",
            IconName::Instagram => "instagram",
            IconName::Facebook => "facebook",
        }
    }

    /// Text glyph drawn for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconName::ShoppingBag => "\u{1f6cd}",
            IconName::Plus => "+",
            IconName::Minus => "\u{2212}",
            IconName::X => "\u{2715}",
            IconName::Truck => "\u{1f69a}",
            IconName::MapPin => "\u{1f4cd}",
            IconName::Package => "\u{1f4e6}",
            IconName::Mail => "\u{2709}",
            IconName::Phone => "\u{260e}",
            IconName::Instagram => "\u{25ce}",
            IconName::Facebook => "f",
        }
    }
}

/// Inline icon.
#[component]
pub fn Icon(name: IconName, #[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <span
            class="icon"
            data-icon=name.key()
            aria-hidden="true"
            style=format!("font-size: {size}px; line-height: 1;")
        >
            {name.glyph()}
        </span>
    }
}
