//! Browser entry point.

use anyhow::Context;
use leptos::prelude::*;
use lumiere_storefront::{logging, App, StoreConfig, StorefrontSession};

fn main() {
    console_error_panic_hook::set_once();

    let config = StoreConfig::embedded()
        .context("embedded store.toml is invalid, using defaults")
        .unwrap_or_else(|e| {
            leptos::logging::error!("{e:#}");
            StoreConfig::default()
        });

    if let Err(e) = logging::init(&config.logging.filter).context("console logging disabled") {
        leptos::logging::warn!("{e:#}");
    }

    let session = StorefrontSession::default();
    tracing::info!(brand = %config.brand.name, "mounting storefront");
    leptos::mount::mount_to_body(move || view! { <App config=config session=session/> });
}
