//! Catalog section: scent-family tabs over the full collection.

use leptos::prelude::*;
use lumiere_commerce::prelude::CatalogTab;

use super::ProductCard;
use crate::app::Store;
use crate::config::CatalogCopy;
use crate::view_model::ProductCardView;

#[component]
pub fn CatalogSection(store: Store, copy: CatalogCopy) -> impl IntoView {
    let selected = Memo::new(move |_| store.read(|s| s.catalog_tab()));
    let CatalogCopy {
        title,
        add_to_cart,
        empty_tab,
    } = copy;

    let listing = move || {
        selected.track();
        let products: Vec<ProductCardView> = store.read_untracked(|s| {
            s.visible_products()
                .into_iter()
                .map(ProductCardView::from)
                .collect()
        });

        if products.is_empty() {
            return view! { <p class="muted catalog-empty">{empty_tab.clone()}</p> }.into_any();
        }

        view! {
            <div class="product-grid">
                {products
                    .into_iter()
                    .map(|product| {
                        let add_label = add_to_cart.clone();
                        view! {
                            <ProductCard store=store product=product add_label=add_label detailed=true/>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="catalog container fade-in" data-section="catalog">
            <h2 class="page-title">{title}</h2>
            <div class="tabs" role="tablist">
                {CatalogTab::ALL
                    .into_iter()
                    .map(|tab| view! { <TabButton store=store tab=tab selected=selected/> })
                    .collect::<Vec<_>>()}
            </div>
            {listing}
        </section>
    }
}

#[component]
fn TabButton(store: Store, tab: CatalogTab, selected: Memo<CatalogTab>) -> impl IntoView {
    let is_selected = move || selected.get() == tab;

    view! {
        <button
            class="tab"
            class:active=is_selected
            role="tab"
            aria-selected=move || if is_selected() { "true" } else { "false" }
            data-tab=tab.key()
            on:click=move |_| store.dispatch(|s| s.select_tab(tab))
        >
            {tab.label()}
        </button>
    }
}
