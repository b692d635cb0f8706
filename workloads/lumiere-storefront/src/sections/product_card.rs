//! Product card shared by the home and catalog sections.

use leptos::prelude::*;

use crate::app::Store;
use crate::icon::{Icon, IconName};
use crate::view_model::ProductCardView;

/// A product with its price and an add-to-cart button.
///
/// `detailed` cards also show the scent badge and the product's story.
#[component]
pub fn ProductCard(
    store: Store,
    product: ProductCardView,
    add_label: String,
    #[prop(optional)] detailed: bool,
) -> impl IntoView {
    let ProductCardView {
        id,
        name,
        description,
        story,
        scent,
        price,
        image,
    } = product;

    view! {
        <article class="product-card" data-product-id=id.to_string()>
            <div class="product-image-wrap">
                <img src=image alt=name.clone() class="product-image" loading="lazy"/>
            </div>
            <div class="product-info">
                <h4 class="product-name">{name}</h4>
                {detailed.then(|| view! { <span class="badge-outline">{scent}</span> })}
                <p class="muted">{description}</p>
                {detailed.then(|| view! { <p class="product-story">{story}</p> })}
                <div class="product-footer">
                    <span class="price">{price}</span>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| store.dispatch(|s| s.add_to_cart(id))
                    >
                        <Icon name=IconName::Plus size=16/>
                        {add_label}
                    </button>
                </div>
            </div>
        </article>
    }
}
