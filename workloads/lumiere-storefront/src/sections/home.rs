//! Landing section: hero banner and the featured collection.

use leptos::prelude::*;

use super::ProductCard;
use crate::app::Store;
use crate::config::HeroConfig;
use crate::navigation::Section;
use crate::view_model::ProductCardView;

#[component]
pub fn HomeSection(store: Store, hero: HeroConfig, add_label: String) -> impl IntoView {
    let featured: Vec<ProductCardView> = store.read_untracked(|s| {
        s.catalog()
            .featured()
            .iter()
            .map(ProductCardView::from)
            .collect()
    });

    view! {
        <div class="fade-in">
            <section class="hero" data-section="hero">
                <div class="hero-content">
                    <h2 class="hero-title">{hero.title}</h2>
                    <p class="hero-lead">{hero.lead}</p>
                    <button
                        class="btn btn-primary btn-lg"
                        on:click=move |_| store.dispatch(|s| s.navigate(Section::Catalog))
                    >
                        {hero.cta}
                    </button>
                </div>
            </section>

            <section class="featured container">
                <h3 class="section-title">{hero.featured_title}</h3>
                <div class="product-grid">
                    {featured
                        .into_iter()
                        .map(|product| {
                            let add_label = add_label.clone();
                            view! { <ProductCard store=store product=product add_label=add_label/> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
