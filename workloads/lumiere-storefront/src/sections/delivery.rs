//! Delivery section.

use leptos::prelude::*;

use crate::config::DeliveryConfig;
use crate::icon::Icon;

#[component]
pub fn DeliverySection(delivery: DeliveryConfig) -> impl IntoView {
    view! {
        <section class="delivery container narrow fade-in" data-section="delivery">
            <h2 class="page-title">{delivery.title}</h2>
            <div class="delivery-options">
                {delivery
                    .options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <div class="card delivery-option">
                                <Icon name=option.icon size=32/>
                                <div>
                                    <h3 class="card-title">{option.title}</h3>
                                    <p class="muted">{option.body}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
