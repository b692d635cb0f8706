//! Slide-over cart panel.

use leptos::prelude::*;

use crate::app::Store;
use crate::config::CartCopy;
use crate::icon::{Icon, IconName};
use crate::view_model::{CartItemView, CartView};

#[component]
pub fn CartDrawer(store: Store, copy: CartCopy) -> impl IntoView {
    let copy = StoredValue::new(copy);
    let is_open = Memo::new(move |_| store.read(|s| s.is_cart_open()));
    let cart = Memo::new(move |_| store.read(|s| CartView::from(s.cart())));

    view! {
        <Show when=move || is_open.get()>
            <div class="sheet-overlay" on:click=move |_| store.dispatch(|s| s.close_cart())></div>
            <aside class="sheet" role="dialog" aria-modal="true">
                <header class="sheet-header">
                    <h2 class="sheet-title">{copy.with_value(|c| c.title.clone())}</h2>
                    <button
                        class="btn-ghost btn-icon"
                        aria-label="Закрыть"
                        on:click=move |_| store.dispatch(|s| s.close_cart())
                    >
                        <Icon name=IconName::X/>
                    </button>
                </header>
                {move || {
                    let cart = cart.get();
                    if cart.is_empty() {
                        return view! {
                            <p class="cart-empty">{copy.with_value(|c| c.empty.clone())}</p>
                        }
                        .into_any();
                    }

                    let CartView { items, total } = cart;
                    view! {
                        <ul class="cart-lines">
                            {items
                                .into_iter()
                                .map(|item| view! { <CartLine store=store item=item/> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <div class="cart-summary">
                            <div class="cart-total">
                                <span>{copy.with_value(|c| c.total.clone())}</span>
                                <span class="price">{total}</span>
                            </div>
                            <button
                                class="btn btn-primary btn-block"
                                on:click=move |_| store.dispatch(|s| s.checkout())
                            >
                                {copy.with_value(|c| c.checkout.clone())}
                            </button>
                        </div>
                    }
                    .into_any()
                }}
            </aside>
        </Show>
    }
}

#[component]
fn CartLine(store: Store, item: CartItemView) -> impl IntoView {
    let CartItemView {
        id,
        name,
        image,
        unit_price,
        quantity,
    } = item;

    view! {
        <li class="cart-line">
            <img src=image alt=name.clone() class="cart-line-image"/>
            <div class="cart-line-body">
                <h3 class="cart-line-name">{name}</h3>
                <p class="muted">{unit_price}</p>
                <div class="quantity">
                    <button
                        class="btn-outline btn-icon btn-sm"
                        aria-label="Уменьшить"
                        on:click=move |_| store.dispatch(|s| s.decrement(id))
                    >
                        <Icon name=IconName::Minus size=14/>
                    </button>
                    <span class="quantity-value">{quantity.to_string()}</span>
                    <button
                        class="btn-outline btn-icon btn-sm"
                        aria-label="Увеличить"
                        on:click=move |_| store.dispatch(|s| s.increment(id))
                    >
                        <Icon name=IconName::Plus size=14/>
                    </button>
                </div>
            </div>
            <button
                class="btn-ghost btn-icon"
                aria-label="Удалить"
                on:click=move |_| store.dispatch(|s| s.remove_from_cart(id))
            >
                <Icon name=IconName::X size=18/>
            </button>
        </li>
    }
}
