//! Application shell and layout components.

use leptos::prelude::*;
use leptos_meta::*;

use crate::cart_drawer::CartDrawer;
use crate::config::{BrandConfig, StoreConfig};
use crate::icon::{Icon, IconName};
use crate::navigation::Section;
use crate::sections::{
    AboutSection, CatalogSection, ContactSection, DeliverySection, HomeSection,
};
use crate::session::StorefrontSession;
use crate::view_model::badge_label;

// ============================================================================
// Store
// ============================================================================

/// Reactive handle to the session, passed to every component.
///
/// The session notifies its subscribers after each mutation; the handle's
/// subscriber bumps `version`, and every tracked read depends on `version`.
/// Views that only care about one piece of state read it through a `Memo`,
/// so unrelated mutations stop at the memo's equality check.
#[derive(Clone, Copy)]
pub struct Store {
    session: StoredValue<StorefrontSession>,
    version: RwSignal<u64>,
}

impl Store {
    pub fn new(mut session: StorefrontSession) -> Self {
        let version = RwSignal::new(0u64);
        session.subscribe(move |_| version.update(|v| *v = v.wrapping_add(1)));
        Self {
            session: StoredValue::new(session),
            version,
        }
    }

    /// Read session state, re-running the caller on the next mutation.
    pub fn read<T>(&self, f: impl FnOnce(&StorefrontSession) -> T) -> T {
        self.version.track();
        self.session.with_value(f)
    }

    /// Read state that never changes after startup, such as the catalog.
    pub fn read_untracked<T>(&self, f: impl FnOnce(&StorefrontSession) -> T) -> T {
        self.session.with_value(f)
    }

    /// Mutate the session.
    pub fn dispatch(&self, f: impl FnOnce(&mut StorefrontSession)) {
        self.session.update_value(f);
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App(config: StoreConfig, session: StorefrontSession) -> impl IntoView {
    provide_meta_context();

    let store = Store::new(session);
    let section = Memo::new(move |_| store.read(|s| s.section()));
    let StoreConfig {
        brand,
        hero,
        catalog,
        cart,
        about,
        delivery,
        contact,
        logging: _,
    } = config;

    let title = format!("{} | {}", brand.name, hero.title);
    let description = brand.tagline.clone();
    let brand_name = brand.name.clone();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>

        <div class="page">
            <Header store=store section=section brand=brand_name/>
            <main>
                {move || match section.get() {
                    Section::Home => {
                        let add_label = catalog.add_to_cart.clone();
                        view! { <HomeSection store=store hero=hero.clone() add_label=add_label/> }
                            .into_any()
                    }
                    Section::Catalog => {
                        view! { <CatalogSection store=store copy=catalog.clone()/> }.into_any()
                    }
                    Section::About => view! { <AboutSection about=about.clone()/> }.into_any(),
                    Section::Delivery => {
                        view! { <DeliverySection delivery=delivery.clone()/> }.into_any()
                    }
                    Section::Contact => {
                        view! { <ContactSection contact=contact.clone()/> }.into_any()
                    }
                }}
            </main>
            <Footer brand=brand/>
            <CartDrawer store=store copy=cart/>
        </div>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(store: Store, section: Memo<Section>, brand: String) -> impl IntoView {
    let badge = Memo::new(move |_| store.read(|s| badge_label(s.cart().item_count())));

    view! {
        <header class="site-header">
            <nav class="nav-container">
                <h1 class="logo">{brand}</h1>
                <div class="nav-links">
                    {Section::ALL.into_iter().map(|target| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || section.get() == target
                                on:click=move |_| store.dispatch(|s| s.navigate(target))
                            >
                                {target.label()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <button
                    class="btn-outline btn-icon cart-button"
                    aria-label="Корзина"
                    on:click=move |_| store.dispatch(|s| s.open_cart())
                >
                    <Icon name=IconName::ShoppingBag/>
                    {move || badge.get().map(|count| view! { <span class="badge">{count}</span> })}
                </button>
            </nav>
        </header>
    }
}

#[component]
fn Footer(brand: BrandConfig) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <h2 class="logo">{brand.name}</h2>
            <p class="footer-tagline">{brand.tagline}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_commerce::prelude::ProductId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted<T>(
        runs: &Arc<AtomicUsize>,
        f: impl Fn() -> T + Send + Sync + 'static,
    ) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let runs = Arc::clone(runs);
        Memo::new(move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            f()
        })
    }

    #[test]
    fn test_dispatch_recomputes_tracked_reads() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(StorefrontSession::default());
        let runs = Arc::new(AtomicUsize::new(0));
        let item_count = counted(&runs, move || store.read(|s| s.cart().item_count()));

        assert_eq!(item_count.get(), 0);
        store.dispatch(|s| s.add_to_cart(ProductId::new(1)));
        assert_eq!(item_count.get(), 1);
        store.dispatch(|s| s.increment(ProductId::new(1)));
        assert_eq!(item_count.get(), 2);
        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_section_view_ignores_cart_and_drawer_mutations() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(StorefrontSession::default());
        let section = Memo::new(move |_| store.read(|s| s.section()));
        let renders = Arc::new(AtomicUsize::new(0));
        let view = counted(&renders, move || section.get());

        assert_eq!(view.get(), Section::Home);
        store.dispatch(|s| s.add_to_cart(ProductId::new(1)));
        store.dispatch(|s| s.open_cart());
        assert_eq!(view.get(), Section::Home);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        store.dispatch(|s| s.navigate(Section::Catalog));
        assert_eq!(view.get(), Section::Catalog);
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_untracked_read_sees_current_state() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(StorefrontSession::default());
        store.dispatch(|s| s.select_tab(lumiere_commerce::prelude::CatalogTab::Sweet));
        let visible = store.read_untracked(|s| s.visible_products().len());
        assert_eq!(visible, 1);
    }
}
