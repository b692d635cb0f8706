//! The storefront session: the single owner of cart and navigation state.
//!
//! Every mutation goes through [`StorefrontSession`] and, before returning,
//! synchronously notifies subscribers in subscription order. The view layer
//! subscribes once and re-renders from the new state on each notification.

use std::fmt;

use lumiere_commerce::prelude::*;

use crate::navigation::{Navigation, Section};

/// Callback invoked after each state change.
pub type Listener = Box<dyn Fn(&SessionEvent) + Send + Sync>;

/// Handle returned by [`StorefrontSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// What a cart mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    Added(ProductId),
    Removed(ProductId),
    QuantityChanged(ProductId),
    Cleared,
}

/// Notification delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Cart(CartEvent),
    Navigated(Section),
    TabSelected(CatalogTab),
    CartDrawer { open: bool },
    CheckoutRequested,
    Reset,
}

/// State of one visitor's storefront view.
pub struct StorefrontSession {
    catalog: Catalog,
    cart: Cart,
    navigation: Navigation,
    catalog_tab: CatalogTab,
    cart_open: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl StorefrontSession {
    /// Start a session over `catalog` with an empty cart on the home section.
    pub fn new(catalog: Catalog) -> Self {
        tracing::info!(products = catalog.len(), "storefront session started");
        Self {
            catalog,
            cart: Cart::new(),
            navigation: Navigation::new(),
            catalog_tab: CatalogTab::default(),
            cart_open: false,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Register a listener called after every state change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&SessionEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    fn notify(&self, event: SessionEvent) {
        tracing::trace!(?event, listeners = self.listeners.len(), "notifying");
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add one unit of a catalog product. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        let Some(product) = self.catalog.get(product_id) else {
            tracing::warn!(%product_id, "ignoring add of product not in catalog");
            return;
        };
        self.cart.add(product);
        self.notify(SessionEvent::Cart(CartEvent::Added(product_id)));
    }

    /// Remove a line. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
        self.notify(SessionEvent::Cart(CartEvent::Removed(product_id)));
    }

    /// Overwrite a line's quantity; zero or below removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
        let event = if quantity <= 0 {
            CartEvent::Removed(product_id)
        } else {
            CartEvent::QuantityChanged(product_id)
        };
        self.notify(SessionEvent::Cart(event));
    }

    /// The drawer's "+" button.
    pub fn increment(&mut self, product_id: ProductId) {
        self.cart.increment(product_id);
        self.notify(SessionEvent::Cart(CartEvent::QuantityChanged(product_id)));
    }

    /// The drawer's "−" button.
    pub fn decrement(&mut self, product_id: ProductId) {
        self.cart.decrement(product_id);
        let event = if self.cart.get(product_id).is_some() {
            CartEvent::QuantityChanged(product_id)
        } else {
            CartEvent::Removed(product_id)
        };
        self.notify(SessionEvent::Cart(event));
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.notify(SessionEvent::Cart(CartEvent::Cleared));
    }

    /// Placeholder for the checkout button. Order submission is not part of
    /// the storefront, so the cart is left untouched.
    pub fn checkout(&mut self) {
        tracing::info!(
            items = self.cart.item_count(),
            total = %self.cart.total(),
            "checkout requested"
        );
        self.notify(SessionEvent::CheckoutRequested);
    }

    // ------------------------------------------------------------------
    // Navigation and chrome
    // ------------------------------------------------------------------

    pub fn navigate(&mut self, section: Section) {
        if self.navigation.navigate(section) {
            tracing::debug!(section = section.key(), "navigated");
        }
        self.notify(SessionEvent::Navigated(section));
    }

    pub fn select_tab(&mut self, tab: CatalogTab) {
        self.catalog_tab = tab;
        tracing::debug!(tab = tab.key(), "catalog tab selected");
        self.notify(SessionEvent::TabSelected(tab));
    }

    pub fn open_cart(&mut self) {
        self.set_cart_open(true);
    }

    pub fn close_cart(&mut self) {
        self.set_cart_open(false);
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
        self.notify(SessionEvent::CartDrawer { open });
    }

    /// Tear the view state down to a fresh session. Listeners are kept.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.navigation = Navigation::new();
        self.catalog_tab = CatalogTab::default();
        self.cart_open = false;
        tracing::debug!("session reset");
        self.notify(SessionEvent::Reset);
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn section(&self) -> Section {
        self.navigation.current()
    }

    pub fn catalog_tab(&self) -> CatalogTab {
        self.catalog_tab
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Products listed under the selected catalog tab.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.by_tab(self.catalog_tab)
    }
}

impl Default for StorefrontSession {
    fn default() -> Self {
        Self::new(Catalog::lumiere())
    }
}

impl fmt::Debug for StorefrontSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontSession")
            .field("cart", &self.cart)
            .field("section", &self.section())
            .field("catalog_tab", &self.catalog_tab)
            .field("cart_open", &self.cart_open)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
