//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The visitor's cart for the current session.
///
/// Holds at most one line per product id, in order of first addition. Every
/// line has a quantity of at least one; driving a quantity to zero or below
/// removes the line. No operation fails: unknown ids are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line in place, or appends a new line with
    /// quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(
                product_id = %product.id,
                quantity = existing.quantity,
                "cart line incremented"
            );
            return;
        }

        self.items.push(LineItem::new(product.clone()));
        tracing::debug!(product_id = %product.id, quantity = 1, "cart line added");
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "cart line removed");
        }
        removed
    }

    /// Overwrite the quantity of an existing line.
    ///
    /// A quantity of zero or below removes the line. Ids with no line are
    /// ignored; this never inserts. Quantities beyond `u32::MAX` saturate.
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) => {
                let changed = item.quantity != quantity;
                item.quantity = quantity;
                tracing::debug!(%product_id, quantity, "cart line quantity set");
                changed
            }
            None => false,
        }
    }

    /// Raise an existing line by one. Ignores unknown ids.
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        let Some(current) = self.get(product_id).map(|i| i.quantity) else {
            return false;
        };
        self.set_quantity(product_id, i64::from(current) + 1)
    }

    /// Lower an existing line by one, removing it when it reaches zero.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        let Some(current) = self.get(product_id).map(|i| i.quantity) else {
            return false;
        };
        self.set_quantity(product_id, i64::from(current) - 1)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in order of first addition.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Current pricing snapshot.
    pub fn pricing(&self) -> CartPricing {
        CartPricing {
            line_items: self
                .items
                .iter()
                .map(|item| LineItemPricing {
                    product_id: item.product.id,
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    subtotal: item.subtotal(),
                })
                .collect(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }
}

/// A product snapshot paired with the quantity the visitor wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product as it was when first added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}
