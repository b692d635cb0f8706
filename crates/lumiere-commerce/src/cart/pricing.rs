//! Cart pricing snapshot.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for the whole cart, taken at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Per-line breakdown in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Sum of quantities across all lines.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl CartPricing {
    /// Whether the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItemPricing {
    /// Product the line is for.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}
