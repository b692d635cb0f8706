//! Display data derived from session state.
//!
//! Components render these views instead of reaching into domain types, so
//! formatting rules live in one tested place.

use lumiere_commerce::prelude::*;

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub story: String,
    pub scent: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            story: product.story.clone(),
            scent: product.scent.clone(),
            price: product.price.display(),
            image: product.image.clone(),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.product.id,
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            unit_price: line.product.price.display(),
            quantity: line.quantity,
        }
    }
}

/// Cart drawer display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: cart.total().display(),
        }
    }
}

/// Badge text for the header cart button; hidden for an empty cart.
pub fn badge_label(item_count: u64) -> Option<String> {
    (item_count > 0).then(|| item_count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.is_empty());
        assert_eq!(badge_label(Cart::new().item_count()), None);
        assert_eq!(view.total, "0 \u{20bd}");
    }

    #[test]
    fn test_cart_view_totals() {
        let catalog = Catalog::lumiere();
        let mut cart = Cart::new();
        cart.add(catalog.get(ProductId::new(1)).unwrap());
        cart.add(catalog.get(ProductId::new(1)).unwrap());
        cart.add(catalog.get(ProductId::new(2)).unwrap());

        let view = CartView::from(&cart);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[0].unit_price, "4\u{a0}500 \u{20bd}");
        assert_eq!(view.total, "12\u{a0}800 \u{20bd}");
        assert_eq!(badge_label(cart.item_count()).as_deref(), Some("3"));
    }

    #[test]
    fn test_product_card_view() {
        let catalog = Catalog::lumiere();
        let card = ProductCardView::from(catalog.get(ProductId::new(3)).unwrap());
        assert_eq!(card.name, "Ébène Mystique");
        assert_eq!(card.scent, "Экзотический, насыщенный");
        assert_eq!(card.price, "5\u{a0}200 \u{20bd}");
    }
}
