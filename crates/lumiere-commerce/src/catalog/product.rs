//! Product type.

use crate::catalog::ScentFamily;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A candle in the catalog.
///
/// Products are seeded once and never mutated; cart lines hold a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// One-line description for listings.
    pub description: String,
    /// The story behind the scent, shown on the catalog page.
    pub story: String,
    /// Human-readable scent character (e.g. "Древесный, теплый").
    pub scent: String,
    /// Scent family used by the catalog tabs.
    pub scent_family: ScentFamily,
    /// Unit price.
    pub price: Money,
    /// URI of the product photo. Never fetched or validated here.
    pub image: String,
}

impl Product {
    /// Create a product with empty display copy.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        scent_family: ScentFamily,
        price: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            story: String::new(),
            scent: String::new(),
            scent_family,
            price,
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = story.into();
        self
    }

    pub fn with_scent(mut self, scent: impl Into<String>) -> Self {
        self.scent = scent.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let product = Product::new(ProductId::new(9), "Test", ScentFamily::Sweet, Money::rub(100))
            .with_description("desc")
            .with_scent("Сладкий")
            .with_image("https://cdn.example/test.jpg");

        assert_eq!(product.id, ProductId::new(9));
        assert_eq!(product.description, "desc");
        assert_eq!(product.scent, "Сладкий");
        assert!(product.story.is_empty());
        assert_eq!(product.price, Money::rub(100));
    }
}
