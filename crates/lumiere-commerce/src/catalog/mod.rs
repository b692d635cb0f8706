//! Product catalog module.
//!
//! The catalog is an immutable, ordered collection validated once at
//! construction. Tabs are a presentational filter over that order.

mod category;
mod product;
mod seed;

pub use category::{CatalogTab, ScentFamily};
pub use product::Product;

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::ProductId;

/// The read-only product collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that it is non-empty, ids are unique and
    /// no price is negative.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        if products.is_empty() {
            return Err(CommerceError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProductId(product.id));
            }
            if product.price.is_negative() {
                return Err(CommerceError::NegativePrice {
                    id: product.id,
                    amount: product.price.amount,
                });
            }
        }

        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// The Lumière candle collection.
    pub fn lumiere() -> Self {
        Self {
            products: seed::lumiere_collection(),
        }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products shown in the home page's featured collection.
    pub fn featured(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products listed under `tab`, in catalog order. May be empty.
    pub fn by_tab(&self, tab: CatalogTab) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| tab.admits(p.scent_family))
            .collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a constructed catalog; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::lumiere()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn candle(id: u32, family: ScentFamily, price: i64) -> Product {
        Product::new(ProductId::new(id), format!("Candle {id}"), family, Money::rub(price))
    }

    #[test]
    fn test_seeded_catalog_is_valid() {
        let seeded = Catalog::lumiere();
        let rebuilt = Catalog::new(seeded.products().to_vec()).unwrap();
        assert_eq!(rebuilt, seeded);
        assert_eq!(seeded.len(), 3);
    }

    #[test]
    fn test_seeded_prices() {
        let catalog = Catalog::lumiere();
        let prices: Vec<i64> = catalog.products().iter().map(|p| p.price.amount).collect();
        assert_eq!(prices, vec![4500, 3800, 5200]);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().name, "Noir Ambré");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(vec![]), Err(CommerceError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            candle(1, ScentFamily::Woody, 100),
            candle(1, ScentFamily::Sweet, 200),
        ]);
        assert_eq!(result, Err(CommerceError::DuplicateProductId(ProductId::new(1))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![candle(2, ScentFamily::Woody, -1)]);
        assert!(matches!(result, Err(CommerceError::NegativePrice { amount: -1, .. })));
    }

    #[test]
    fn test_by_tab_preserves_order() {
        let catalog = Catalog::new(vec![
            candle(1, ScentFamily::Woody, 100),
            candle(2, ScentFamily::Sweet, 200),
            candle(3, ScentFamily::Woody, 300),
        ])
        .unwrap();

        let ids = |tab: CatalogTab| -> Vec<u32> {
            catalog.by_tab(tab).iter().map(|p| p.id.get()).collect()
        };
        assert_eq!(ids(CatalogTab::All), vec![1, 2, 3]);
        assert_eq!(ids(CatalogTab::Woody), vec![1, 3]);

        assert!(catalog.by_tab(CatalogTab::Exotic).is_empty());
    }

    #[test]
    fn test_seeded_tabs_cover_collection() {
        let catalog = Catalog::lumiere();
        let per_family: usize = [CatalogTab::Woody, CatalogTab::Sweet, CatalogTab::Exotic]
            .iter()
            .map(|tab| catalog.by_tab(*tab).len())
            .sum();
        assert_eq!(per_family, catalog.by_tab(CatalogTab::All).len());
    }
}
