//! Store configuration: brand copy, static section content and logging.
//!
//! The storefront ships with `store.toml` compiled in. Every table has serde
//! defaults, so a partial file still loads.

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::icon::IconName;

const EMBEDDED: &str = include_str!("../store.toml");

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub brand: BrandConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub catalog: CatalogCopy,

    #[serde(default)]
    pub cart: CartCopy,

    #[serde(default)]
    pub about: AboutConfig,

    #[serde(default)]
    pub delivery: DeliveryConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, StorefrontError> {
        Ok(toml::from_str(content)?)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, StorefrontError> {
        Self::from_toml_str(EMBEDDED)
    }
}

/// Brand identity shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Lumière".to_string(),
            tagline: String::new(),
        }
    }
}

/// Landing section copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub lead: String,
    pub cta: String,
    pub featured_title: String,
}

/// Catalog page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogCopy {
    pub title: String,
    pub add_to_cart: String,
    pub empty_tab: String,
}

impl Default for CatalogCopy {
    fn default() -> Self {
        Self {
            title: "Каталог".to_string(),
            add_to_cart: "В корзину".to_string(),
            empty_tab: "В этой категории пока нет свечей".to_string(),
        }
    }
}

/// Cart drawer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartCopy {
    pub title: String,
    pub empty: String,
    pub total: String,
    pub checkout: String,
}

impl Default for CartCopy {
    fn default() -> Self {
        Self {
            title: "Корзина".to_string(),
            empty: "Корзина пуста".to_string(),
            total: "Итого:".to_string(),
            checkout: "Оформить заказ".to_string(),
        }
    }
}

/// About page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub title: String,
    pub subtitle: String,
    pub chapters: Vec<Chapter>,
}

/// A titled paragraph of the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub body: String,
}

/// Delivery page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub title: String,
    pub options: Vec<DeliveryOption>,
}

/// One way of getting candles to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOption {
    pub icon: IconName,
    pub title: String,
    pub body: String,
}

/// Contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub title: String,
    pub email: String,
    pub phone: String,
    pub showroom: String,
    pub hours: String,
    pub socials: Vec<SocialLink>,
}

impl ContactConfig {
    /// `mailto:` link for the email address.
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with formatting characters stripped.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// A social network button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: IconName,
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = StoreConfig::embedded().unwrap();
        assert_eq!(config.brand.name, "Lumière");
        assert_eq!(config.hero.title, "Искусство аромата");
        assert_eq!(config.about.chapters.len(), 3);
        assert_eq!(config.delivery.options.len(), 3);
        assert_eq!(config.delivery.options[0].icon, IconName::Truck);
        assert_eq!(config.contact.socials.len(), 2);
        assert_eq!(config.cart.checkout, "Оформить заказ");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = StoreConfig::from_toml_str(
            r#"
            [brand]
            tagline = "С 2024"

            [logging]
            filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.brand.name, "Lumière");
        assert_eq!(config.brand.tagline, "С 2024");
        assert_eq!(config.cart, CartCopy::default());
        assert_eq!(config.logging.filter, "debug");
        assert!(config.about.chapters.is_empty());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let result = StoreConfig::from_toml_str("[delivery]\noptions = [{ icon = \"rocket\" }]");
        assert!(matches!(result, Err(StorefrontError::Config(_))));
    }

    #[test]
    fn test_contact_links() {
        let contact = ContactConfig {
            email: "hello@lumiere.ru".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            ..ContactConfig::default()
        };
        assert_eq!(contact.email_href(), "mailto:hello@lumiere.ru");
        assert_eq!(contact.phone_href(), "tel:+79991234567");
    }
}
