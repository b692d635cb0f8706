//! Section navigation.

use serde::{Deserialize, Serialize};

/// A top-level content block of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    About,
    Delivery,
    Contact,
}

impl Section {
    /// Sections in menu order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Catalog,
        Section::About,
        Section::Delivery,
        Section::Contact,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::About => "about",
            Section::Delivery => "delivery",
            Section::Contact => "contact",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::About => "О бренде",
            Section::Delivery => "Доставка",
            Section::Contact => "Контакты",
        }
    }
}

/// Which section is on screen. No history is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    current: Section,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Show `section`. Returns whether the visible section changed.
    pub fn navigate(&mut self, section: Section) -> bool {
        let changed = self.current != section;
        self.current = section;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(Navigation::new().current(), Section::Home);
    }

    #[test]
    fn test_latest_navigation_wins() {
        let mut nav = Navigation::new();
        assert!(nav.navigate(Section::Catalog));
        assert!(nav.navigate(Section::Home));
        assert_eq!(nav.current(), Section::Home);
        assert!(!nav.navigate(Section::Home));
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<&str> = Section::ALL.iter().map(Section::label).collect();
        assert_eq!(labels, ["Главная", "Каталог", "О бренде", "Доставка", "Контакты"]);
    }
}
