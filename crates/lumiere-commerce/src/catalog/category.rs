//! Scent families and the catalog tabs that filter by them.

use serde::{Deserialize, Serialize};

/// Olfactory family a candle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScentFamily {
    /// Amber, patchouli, wood.
    Woody,
    /// Vanilla, cashmere, gourmand notes.
    Sweet,
    /// Orchid, ebony, rare resins.
    Exotic,
}

impl ScentFamily {
    /// All families in display order.
    pub const ALL: [ScentFamily; 3] = [
        ScentFamily::Woody,
        ScentFamily::Sweet,
        ScentFamily::Exotic,
    ];
}

/// A tab of the catalog page.
///
/// `All` shows the whole collection; the other tabs narrow it to one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTab {
    #[default]
    All,
    Woody,
    Sweet,
    Exotic,
}

impl CatalogTab {
    /// Tabs in the order they appear in the tab bar.
    pub const ALL: [CatalogTab; 4] = [
        CatalogTab::All,
        CatalogTab::Woody,
        CatalogTab::Sweet,
        CatalogTab::Exotic,
    ];

    /// Stable key used for element ids and serialization.
    pub fn key(&self) -> &'static str {
        match self {
            CatalogTab::All => "all",
            CatalogTab::Woody => "woody",
            CatalogTab::Sweet => "sweet",
            CatalogTab::Exotic => "exotic",
        }
    }

    /// Tab bar label.
    pub fn label(&self) -> &'static str {
        match self {
            CatalogTab::All => "Все",
            CatalogTab::Woody => "Древесные",
            CatalogTab::Sweet => "Сладкие",
            CatalogTab::Exotic => "Экзотические",
        }
    }

    /// The family this tab narrows to, or `None` for the unfiltered tab.
    pub fn family(&self) -> Option<ScentFamily> {
        match self {
            CatalogTab::All => None,
            CatalogTab::Woody => Some(ScentFamily::Woody),
            CatalogTab::Sweet => Some(ScentFamily::Sweet),
            CatalogTab::Exotic => Some(ScentFamily::Exotic),
        }
    }

    /// Whether a product of `family` is listed under this tab.
    pub fn admits(&self, family: ScentFamily) -> bool {
        self.family().map_or(true, |f| f == family)
    }
}

impl From<ScentFamily> for CatalogTab {
    fn from(family: ScentFamily) -> Self {
        match family {
            ScentFamily::Woody => CatalogTab::Woody,
            ScentFamily::Sweet => CatalogTab::Sweet,
            ScentFamily::Exotic => CatalogTab::Exotic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tab_admits_every_family() {
        for family in ScentFamily::ALL {
            assert!(CatalogTab::All.admits(family));
        }
    }

    #[test]
    fn test_family_tab_admits_only_its_family() {
        assert!(CatalogTab::Woody.admits(ScentFamily::Woody));
        assert!(!CatalogTab::Woody.admits(ScentFamily::Sweet));
        assert!(!CatalogTab::Exotic.admits(ScentFamily::Woody));
    }

    #[test]
    fn test_tab_round_trips_through_family() {
        for family in ScentFamily::ALL {
            assert_eq!(CatalogTab::from(family).family(), Some(family));
        }
    }

    #[test]
    fn test_default_tab_is_all() {
        assert_eq!(CatalogTab::default(), CatalogTab::All);
        assert_eq!(CatalogTab::default().label(), "Все");
    }
}
