//! Section page copy.
//!
//! Copy lives in a TOML document embedded by the web crate. Lookups for a
//! section with no entry fail with [`ContentError::NotFound`]; the page is
//! then replaced by a not-found view rather than rendered partially.
//!
//! ```toml
//! [pages.shop]
//! eyebrow = "Limited Drop"
//! heading = "Shop the custom line"
//! body = "..."
//!
//! [[shop]]
//! id = "cart-01"
//! title = "Cart 01"
//! tag = "Urban Scout"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ContentError;
use crate::route::Route;

/// Section whose page renders the product grid.
pub const SHOP_SECTION: &str = "shop";

/// Header copy for one section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageCopy {
    pub eyebrow: String,
    pub heading: String,
    pub body: String,
}

/// Placeholder product card on the shop page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub title: String,
    pub tag: String,
}

/// Body layout below the section header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLayout {
    /// Grid of [`ShopItem`] cards
    ShopGrid,
    /// Single full-width feature panel
    FeaturePanel,
}

/// What a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView<'a> {
    Home,
    Section {
        key: &'a str,
        copy: &'a PageCopy,
        layout: PageLayout,
    },
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    pages: BTreeMap<String, PageCopy>,
    #[serde(default)]
    shop: Vec<ShopItem>,
}

/// Parsed content document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentCatalog {
    pages: BTreeMap<String, PageCopy>,
    shop: Vec<ShopItem>,
}

impl ContentCatalog {
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let doc: Document =
            toml::from_str(source).map_err(|e| ContentError::Parse(e.to_string()))?;
        Ok(Self {
            pages: doc.pages,
            shop: doc.shop,
        })
    }

    pub fn page(&self, section: &str) -> Result<&PageCopy, ContentError> {
        self.pages
            .get(section)
            .ok_or_else(|| ContentError::NotFound(section.to_string()))
    }

    /// Resolves a route to the page it renders.
    pub fn resolve<'a>(&'a self, route: &'a Route) -> Result<PageView<'a>, ContentError> {
        if route.is_root() {
            return Ok(PageView::Home);
        }

        let key = route
            .section()
            .ok_or_else(|| ContentError::NotFound(route.to_string()))?;
        let copy = self.page(key)?;
        let layout = if key == SHOP_SECTION {
            PageLayout::ShopGrid
        } else {
            PageLayout::FeaturePanel
        };

        Ok(PageView::Section { key, copy, layout })
    }

    /// Section keys with copy, in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn shop_items(&self) -> &[ShopItem] {
        &self.shop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE_CONTENT: &str = include_str!("../../../assets/content/pages.toml");

    const SAMPLE: &str = r#"
        [pages.shop]
        eyebrow = "Limited Drop"
        heading = "Shop the custom line"
        body = "Twenty carts a month."

        [pages.stories]
        eyebrow = "Field Notes"
        heading = "Stories from the road"
        body = "Riders and crews."

        [[shop]]
        id = "cart-01"
        title = "Cart 01"
        tag = "Urban Scout"
    "#;

    #[test]
    fn test_parse_sample() {
        let catalog = ContentCatalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.sections().collect::<Vec<_>>(), vec!["shop", "stories"]);
        assert_eq!(catalog.shop_items().len(), 1);
        assert_eq!(catalog.page("shop").unwrap().eyebrow, "Limited Drop");
    }

    #[test]
    fn test_unknown_section_not_found() {
        let catalog = ContentCatalog::from_toml(SAMPLE).unwrap();
        let err = catalog.page("events").unwrap_err();
        assert_eq!(err, ContentError::NotFound("events".to_string()));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_routes() {
        let catalog = ContentCatalog::from_toml(SAMPLE).unwrap();

        assert_eq!(catalog.resolve(&Route::root()).unwrap(), PageView::Home);

        let shop = Route::parse("/shop");
        assert!(matches!(
            catalog.resolve(&shop).unwrap(),
            PageView::Section { key: "shop", layout: PageLayout::ShopGrid, .. }
        ));

        let stories = Route::parse("/stories");
        assert!(matches!(
            catalog.resolve(&stories).unwrap(),
            PageView::Section { layout: PageLayout::FeaturePanel, .. }
        ));

        let nested = Route::parse("/shop/cart-01");
        assert!(catalog.resolve(&nested).unwrap_err().is_not_found());
    }

    #[test]
    fn test_malformed_document() {
        let err = ContentCatalog::from_toml("[pages.shop]\neyebrow = 1").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_site_content() {
        let catalog = ContentCatalog::from_toml(SITE_CONTENT).unwrap();
        assert_eq!(
            catalog.sections().collect::<Vec<_>>(),
            vec!["history", "shop", "stories", "studio"]
        );
        assert_eq!(catalog.shop_items().len(), 8);
        assert!(catalog.page("collection").is_err());
    }
}
