//! Path-based routes.

use std::fmt;

use crate::config::ROOT_PATH;

/// A normalized browser pathname.
///
/// Query strings and fragments are dropped, a missing leading slash is added
/// and a trailing slash is removed, so `shop/`, `/shop?x=1` and `/shop`
/// compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn root() -> Self {
        Self(ROOT_PATH.to_string())
    }

    pub fn parse(raw: &str) -> Self {
        let path = raw
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_matches('/');

        if trimmed.is_empty() {
            return Self::root();
        }

        Self(format!("/{}", trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_PATH
    }

    /// Section key for single-segment routes (`/shop` → `shop`).
    ///
    /// Nested paths have no section and resolve to "not found".
    pub fn section(&self) -> Option<&str> {
        let rest = self.0.strip_prefix('/')?;
        if rest.is_empty() || rest.contains('/') {
            return None;
        }
        Some(rest)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse(""), Route::root());
        assert_eq!(Route::parse("/"), Route::root());
        assert_eq!(Route::parse("//"), Route::root());
        assert_eq!(Route::parse("/?ref=mail"), Route::root());
        assert_eq!(Route::parse("/shop").as_str(), "/shop");
        assert_eq!(Route::parse("shop/").as_str(), "/shop");
        assert_eq!(Route::parse("/shop?drop=3#top").as_str(), "/shop");
        assert_eq!(Route::parse("/a/b/").as_str(), "/a/b");
    }

    #[test]
    fn test_section() {
        assert_eq!(Route::root().section(), None);
        assert_eq!(Route::parse("/shop").section(), Some("shop"));
        assert_eq!(Route::parse("/shop/cart-01").section(), None);
    }

    #[test]
    fn test_is_root() {
        assert!(Route::default().is_root());
        assert!(!Route::parse("/events").is_root());
    }
}
