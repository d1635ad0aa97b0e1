//! Header view mode and its route-derived override.
//!
//! The stored mode is a one-way latch: it starts as [`NavMode::Initial`] on
//! the landing page and can only move to [`NavMode::Mounted`]. Any route other
//! than the root renders the compact header regardless of the latch.

use crate::config::ROOT_PATH;

/// Header presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavMode {
    /// Full hero presentation: large logo, wide nav, no chrome
    #[default]
    Initial,
    /// Compact pill-shaped header
    Mounted,
}

impl NavMode {
    pub fn is_mounted(self) -> bool {
        self == Self::Mounted
    }
}

/// Static navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// Computes the mode the header should render in.
///
/// A mounted latch always wins. Otherwise any non-empty route other than `/`
/// forces the compact header, so deep links never show the hero.
pub fn derive_effective_mode(stored: NavMode, current_route: Option<&str>) -> NavMode {
    if stored.is_mounted() {
        return NavMode::Mounted;
    }

    match current_route {
        Some(route) if !route.is_empty() && route != ROOT_PATH => NavMode::Mounted,
        _ => NavMode::Initial,
    }
}

/// One-way `Initial → Mounted` latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavLatch {
    stored: NavMode,
}

impl NavLatch {
    /// Latch state for a shell mounted at `route`.
    pub fn for_route(route: Option<&str>) -> Self {
        Self {
            stored: derive_effective_mode(NavMode::Initial, route),
        }
    }

    pub fn stored(&self) -> NavMode {
        self.stored
    }

    /// Latches into [`NavMode::Mounted`]. Returns `true` if the latch moved.
    pub fn ensure_mounted(&mut self) -> bool {
        if self.stored.is_mounted() {
            return false;
        }
        self.stored = NavMode::Mounted;
        true
    }

    pub fn effective(&self, route: Option<&str>) -> NavMode {
        derive_effective_mode(self.stored, route)
    }
}
