//! Shell configuration.
//!
//! Centralizes the timing constants and static navigation tables shared by
//! the state machine and the web front end.

use std::time::Duration;

use crate::nav::NavItem;

// =============================================================================
// Routes
// =============================================================================

/// Path of the landing (hero) page.
pub const ROOT_PATH: &str = "/";

// =============================================================================
// Navigation Tables
// =============================================================================

/// Primary navigation entries, shown in the hero bar and in the drawer.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new("Shop", "/shop"),
    NavItem::new("Collection", "/collection"),
    NavItem::new("Events", "/events"),
];

/// Legal links in the drawer footer. These are plain anchors and are never
/// routed through the transition choreography.
pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem::new("Privacy", "/privacy"),
    NavItem::new("Imprint", "/imprint"),
    NavItem::new("ToS", "/terms"),
];

/// Copyright line at the bottom of the drawer.
pub const COPYRIGHT: &str = "© Cart Dept 2025";

// =============================================================================
// Transition Timing
// =============================================================================

/// Transition timing constants (milliseconds).
pub mod timing {
    /// Duration of the header resize animation.
    pub const NAV_ANIMATION_MS: u64 = 600;
    /// Extra wait when the header first mounts from the hero layout.
    pub const NAV_MOUNT_BUFFER_MS: u64 = 240;
    /// CSS fade applied to the main content region while transitioning.
    pub const CONTENT_FADE_MS: u64 = 700;
}

/// Delays used when arming a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    /// Header animation duration.
    pub animation: Duration,
    /// Buffer added on top of `animation` when mounting from the hero.
    pub mount_buffer: Duration,
    /// Content fade duration. Presentation only, never extends the timer.
    pub content_fade: Duration,
}

impl TransitionTimings {
    /// Delay before navigating when the header is already compact.
    pub fn mounted_delay(&self) -> Duration {
        self.animation
    }

    /// Delay before navigating away from the hero.
    pub fn hero_delay(&self) -> Duration {
        self.animation + self.mount_buffer
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            animation: Duration::from_millis(timing::NAV_ANIMATION_MS),
            mount_buffer: Duration::from_millis(timing::NAV_MOUNT_BUFFER_MS),
            content_fade: Duration::from_millis(timing::CONTENT_FADE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let timings = TransitionTimings::default();
        assert_eq!(timings.mounted_delay(), Duration::from_millis(600));
        assert_eq!(timings.hero_delay(), Duration::from_millis(840));
        assert_eq!(timings.content_fade, Duration::from_millis(700));
    }

    #[test]
    fn test_nav_items_are_routable() {
        for item in NAV_ITEMS {
            assert!(item.href.starts_with('/'));
            assert_ne!(item.href, ROOT_PATH);
        }
    }
}
