//! Application configuration.
//!
//! Site metadata and asset paths for the web front end. Navigation tables
//! and transition timings live in [`cartdept_core::config`]. Text assets are
//! loaded at compile time using `include_str!`.

pub use cartdept_core::config::{COPYRIGHT, FOOTER_LINKS, NAV_ITEMS, timing};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Section page copy and shop placeholders.
pub const PAGE_CONTENT: &str = include_str!("../assets/content/pages.toml");

// =============================================================================
// Site Metadata
// =============================================================================

/// Brand name used in alt text and the not-found page.
pub const SITE_NAME: &str = "Cart Dept";

/// Newsletter button label in the hero header.
pub const NEWSLETTER_LABEL: &str = "Stay Up To Date";

/// Message shown after the email form is submitted.
pub const NEWSLETTER_THANKS: &str = "Thanks! This form isn't connected to anything yet.";

/// Caption under the landing photo.
pub const HOME_PHOTO_CAPTION: &str = "Photo: Rotterdam, 2024";

// =============================================================================
// Static Assets
// =============================================================================

/// Public asset paths (served next to `index.html`).
pub mod assets {
    pub const LOGO: &str = "/logo.png";
    pub const NAV_MASK: &str = "/nav-mask.svg";
    pub const HOME_PHOTO: &str = "/slapdash.jpg";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewports narrower than this get the desktop-only notice.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Message shown on small viewports.
pub const MOBILE_NOTICE: &str = "This site is only designed for desktop at the moment";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
