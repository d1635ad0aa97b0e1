//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`shell`] - Persistent chrome wired to the navigation state machine
//! - [`navbar`] - Header, nav links and the footer drawer
//! - [`newsletter`] - Centered email signup panel
//! - [`pages`] - Landing, section and not-found pages
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod navbar;
pub mod newsletter;
pub mod pages;
pub mod router;
pub mod shell;

pub use router::AppRouter;
