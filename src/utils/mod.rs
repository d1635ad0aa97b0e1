//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - window access and History API navigation
//! - [`BrowserScheduler`] - `setTimeout`-backed transition scheduling

pub mod dom;
mod timer;

pub use timer::{BrowserScheduler, BrowserTimeout};
