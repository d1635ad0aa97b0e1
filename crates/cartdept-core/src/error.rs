//! Error types for the navigation shell.
//!
//! - [`ScheduleError`] - the browser refused to arm a transition timer
//! - [`ContentError`] - page copy lookup or parsing failed
//! - [`ShellError`] - errors surfaced by [`NavShell`](crate::NavShell) handlers

use thiserror::Error;

/// Failure to arm a delayed callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// The scheduling primitive rejected the request
    #[error("timer rejected: {0}")]
    Rejected(String),
}

/// Content catalogue errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// No page copy exists for the requested section.
    #[error("page not found: {0}")]
    NotFound(String),
    /// The embedded content document could not be parsed.
    #[error("content parse error: {0}")]
    Parse(String),
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors returned by shell handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The transition timer could not be armed; the click is dropped.
    #[error("transition not scheduled: {0}")]
    Schedule(#[from] ScheduleError),
    /// The shell has been unmounted.
    #[error("shell has been torn down")]
    TornDown,
}
