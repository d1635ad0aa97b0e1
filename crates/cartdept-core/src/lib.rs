//! Navigation shell core for the Cart Dept site.
//!
//! Browser-independent state machine behind the site header:
//! - [`NavShell`] - orchestrator owning all shell state
//! - [`TransitionTimer`], [`Scheduler`] - single-slot deferred navigation
//! - [`NavMode`], [`derive_effective_mode`] - hero/compact header latch
//! - [`DrawerState`], [`NewsletterState`] - the two overlay panels
//! - [`ContentCatalog`], [`EmailForm`], [`Route`] - page collaborators

pub mod config;
pub mod content;
mod drawer;
pub mod error;
mod form;
mod nav;
mod newsletter;
mod route;
mod shell;
mod timer;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use content::{ContentCatalog, PageCopy, PageLayout, PageView, ShopItem};
pub use drawer::DrawerState;
pub use error::{ContentError, ScheduleError, ShellError};
pub use form::{EmailForm, FormOutcome, looks_like_email};
pub use nav::{NavItem, NavLatch, NavMode, derive_effective_mode};
pub use newsletter::NewsletterState;
pub use route::Route;
pub use shell::{LinkClick, NavAction, NavShell, Navigator, Selection, ShellView};
pub use timer::{Scheduler, Ticket, TransitionTimer};
