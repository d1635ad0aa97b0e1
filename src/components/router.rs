//! Application router component.
//!
//! Path-based routing over the History API. The route signal in
//! [`AppContext`] is the single source of truth for the rendered page.
//!
//! # Architecture
//!
//! - **Shell never re-renders on navigation**: `AppShell` stays mounted and
//!   only the page beneath it swaps
//! - **Navigation is deferred**: the shell decides when to call
//!   [`HistoryNavigator::navigate`], after its exit transition
//! - **popstate events**: browser back/forward buttons update the route
//!   directly, without a transition

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use cartdept_core::{Navigator, Route};

use super::pages::Page;
use super::shell::AppShell;
use crate::app::AppContext;
use crate::utils::dom;

// ============================================================================
// Navigator
// ============================================================================

/// Pushes a history entry and updates the route signal.
#[derive(Clone, Copy)]
pub struct HistoryNavigator {
    route: RwSignal<Route>,
}

impl HistoryNavigator {
    pub fn new(route: RwSignal<Route>) -> Self {
        Self { route }
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        let next = Route::parse(path);
        dom::push_path(next.as_str());
        dom::scroll_to_top();
        self.route.set(next);
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/` → landing photo
/// - `/shop` → product grid
/// - `/<section>` → section copy, or not-found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let route = ctx.route;

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(dom::current_route());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let navigator = HistoryNavigator::new(route);

    view! {
        <AppShell navigator=navigator>
            <Page />
        </AppShell>
    }
}
