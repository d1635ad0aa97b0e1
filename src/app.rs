//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::logging::error;
use leptos::prelude::*;

use cartdept_core::{ContentCatalog, Route};

use crate::components::AppRouter;
use crate::config::{PAGE_CONTENT, SITE_NAME};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because both fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route currently rendered beneath the shell.
    pub route: RwSignal<Route>,

    /// Section copy and shop items, parsed once at startup.
    pub content: StoredValue<ContentCatalog>,
}

impl AppContext {
    /// Creates the context, starting from the URL the page was loaded at.
    pub fn new(content: ContentCatalog) -> Self {
        Self {
            route: RwSignal::new(dom::current_route()),
            content: StoredValue::new(content),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Parses the embedded content catalogue
/// - Creates and provides the global AppContext
/// - Renders the router, or the fallback if startup failed
#[component]
pub fn App() -> impl IntoView {
    let app = ContentCatalog::from_toml(PAGE_CONTENT)
        .inspect_err(|err| error!("failed to load site content: {}", err))
        .map(|content| {
            provide_context(AppContext::new(content));
            view! { <AppRouter /> }
        });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #fff;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="margin-bottom: 1rem; text-transform: uppercase; letter-spacing: 0.2em;">
                            {SITE_NAME}
                        </h1>
                        <p style="color: rgba(255, 255, 255, 0.6); margin-bottom: 2rem;">
                            "Something went wrong. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: rgba(255, 255, 255, 0.05);
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: rgba(255, 255, 255, 0.5);">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #fff;
                                color: #000;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {app}
        </ErrorBoundary>
    }
}
