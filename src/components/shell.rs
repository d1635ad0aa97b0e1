//! Application shell.
//!
//! Owns the [`NavShell`] state machine for the lifetime of the page and wires
//! it to the browser: nav clicks arm a `setTimeout` transition, the timer
//! reports back to run the deferred navigation, route changes and Escape
//! presses are forwarded, and unmounting tears the machine down so a pending
//! navigation never fires.

use leptos::ev;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos_use::use_media_query;

use cartdept_core::{NavShell, Selection, ShellView};

use super::navbar::NavBar;
use super::newsletter::NewsletterPanel;
use super::router::HistoryNavigator;
use crate::app::AppContext;
use crate::config::{MOBILE_MEDIA_QUERY, MOBILE_NOTICE, NAV_ITEMS, timing};
use crate::utils::{BrowserScheduler, BrowserTimeout};

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Shell state. The timer handles hold JS closures, so the value is
/// thread-local; the signal handle itself is `Copy`.
type ShellSignal = RwSignal<NavShell<BrowserTimeout>, LocalStorage>;

// ============================================================================
// Handlers
// ============================================================================

/// Routes a nav link click through the transition timer.
fn select_link(shell: ShellSignal, navigator: HistoryNavigator, href: &str) {
    let mut scheduler = BrowserScheduler::new(move |ticket| {
        shell.try_update(|s| s.on_transition_elapsed(ticket, &navigator));
    });

    match shell.try_update(|s| s.select_link(href, &mut scheduler)) {
        Some(Ok(Selection::Scheduled { delay, .. })) => {
            log!("transition to {} in {}ms", href, delay.as_millis());
        }
        Some(Ok(Selection::Ignored)) | None => {}
        Some(Err(err)) => error!("navigation to {} dropped: {}", href, err),
    }
}

// ============================================================================
// AppShell Component
// ============================================================================

/// Persistent page chrome around the routed content.
///
/// # Props
/// - `navigator`: performs the deferred route change
/// - `children`: page content, faded out while a transition is pending
#[component]
pub fn AppShell(navigator: HistoryNavigator, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let route = ctx.route;

    let initial = route.get_untracked();
    let shell: ShellSignal = RwSignal::new_local(NavShell::mount(Some(initial.as_str())));

    // Forward route changes (navigation and back/forward buttons)
    Effect::new(move |_| {
        let current = route.get();
        shell.update(|s| s.route_changed(current.as_str()));
    });

    // Escape closes the drawer
    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if shell.with_untracked(|s| s.drawer_visible()) {
            let key = ev.key();
            shell.update(|s| {
                s.handle_key(&key);
            });
        }
    });

    on_cleanup(move || {
        key_listener.remove();
        shell.try_update(|s| s.teardown());
    });

    let view = Memo::new(move |_| shell.with(|s| s.view()));

    let on_select = Callback::new(move |href: String| select_link(shell, navigator, &href));
    let on_newsletter_toggle = Callback::new(move |_: ()| {
        shell.update(|s| {
            s.toggle_newsletter();
        });
    });
    let on_drawer_toggle = Callback::new(move |_: ()| {
        shell.update(|s| {
            s.toggle_drawer();
        });
    });
    let on_newsletter_complete = Callback::new(move |_: ()| {
        shell.update(|s| s.newsletter_completed());
    });

    let main_class = move || {
        if view.get().is_home {
            format!("{} {}", css::main, css::mainHome)
        } else {
            format!("{} {}", css::main, css::mainSection)
        }
    };
    let content_cls = move || content_class(&view.get());
    let fade = format!("transition: opacity {}ms;", timing::CONTENT_FADE_MS);

    view! {
        <div class=css::shell>
            <div class=css::backdrop aria-hidden="true"></div>

            <NavBar
                items=NAV_ITEMS
                view=view
                on_select=on_select
                on_newsletter_toggle=on_newsletter_toggle
                on_drawer_toggle=on_drawer_toggle
            />

            <main class=main_class>
                <div class=content_cls style=fade>
                    {children()}
                </div>
            </main>

            <NewsletterPanel
                open=Signal::derive(move || view.get().newsletter_open)
                on_complete=on_newsletter_complete
            />

            <MobileNotice />
        </div>
    }
}

fn content_class(view: &ShellView) -> String {
    if view.content_hidden {
        format!("{} {}", css::content, css::contentHidden)
    } else {
        css::content.to_string()
    }
}

/// Desktop-only notice for narrow viewports.
#[component]
fn MobileNotice() -> impl IntoView {
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);

    view! {
        <Show when=move || is_mobile.get()>
            <div class=css::mobileNotice>
                <div class=css::mobileNoticeText>{MOBILE_NOTICE}</div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_fades_while_transitioning() {
        let idle = ShellView::default();
        assert_eq!(content_class(&idle), css::content);

        let transitioning = ShellView {
            content_hidden: true,
            ..Default::default()
        };
        assert!(content_class(&transitioning).contains(css::contentHidden));
    }
}
