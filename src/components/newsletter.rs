//! Slide-up newsletter panel and its email step.
//!
//! The panel is always mounted so the form keeps its state while hidden.
//! Completion is reported to the shell, which closes the panel; the
//! "submitted" message is owned here.

use leptos::ev::{self, SubmitEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use cartdept_core::{EmailForm, FormOutcome};

use crate::components::icons as ic;
use crate::config::NEWSLETTER_THANKS;

stylance::import_crate_style!(css, "src/components/newsletter.module.css");

/// Newsletter panel, centred when open and parked below the viewport when closed.
#[component]
pub fn NewsletterPanel(#[prop(into)] open: Signal<bool>, on_complete: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(EmailForm::new());
    let submitted = Memo::new(move |_| form.with(EmailForm::is_submitted));

    view! {
        <div
            class=move || {
                if open.get() {
                    format!("{} {}", css::panel, css::panelOpen)
                } else {
                    css::panel.to_string()
                }
            }
            style=move || {
                format!("transform: translate(-50%, {});", if open.get() { "-50%" } else { "120%" })
            }
            role="dialog"
            aria-hidden=move || (!open.get()).to_string()
        >
            <Show
                when=move || !submitted.get()
                fallback=|| view! { <div class=css::thanks>{NEWSLETTER_THANKS}</div> }
            >
                <EmailStep form=form on_complete=on_complete />
            </Show>
        </div>
    }
}

/// Email input with placeholder overlay and pattern-gated submit arrow.
#[component]
fn EmailStep(form: RwSignal<EmailForm>, on_complete: Callback<()>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Escape while typing drops focus
    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if form.with_untracked(|f| f.should_blur_on(&ev.key()))
            && let Some(input) = input_ref.get_untracked()
        {
            let _ = input.blur();
        }
    });
    on_cleanup(move || key_listener.remove());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.try_update(|f| f.submit()) == Some(FormOutcome::Completed) {
            on_complete.run(());
        }
    };

    view! {
        <form class=css::form on:submit=on_submit autocomplete="off">
            <input
                node_ref=input_ref
                type="email"
                id="email-input"
                name="email"
                autocomplete="email"
                required
                class=css::input
                placeholder=move || form.with(|f| f.placeholder())
                prop:value=move || form.with(|f| f.email().to_string())
                on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                on:focus=move |_| form.update(EmailForm::focus)
                on:blur=move |_| form.update(EmailForm::blur)
                aria-label="Email address"
            />

            <div class=css::submitSlot>
                <Show when=move || form.with(EmailForm::can_submit)>
                    <button type="submit" class=css::submit aria-label="Submit">
                        <Icon icon=ic::SUBMIT />
                    </button>
                </Show>
            </div>

            <Show when=move || form.with(EmailForm::overlay_visible)>
                <div class=css::overlay>
                    <div class=css::overlayTop>"Almost there!"</div>
                    <div class=css::overlayPrompt>
                        "Email"
                        <span class=css::caret></span>
                    </div>
                    <div class=css::overlayBottom>
                        "Enter your email to complete registration."
                    </div>
                </div>
            </Show>
        </form>
    }
}
