//! Site header.
//!
//! Morphs between the hero layout (wide bar centred on the landing photo,
//! inline nav, newsletter button) and the compact pill pinned to the top of
//! the viewport, which carries the drawer toggle. All state comes from the
//! shell's [`ShellView`]; clicks are reported back through callbacks.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use cartdept_core::{LinkClick, NavItem, ShellView};

use crate::components::icons as ic;
use crate::config::{COPYRIGHT, FOOTER_LINKS, NEWSLETTER_LABEL, SITE_NAME, assets};

stylance::import_crate_style!(css, "src/components/navbar.module.css");

// ============================================================================
// Layout
// ============================================================================

const TRANSITION_DRAWER_OPEN: &str = "transform 0.6s cubic-bezier(0.4, 0, 0.2, 1), \
    max-width 0.6s cubic-bezier(0.4, 0, 0.2, 1), \
    height 0.48s cubic-bezier(0.4, 0, 0.2, 1), \
    border-color 0.48s ease-out 0.24s, background-color 0.48s ease-out 0.24s, \
    box-shadow 0.48s ease-out 0.24s, backdrop-filter 0.48s ease-out 0.24s";

// Height waits for the drawer contents to fade before collapsing.
const TRANSITION_DRAWER_CLOSED: &str = "transform 0.6s cubic-bezier(0.4, 0, 0.2, 1), \
    max-width 0.6s cubic-bezier(0.4, 0, 0.2, 1), \
    height 0.48s cubic-bezier(0.4, 0, 0.2, 1) 0.3s, \
    border-color 0.48s ease-out 0.24s, background-color 0.48s ease-out 0.24s, \
    box-shadow 0.48s ease-out 0.24s, backdrop-filter 0.48s ease-out 0.24s";

fn nav_mask_style() -> String {
    format!(
        "-webkit-mask-image: url('{0}'); mask-image: url('{0}'); \
         -webkit-mask-size: 100% 100%; mask-size: 100% 100%; \
         -webkit-mask-repeat: no-repeat; mask-repeat: no-repeat; \
         -webkit-mask-position: center; mask-position: center;",
        assets::NAV_MASK
    )
}

/// Presentation of the header container for one shell state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderLayout {
    mounted: bool,
    drawer_visible: bool,
}

impl HeaderLayout {
    pub fn from_view(view: &ShellView) -> Self {
        Self {
            mounted: view.mode.is_mounted(),
            drawer_visible: view.drawer_visible,
        }
    }

    pub fn container_class(&self) -> String {
        let shape = if self.mounted { css::compact } else { css::hero };
        let height = if self.drawer_visible {
            css::expanded
        } else {
            css::collapsed
        };
        format!("{} {} {}", css::header, shape, height)
    }

    pub fn container_style(&self) -> String {
        let transform = if self.mounted {
            "translate(-50%, 1rem)"
        } else {
            "translate(-50%, calc(50vh - 50%))"
        };
        let transition = if self.drawer_visible {
            TRANSITION_DRAWER_OPEN
        } else {
            TRANSITION_DRAWER_CLOSED
        };
        format!("transform: {}; transition: {};", transform, transition)
    }

    pub fn logo_scale(&self) -> f32 {
        if self.mounted { 0.66 } else { 1.0 }
    }
}

/// Reads the modifier state of a link click.
fn link_click(ev: &MouseEvent) -> LinkClick {
    LinkClick {
        button: ev.button(),
        meta: ev.meta_key(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        shift: ev.shift_key(),
    }
}

/// Joins a base class with a state class.
fn with_state(base: &str, state: &str) -> String {
    format!("{} {}", base, state)
}

// ============================================================================
// NavBar Component
// ============================================================================

/// Site header with inline nav, newsletter button and drawer.
///
/// # Props
/// - `items`: primary nav entries
/// - `view`: current shell render flags
/// - `on_select`: plain clicks on nav links (href)
/// - `on_newsletter_toggle`: "Stay Up To Date" button
/// - `on_drawer_toggle`: drawer burger button
#[component]
pub fn NavBar(
    items: &'static [NavItem],
    view: Memo<ShellView>,
    on_select: Callback<String>,
    on_newsletter_toggle: Callback<()>,
    on_drawer_toggle: Callback<()>,
) -> impl IntoView {
    let layout = Memo::new(move |_| HeaderLayout::from_view(&view.get()));
    let mounted = Signal::derive(move || view.get().mode.is_mounted());
    let drawer_visible = Signal::derive(move || view.get().drawer_visible);
    let newsletter_open = Signal::derive(move || view.get().newsletter_open);

    let logo_style = move || {
        format!(
            "transform: scale({}); transform-origin: left center; \
             transition: transform 0.6s cubic-bezier(0.4, 0, 0.2, 1);",
            layout.get().logo_scale()
        )
    };

    view! {
        <div
            class=move || layout.get().container_class()
            style=move || layout.get().container_style()
        >
            <div class=css::inner>
                <div class=css::row>
                    <div class=css::logo style=logo_style>
                        <img
                            src=assets::LOGO
                            alt=format!("{} logo", SITE_NAME)
                            height="42"
                            width="170"
                        />
                    </div>

                    <div class=move || {
                        if mounted.get() {
                            with_state(css::inlineNav, css::inlineNavHidden)
                        } else {
                            css::inlineNav.to_string()
                        }
                    }>
                        <div class=css::maskLayer aria-hidden="true">
                            <div class=css::mask style=nav_mask_style()></div>
                        </div>
                        <nav aria-label="Primary" class=css::navSlot>
                            <NavList
                                orientation=Orientation::Horizontal
                                items=items
                                on_select=on_select
                            />
                        </nav>
                    </div>

                    <div class=css::actions>
                        <button
                            type="button"
                            class=move || {
                                if mounted.get() {
                                    with_state(css::newsletterButton, css::newsletterButtonHidden)
                                } else {
                                    css::newsletterButton.to_string()
                                }
                            }
                            on:click=move |_| on_newsletter_toggle.run(())
                            disabled=move || mounted.get()
                            aria-pressed=move || newsletter_open.get().to_string()
                            aria-haspopup="dialog"
                            aria-expanded=move || newsletter_open.get().to_string()
                        >
                            <span class=css::newsletterGlow aria-hidden="true"></span>
                            <span class=css::newsletterLabel>
                                <span class=css::plus><Icon icon=ic::PLUS /></span>
                                {NEWSLETTER_LABEL}
                            </span>
                        </button>

                        <button
                            type="button"
                            class=move || {
                                if mounted.get() {
                                    css::drawerToggle.to_string()
                                } else {
                                    with_state(css::drawerToggle, css::drawerToggleHidden)
                                }
                            }
                            on:click=move |_| on_drawer_toggle.run(())
                            disabled=move || !mounted.get()
                            aria-label="Toggle navigation drawer"
                            aria-expanded=move || drawer_visible.get().to_string()
                        >
                            <span class=css::srOnly>"Toggle navigation"</span>
                            <span class=move || {
                                if drawer_visible.get() {
                                    with_state(css::burgerLine, css::burgerTopOpen)
                                } else {
                                    with_state(css::burgerLine, css::burgerTop)
                                }
                            }></span>
                            <span class=move || {
                                if drawer_visible.get() {
                                    with_state(css::burgerLine, css::burgerBottomOpen)
                                } else {
                                    with_state(css::burgerLine, css::burgerBottom)
                                }
                            }></span>
                        </button>
                    </div>
                </div>

                <Drawer items=items visible=drawer_visible on_select=on_select />
            </div>
        </div>
    }
}

// ============================================================================
// Drawer
// ============================================================================

/// Expanded vertical menu with footer links.
#[component]
fn Drawer(
    items: &'static [NavItem],
    #[prop(into)] visible: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                if visible.get() {
                    with_state(css::drawer, css::drawerOpen)
                } else {
                    css::drawer.to_string()
                }
            }
            style=move || {
                if visible.get() {
                    "transition: opacity 0.3s ease-out 0.48s;"
                } else {
                    "transition: opacity 0.3s ease-out;"
                }
            }
            aria-hidden=move || (!visible.get()).to_string()
        >
            <div class=css::drawerNav>
                <nav aria-label="Primary">
                    <NavList
                        orientation=Orientation::Vertical
                        items=items
                        on_select=on_select
                    />
                </nav>
            </div>

            <div class=css::drawerFooter>
                <div class=css::footerLinks>
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class=css::footerLink>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=css::copyright>{COPYRIGHT}</div>
            </div>
        </div>
    }
}

// ============================================================================
// NavList
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// List of nav links. Plain primary clicks are intercepted and reported;
/// modified clicks fall through to the browser.
#[component]
fn NavList(
    orientation: Orientation,
    items: &'static [NavItem],
    on_select: Callback<String>,
) -> impl IntoView {
    let class = match orientation {
        Orientation::Horizontal => with_state(css::navList, css::navListRow),
        Orientation::Vertical => with_state(css::navList, css::navListColumn),
    };

    view! {
        <ul class=class>
            {items
                .iter()
                .map(|item| {
                    let href = item.href;
                    view! {
                        <li>
                            <a
                                href=href
                                class=css::navLink
                                on:click=move |ev: MouseEvent| {
                                    if !link_click(&ev).should_intercept() {
                                        return;
                                    }
                                    ev.prevent_default();
                                    on_select.run(href.to_string());
                                }
                            >
                                {item.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartdept_core::NavMode;

    fn view_with(mode: NavMode, drawer_visible: bool) -> ShellView {
        ShellView {
            mode,
            drawer_visible,
            ..Default::default()
        }
    }

    #[test]
    fn test_hero_layout() {
        let layout = HeaderLayout::from_view(&view_with(NavMode::Initial, false));
        assert!(layout.container_class().contains(css::hero));
        assert!(layout.container_class().contains(css::collapsed));
        assert!(layout.container_style().contains("calc(50vh - 50%)"));
        assert_eq!(layout.logo_scale(), 1.0);
    }

    #[test]
    fn test_compact_layout() {
        let layout = HeaderLayout::from_view(&view_with(NavMode::Mounted, false));
        assert!(layout.container_class().contains(css::compact));
        assert!(layout.container_style().contains("translate(-50%, 1rem)"));
        assert!(layout.container_style().contains("height 0.48s cubic-bezier(0.4, 0, 0.2, 1) 0.3s"));
        assert_eq!(layout.logo_scale(), 0.66);
    }

    #[test]
    fn test_drawer_expands_header() {
        let layout = HeaderLayout::from_view(&view_with(NavMode::Mounted, true));
        assert!(layout.container_class().contains(css::expanded));
        assert!(!layout.container_style().contains("0.48s cubic-bezier(0.4, 0, 0.2, 1) 0.3s"));
    }
}
