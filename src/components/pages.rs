//! Page content for the current route.
//!
//! - `/` renders the landing photo
//! - `/<section>` renders the section copy from the content catalogue
//! - anything else renders the not-found page

use leptos::logging::warn;
use leptos::prelude::*;

use cartdept_core::{PageCopy, PageLayout, PageView, ShopItem};

use crate::app::AppContext;
use crate::config::{HOME_PHOTO_CAPTION, SITE_NAME, assets};

stylance::import_crate_style!(css, "src/components/pages.module.css");

/// Renders whatever the current route resolves to.
#[component]
pub fn Page() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    move || {
        let route = ctx.route.get();
        ctx.content.with_value(|catalog| match catalog.resolve(&route) {
            Ok(PageView::Home) => view! { <HomePage /> }.into_any(),
            Ok(PageView::Section { copy, layout, .. }) => view! {
                <SectionPage
                    copy=copy.clone()
                    layout=layout
                    items=catalog.shop_items().to_vec()
                />
            }
            .into_any(),
            Err(err) => {
                warn!("{}", err);
                view! { <NotFound path=route.to_string() /> }.into_any()
            }
        })
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class=css::home>
            <img class=css::homePhoto src=assets::HOME_PHOTO alt=SITE_NAME />
            <div class=css::caption>
                <p>{HOME_PHOTO_CAPTION}</p>
            </div>
        </div>
    }
}

#[component]
fn SectionPage(copy: PageCopy, layout: PageLayout, items: Vec<ShopItem>) -> impl IntoView {
    let PageCopy {
        eyebrow,
        heading,
        body,
    } = copy;

    let content = match layout {
        PageLayout::ShopGrid => view! {
            <div class=css::shopGrid>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        view! {
                            <div class=css::card>
                                <div class=css::cardDrop>{format!("Drop {}", index + 1)}</div>
                                <div>
                                    <p class=css::cardTag>{item.tag}</p>
                                    <p class=css::cardTitle>{item.title}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        PageLayout::FeaturePanel => {
            let blurb = format!(
                "A full-width module stands in for future story content for the {} release.",
                heading.to_lowercase()
            );
            view! {
                <div class=css::feature>
                    <p class=css::featureLabel>"Placeholder"</p>
                    <p class=css::featureTitle>"Single feature panel"</p>
                    <p class=css::featureBody>{blurb}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class=css::section>
            <header class=css::sectionHeader>
                <p class=css::eyebrow>{eyebrow}</p>
                <h1 class=css::heading>{heading}</h1>
                <p class=css::body>{body}</p>
            </header>
            {content}
        </section>
    }
}

/// Terminal state for routes with no content.
#[component]
fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class=css::notFound>
            <p class=css::eyebrow>"404"</p>
            <h1 class=css::heading>"Page not found"</h1>
            <p class=css::body>{format!("{} has nothing at {}.", SITE_NAME, path)}</p>
        </section>
    }
}
