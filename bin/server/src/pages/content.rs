//! Generic content page.

use crate::components::Seo;
use leptos::prelude::*;
use lichtpunt_core::business::BUSINESS;
use lichtpunt_core::content::{CallToAction, Highlight, PageContent, Section};
use lichtpunt_core::seo::PageMeta;
use lichtpunt_core::{Locale, PageId, page_content};

/// Renders a page entirely from its static bilingual content.
#[component]
pub fn ContentPage(page: PageId, locale: Locale) -> impl IntoView {
    let Some(content) = page_content(page) else {
        return ().into_any();
    };
    let content = content.get(locale);

    view! {
        {PageMeta::for_page(page, locale, &BUSINESS).map(|meta| view! { <Seo meta/> })}
        <article class=format!("content-page page-{}", page.to_string().to_lowercase())>
            <PageIntro content/>
            <Highlights items=content.highlights/>
            <Sections sections=content.sections/>
            <Cta cta=content.cta locale/>
        </article>
    }
    .into_any()
}

/// Heading and lead paragraph.
#[component]
pub fn PageIntro(content: &'static PageContent) -> impl IntoView {
    view! {
        <header class="page-intro">
            <h1>{content.heading}</h1>
            <p class="lead">{content.intro}</p>
        </header>
    }
}

#[component]
pub fn Highlights(items: &'static [Highlight]) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <dl class="highlights">
                {items
                    .iter()
                    .map(|item| view! {
                        <div class="highlight">
                            <dt>{item.label}</dt>
                            <dd>{item.value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        }
    })
}

#[component]
pub fn Sections(sections: &'static [Section]) -> impl IntoView {
    sections
        .iter()
        .map(|section| {
            view! {
                <section class="content-section">
                    <h2>{section.heading}</h2>
                    {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </section>
            }
        })
        .collect_view()
}

#[component]
pub fn Cta(cta: Option<CallToAction>, locale: Locale) -> impl IntoView {
    cta.map(|cta| {
        view! {
            <p class="cta">
                <a href=cta.target.path(locale) class="cta-button">{cta.label}</a>
            </p>
        }
    })
}
