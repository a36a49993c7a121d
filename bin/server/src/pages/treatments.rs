//! Treatments overview.

use super::content::ContentPage;
use leptos::prelude::*;
use lichtpunt_core::content::TREATMENT_PAGES;
use lichtpunt_core::{Locale, PageId, UI, page_content};

#[component]
pub fn TreatmentsPage(locale: Locale) -> impl IntoView {
    view! {
        <ContentPage page=PageId::Treatments locale/>
        <TreatmentCards locale/>
    }
}

/// One card per treatment page, linking to it.
#[component]
pub fn TreatmentCards(locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);

    view! {
        <ul class="treatment-cards">
            {TREATMENT_PAGES
                .iter()
                .filter_map(|page| page_content(*page).map(|content| (*page, content.get(locale))))
                .map(|(page, content)| {
                    view! {
                        <li class="treatment-card">
                            <h3>
                                <a href=page.path(locale)>{content.heading}</a>
                            </h3>
                            <p>{content.description}</p>
                            <a href=page.path(locale) class="read-more">{ui.blog_read_more}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
