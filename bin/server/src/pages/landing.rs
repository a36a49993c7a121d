//! Ad landing pages with an inline contact form.

use super::content::{Highlights, PageIntro, Sections};
use crate::components::{ContactForm, Seo};
use leptos::prelude::*;
use lichtpunt_contact::FlowOptions;
use lichtpunt_core::business::BUSINESS;
use lichtpunt_core::seo::PageMeta;
use lichtpunt_core::{Locale, PageId, page_content};
use std::time::Duration;

/// How long the inline success message stays before the form is reusable.
const SUCCESS_MESSAGE_DURATION: Duration = Duration::from_secs(8);

/// Form tag sent with submissions from a landing page.
fn form_tag(page: PageId) -> &'static str {
    match page {
        PageId::BackPainOffer => "back-pain-offer",
        _ => "intro-offer",
    }
}

#[component]
pub fn LandingPage(page: PageId, locale: Locale) -> impl IntoView {
    let content = page_content(page).map(|c| c.get(locale));

    view! {
        {PageMeta::for_page(page, locale, &BUSINESS).map(|meta| view! { <Seo meta/> })}
        <div class="landing-page">
            {content.map(|content| view! {
                <PageIntro content/>
                <Highlights items=content.highlights/>
            })}
            <section class="landing-form">
                <ContactForm
                    locale
                    tag=form_tag(page)
                    options=FlowOptions::inline(SUCCESS_MESSAGE_DURATION)
                />
            </section>
            {content.map(|content| view! { <Sections sections=content.sections/> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_pages_have_distinct_tags() {
        assert_eq!(form_tag(PageId::IntroOffer), "intro-offer");
        assert_eq!(form_tag(PageId::BackPainOffer), "back-pain-offer");
    }
}
