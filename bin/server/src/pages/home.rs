//! Home page component.

use super::content::{Cta, PageIntro, Sections};
use super::reviews::TestimonialCard;
use super::treatments::TreatmentCards;
use crate::components::{JsonLd, Seo};
use leptos::prelude::*;
use lichtpunt_core::business::{BUSINESS, TESTIMONIALS};
use lichtpunt_core::seo::{PageMeta, local_business_json_ld};
use lichtpunt_core::{Locale, PageId, UI, page_content};

const FEATURED_TESTIMONIALS: usize = 2;

/// The home page component.
#[component]
pub fn HomePage(locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);
    let content = page_content(PageId::Home).map(|c| c.get(locale));

    view! {
        {PageMeta::for_page(PageId::Home, locale, &BUSINESS).map(|meta| view! { <Seo meta/> })}
        <JsonLd value=local_business_json_ld(&BUSINESS, TESTIMONIALS, locale)/>
        <div class="home-page">
            {content.map(|content| view! {
                <PageIntro content/>
                <Cta cta=content.cta locale/>
            })}
            <TreatmentCards locale/>
            <section class="home-reviews">
                <h2>{ui.reviews_heading}</h2>
                {TESTIMONIALS
                    .iter()
                    .take(FEATURED_TESTIMONIALS)
                    .map(|testimonial| view! { <TestimonialCard testimonial locale/> })
                    .collect_view()}
                <a href=PageId::Reviews.path(locale)>{ui.nav_reviews}</a>
            </section>
            {content.map(|content| view! { <Sections sections=content.sections/> })}
        </div>
    }
}
