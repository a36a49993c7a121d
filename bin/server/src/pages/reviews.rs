//! Client testimonials.

use super::content::PageIntro;
use crate::components::{JsonLd, Seo};
use leptos::prelude::*;
use lichtpunt_core::business::{BUSINESS, TESTIMONIALS, Testimonial, average_rating};
use lichtpunt_core::seo::{PageMeta, local_business_json_ld};
use lichtpunt_core::{Locale, PageId, page_content};

#[component]
pub fn ReviewsPage(locale: Locale) -> impl IntoView {
    let content = page_content(PageId::Reviews).map(|c| c.get(locale));
    let average = average_rating(TESTIMONIALS);

    view! {
        {PageMeta::for_page(PageId::Reviews, locale, &BUSINESS).map(|meta| view! { <Seo meta/> })}
        <JsonLd value=local_business_json_ld(&BUSINESS, TESTIMONIALS, locale)/>
        <div class="reviews-page">
            {content.map(|content| view! { <PageIntro content/> })}
            {average.map(|rating| view! {
                <p class="average-rating">
                    <Stars rating={rating.round() as u8}/>
                    {format!(" {rating:.1} / 5 ({})", TESTIMONIALS.len())}
                </p>
            })}
            <div class="testimonials">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial locale/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial, locale: Locale) -> impl IntoView {
    view! {
        <blockquote class="testimonial">
            <Stars rating=testimonial.rating/>
            <p>{*testimonial.quote.get(locale)}</p>
            <footer>{testimonial.name}</footer>
        </blockquote>
    }
}

#[component]
fn Stars(rating: u8) -> impl IntoView {
    let rating = rating.min(5) as usize;
    view! {
        <span class="stars" aria-label=format!("{rating}/5")>
            {"★".repeat(rating)}
            {"☆".repeat(5 - rating)}
        </span>
    }
}
