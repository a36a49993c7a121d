//! Contact page component and server functions.

mod server;

pub use server::submit_contact;

use super::content::{PageIntro, Sections};
use crate::components::{ContactForm, Seo};
use leptos::prelude::*;
use lichtpunt_contact::{FlowOptions, FormTag};
use lichtpunt_core::business::BUSINESS;
use lichtpunt_core::seo::PageMeta;
use lichtpunt_core::{Locale, PageId, UI, page_content};

#[component]
pub fn ContactPage(locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);
    let content = page_content(PageId::Contact).map(|c| c.get(locale));

    view! {
        {PageMeta::for_page(PageId::Contact, locale, &BUSINESS).map(|meta| view! { <Seo meta/> })}
        <div class="contact-page">
            {content.map(|content| view! { <PageIntro content/> })}
            <div class="contact-columns">
                <ContactForm
                    locale
                    tag=FormTag::CONTACT
                    options=FlowOptions::thank_you_redirect()
                />
                <aside class="contact-details">
                    <h2>{ui.footer_contact}</h2>
                    <p>
                        <a href=BUSINESS.phone_href()>{BUSINESS.phone}</a><br/>
                        <a href=BUSINESS.email_href()>{BUSINESS.email}</a>
                    </p>
                    <p>
                        {BUSINESS.street}<br/>
                        {format!("{} {}", BUSINESS.postal_code, BUSINESS.city)}
                    </p>
                </aside>
            </div>
            {content.map(|content| view! { <Sections sections=content.sections/> })}
        </div>
    }
}
