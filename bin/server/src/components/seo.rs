use leptos::prelude::*;
use leptos_meta::{Html, Link, Meta, Title};
use lichtpunt_core::seo::PageMeta;
use serde_json::Value as JsonValue;

/// Title, description, canonical and hreflang links for the current page.
#[component]
pub fn Seo(meta: PageMeta) -> impl IntoView {
    let og_locale = meta.locale.content_locale().replace('-', "_");

    view! {
        <Html {..} lang=meta.locale.as_str()/>
        <Title text=meta.title.clone()/>
        <Meta name="description" content=meta.description.clone()/>
        <Meta name="robots" content=meta.robots()/>
        <Meta property="og:title" content=meta.title.clone()/>
        <Meta property="og:description" content=meta.description.clone()/>
        <Meta property="og:url" content=meta.canonical.clone()/>
        <Meta property="og:locale" content=og_locale/>
        <Link rel="canonical" href=meta.canonical.clone()/>
        {meta
            .alternates
            .into_iter()
            .map(|alternate| {
                view! { <Link rel="alternate" hreflang=alternate.hreflang href=alternate.href/> }
            })
            .collect_view()}
    }
}

/// Embeds schema.org data as a `<script type="application/ld+json">`.
#[component]
pub fn JsonLd(value: JsonValue) -> impl IntoView {
    // Keeps CMS text from closing the script element.
    let json = value.to_string().replace("</", "<\\/");
    view! { <script type="application/ld+json" inner_html=json></script> }
}
