//! Site header, footer and the bare wrapper used by ad landing pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use lichtpunt_core::business::BUSINESS;
use lichtpunt_core::{Locale, PageId, RouteMatch, UI};

/// Main navigation with a link to the same page in the other language.
#[component]
pub fn Header(route: RouteMatch) -> impl IntoView {
    let locale = route.locale;
    let ui = UI.get(locale);
    let nav = [
        (PageId::Home, ui.nav_home),
        (PageId::About, ui.nav_about),
        (PageId::Treatments, ui.nav_treatments),
        (PageId::Rates, ui.nav_rates),
        (PageId::Reviews, ui.nav_reviews),
        (PageId::Blog, ui.nav_blog),
        (PageId::Contact, ui.nav_contact),
    ];
    let current = route.page;

    view! {
        <header class="site-header">
            <a href=PageId::Home.path(locale) class="logo">{BUSINESS.name}</a>
            <nav class="site-nav">
                <ul>
                    {nav
                        .into_iter()
                        .map(|(page, label)| {
                            let is_current = page == current
                                || (page == PageId::Blog && current == PageId::BlogPost);
                            view! {
                                <li>
                                    <a href=page.path(locale) aria-current=is_current.then_some("page")>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            // Full page load so the server can update the language cookie.
            <a
                href=route.alternate_path()
                hreflang=locale.other().as_str()
                rel="external"
                class="language-switch"
            >
                {ui.switch_language}
            </a>
        </header>
    }
}

#[component]
pub fn Footer(locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);

    view! {
        <footer class="site-footer">
            <section>
                <h2>{ui.footer_contact}</h2>
                <address>
                    {BUSINESS.name}<br/>
                    {BUSINESS.street}<br/>
                    {format!("{} {}", BUSINESS.postal_code, BUSINESS.city)}<br/>
                    <a href=BUSINESS.phone_href()>{BUSINESS.phone}</a><br/>
                    <a href=BUSINESS.email_href()>{BUSINESS.email}</a>
                </address>
            </section>
            <section>
                <h2>{ui.footer_hours}</h2>
                <ul class="opening-hours">
                    {BUSINESS
                        .opening_hours
                        .iter()
                        .map(|hours| {
                            view! {
                                <li>
                                    <span>{*hours.days.get(locale)}</span>
                                    " "
                                    <span>{format!("{} - {}", hours.opens, hours.closes)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
            <section class="footer-legal">
                <p>{format!("{} {}", ui.footer_kvk, BUSINESS.kvk)}</p>
                <a href=PageId::Privacy.path(locale)>{ui.footer_privacy}</a>
            </section>
        </footer>
    }
}

/// Wrapper for ad landing pages: no navigation, no site footer.
#[component]
pub fn StandaloneShell(locale: Locale, children: Children) -> impl IntoView {
    let ui = UI.get(locale);

    view! {
        <div class="standalone">
            <header class="standalone-header">
                <span class="logo">{BUSINESS.name}</span>
                <a href=BUSINESS.phone_href() class="standalone-phone">{BUSINESS.phone}</a>
            </header>
            <main class="standalone-main">{children()}</main>
            <footer class="standalone-footer">
                <a href=PageId::Privacy.path(locale)>{ui.footer_privacy}</a>
            </footer>
        </div>
    }
}

/// Scrolls back to the top after client-side navigation.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
