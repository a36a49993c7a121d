//! Main Leptos application component and routing.
//!
//! The router has a single catch-all route. Every path is resolved by the
//! site's own [`RouteTable`], which knows both languages, aliases and
//! legacy redirects.

use crate::components::{Footer, Header, ScrollToTop, StandaloneShell};
use crate::pages::PageBody;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    path,
};
use lichtpunt_core::{Dispatch, RouteMatch, RouteTable, is_standalone};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <ScrollToTop/>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/") view=SitePage/>
                <Route path=path!("/*any") view=SitePage/>
            </Routes>
        </Router>
    }
}

/// Dispatches the current path to a page or a redirect.
#[component]
fn SitePage() -> impl IntoView {
    let location = use_location();
    let resolved = Memo::new(move |_| {
        location.pathname.with(|path| {
            (RouteTable::site().dispatch(path), is_standalone(path))
        })
    });

    move || match resolved.get() {
        (Dispatch::Redirect { to, .. }, _) => view! { <Redirect path=to/> }.into_any(),
        (Dispatch::Page(route), standalone) => {
            let body = route.clone();
            view! {
                <PageFrame route standalone>
                    <PageBody route=body/>
                </PageFrame>
            }
            .into_any()
        }
    }
}

/// Lays out a page body, with or without the site chrome.
#[component]
fn PageFrame(route: RouteMatch, standalone: bool, children: Children) -> impl IntoView {
    let locale = route.locale;

    if standalone {
        view! { <StandaloneShell locale>{children()}</StandaloneShell> }.into_any()
    } else {
        view! {
            <Header route/>
            <main class="container">{children()}</main>
            <Footer locale/>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(path: &str) -> String {
        let Dispatch::Page(route) = RouteTable::site().dispatch(path) else {
            panic!("{path} should dispatch to a page");
        };
        let standalone = is_standalone(path);

        Owner::new().with(|| {
            view! {
                <PageFrame route standalone>
                    <p>"body"</p>
                </PageFrame>
            }
            .to_html()
        })
    }

    #[test]
    fn landing_pages_render_without_chrome() {
        for path in ["/gratis-kennismaking", "/en/free-introduction"] {
            let html = render(path);
            assert!(html.contains("standalone-header"), "{path}");
            assert!(!html.contains("site-header"), "{path}");
            assert!(!html.contains("site-footer"), "{path}");
            assert!(html.contains("body"));
        }
    }

    #[test]
    fn regular_pages_render_with_chrome() {
        for path in ["/contact", "/en/contact", "/blog/beter-slapen"] {
            let html = render(path);
            assert!(html.contains("site-header"), "{path}");
            assert!(html.contains("site-footer"), "{path}");
            assert!(!html.contains("standalone-header"), "{path}");
        }
    }
}
