//! Page components for the application.
//!
//! Each page is a Leptos component for one [`PageId`], along with any
//! server functions specific to that page.

pub mod blog;
pub mod contact;
pub mod content;
pub mod home;
pub mod landing;
pub mod reviews;
pub mod treatments;

pub use blog::{BlogPage, BlogPostPage};
pub use contact::ContactPage;
pub use content::ContentPage;
pub use home::HomePage;
pub use landing::LandingPage;
pub use reviews::ReviewsPage;
pub use treatments::TreatmentsPage;

use leptos::prelude::*;
use lichtpunt_core::{PageId, RouteMatch};

/// The body of a matched page.
#[component]
pub fn PageBody(route: RouteMatch) -> impl IntoView {
    let locale = route.locale;

    match route.page {
        PageId::Home => view! { <HomePage locale/> }.into_any(),
        PageId::Treatments => view! { <TreatmentsPage locale/> }.into_any(),
        PageId::Reviews => view! { <ReviewsPage locale/> }.into_any(),
        PageId::Contact => view! { <ContactPage locale/> }.into_any(),
        PageId::Blog => view! { <BlogPage locale/> }.into_any(),
        PageId::BlogPost => {
            let slug = route.slug.unwrap_or_default();
            view! { <BlogPostPage locale slug/> }.into_any()
        }
        page @ (PageId::IntroOffer | PageId::BackPainOffer) => {
            view! { <LandingPage page locale/> }.into_any()
        }
        page => view! { <ContentPage page locale/> }.into_any(),
    }
}
