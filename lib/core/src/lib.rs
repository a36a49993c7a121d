//! Core building blocks of the Lichtpunt practice website.
//!
//! This crate is shared by the server and the hydrated browser bundle, so
//! it holds only pure logic and static data: locale resolution, localized
//! path building, the route catalogue and dispatcher, bilingual content,
//! SEO metadata and sitemap rendering.

pub mod business;
pub mod content;
pub mod id;
pub mod locale;
pub mod paths;
pub mod routes;
pub mod seo;
pub mod sitemap;

pub use content::{Localized, PageContent, UI, UiText, page_content};
pub use id::SubmissionId;
pub use locale::{LOCALE_COOKIE, Locale, resolve_locale};
pub use paths::{build_localized_path, localized_path, strip_locale};
pub use routes::{Dispatch, PageId, RedirectReason, RouteMatch, RouteTable, is_standalone};
