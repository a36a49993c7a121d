//! Shared UI components.

mod chrome;
mod contact_form;
mod seo;

pub use chrome::{Footer, Header, ScrollToTop, StandaloneShell};
pub use contact_form::ContactForm;
pub use seo::{JsonLd, Seo};
