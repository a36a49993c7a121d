//! Bilingual page content.
//!
//! Every content page is a [`Localized<PageContent>`] picked by locale and
//! rendered by one generic page component, so the page body is data rather
//! than per-page branching.

mod pages;
mod ui;

use crate::locale::Locale;
use crate::routes::PageId;

pub use ui::{UI, UiText};

/// A value that exists in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub nl: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(nl: T, en: T) -> Self {
        Self { nl, en }
    }

    /// The value for `locale`.
    pub const fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Nl => &self.nl,
            Locale::En => &self.en,
        }
    }
}

/// A titled block of paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// A short label/value pair, used for prices and quick facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
}

/// Button linking to another page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: PageId,
}

/// Shared shape of every content page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    /// Document title, without the site name suffix.
    pub title: &'static str,
    /// Meta description.
    pub description: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
    pub highlights: &'static [Highlight],
    pub cta: Option<CallToAction>,
}

/// Content for a page, if the page is content-driven.
///
/// Blog posts come from the CMS and have no static content.
#[must_use]
pub fn page_content(page: PageId) -> Option<&'static Localized<PageContent>> {
    pages::lookup(page)
}

/// Pages listed on the treatments overview, in display order.
pub const TREATMENT_PAGES: &[PageId] = &[
    PageId::BackNeck,
    PageId::StressBurnout,
    PageId::Headache,
    PageId::Sleep,
    PageId::SportsInjuries,
    PageId::Pregnancy,
    PageId::Massage,
    PageId::Acupuncture,
];
