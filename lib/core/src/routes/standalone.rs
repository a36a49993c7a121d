//! Allow-list of ad-landing paths rendered without header and footer.

use super::{Layout, PageSpec, SITE_PAGES};
use crate::locale::Locale;
use std::sync::LazyLock;

/// Exact-match set of paths that render standalone.
#[derive(Debug, Clone, Default)]
pub struct StandaloneAllowList {
    paths: Vec<String>,
}

static SITE_ALLOW_LIST: LazyLock<StandaloneAllowList> =
    LazyLock::new(|| StandaloneAllowList::from_pages(SITE_PAGES));

impl StandaloneAllowList {
    /// Collects every path (both locales, primary and aliases) of the
    /// standalone pages in `pages`.
    #[must_use]
    pub fn from_pages(pages: &[PageSpec]) -> Self {
        let paths = pages
            .iter()
            .filter(|spec| spec.layout == Layout::Standalone)
            .flat_map(|spec| Locale::ALL.into_iter().flat_map(|locale| spec.paths(locale)))
            .collect();
        Self { paths }
    }

    /// The allow-list for this site.
    #[must_use]
    pub fn site() -> &'static Self {
        &SITE_ALLOW_LIST
    }

    /// Exact string comparison; no normalization, no prefix matching.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|allowed| allowed == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

/// Whether the current path renders without the shared chrome.
#[must_use]
pub fn is_standalone(path: &str) -> bool {
    StandaloneAllowList::site().contains(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{Dispatch, PageId, RouteTable};

    #[test]
    fn both_variants_in_both_locales_are_listed() {
        for path in [
            "/gratis-kennismaking",
            "/kennismaking-gratis",
            "/en/free-introduction",
            "/en/introduction-free",
            "/actie-rugpijn",
            "/rugpijn-actie",
            "/en/back-pain-offer",
            "/en/offer-back-pain",
        ] {
            assert!(is_standalone(path), "{path}");
        }
        assert_eq!(StandaloneAllowList::site().iter().count(), 8);
    }

    #[test]
    fn regular_pages_keep_chrome() {
        for path in ["/", "/en", "/contact", "/bedankt", "/blog/gratis-kennismaking"] {
            assert!(!is_standalone(path), "{path}");
        }
    }

    #[test]
    fn match_is_exact() {
        assert!(!is_standalone("/gratis-kennismaking/"));
        assert!(!is_standalone("/gratis-kennismaking/extra"));
        assert!(!is_standalone("/gratis"));
    }

    #[test]
    fn every_listed_path_dispatches_to_a_standalone_page() {
        let table = RouteTable::site();
        for path in StandaloneAllowList::site().iter() {
            match table.dispatch(path) {
                Dispatch::Page(matched) => {
                    assert!(matches!(
                        matched.page,
                        PageId::IntroOffer | PageId::BackPainOffer
                    ));
                    assert_eq!(matched.page.layout(), Layout::Standalone);
                }
                other => panic!("{path} dispatched to {other:?}"),
            }
        }
    }
}
