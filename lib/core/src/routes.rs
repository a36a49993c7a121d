//! The site's route catalogue and dispatcher.
//!
//! Every page is declared once in [`SITE_PAGES`]. The router table, the
//! standalone allow-list and the sitemap are all derived from it, so a new
//! page only has to be added here.

pub mod standalone;

use crate::locale::Locale;
use crate::paths::{localized_path, normalize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub use standalone::{StandaloneAllowList, is_standalone};

/// Path segment placeholder for the blog post slug.
pub const SLUG_PARAM: &str = ":slug";

/// Logical pages of the site, independent of language.
///
/// The discriminant order matches the order of [`SITE_PAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    About,
    Treatments,
    BackNeck,
    StressBurnout,
    Headache,
    Sleep,
    SportsInjuries,
    Pregnancy,
    Massage,
    Acupuncture,
    Rates,
    Reviews,
    Contact,
    ThankYou,
    Blog,
    BlogPost,
    Privacy,
    IntroOffer,
    BackPainOffer,
}

/// How a page is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Shared header and footer around the page.
    Chrome,
    /// Bare page for ad traffic, no navigation.
    Standalone,
}

/// How often a page is expected to change, for the sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Sitemap settings for a page. Pages without hints are not listed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapHints {
    pub priority: f32,
    pub changefreq: ChangeFreq,
}

const fn hints(priority: f32, changefreq: ChangeFreq) -> Option<SitemapHints> {
    Some(SitemapHints {
        priority,
        changefreq,
    })
}

/// Declaration of one logical page and all URLs it answers to.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub id: PageId,
    /// Canonical Dutch path.
    pub nl: &'static str,
    /// Explicit English path; when absent it is built from `nl`.
    pub en: Option<&'static str>,
    /// Extra Dutch paths serving the same page.
    pub nl_aliases: &'static [&'static str],
    /// Extra English paths serving the same page.
    pub en_aliases: &'static [&'static str],
    pub layout: Layout,
    pub sitemap: Option<SitemapHints>,
}

impl PageSpec {
    const fn page(id: PageId, nl: &'static str, en: Option<&'static str>) -> Self {
        Self {
            id,
            nl,
            en,
            nl_aliases: &[],
            en_aliases: &[],
            layout: Layout::Chrome,
            sitemap: hints(0.7, ChangeFreq::Monthly),
        }
    }

    const fn with_sitemap(mut self, sitemap: Option<SitemapHints>) -> Self {
        self.sitemap = sitemap;
        self
    }

    const fn standalone(
        mut self,
        nl_aliases: &'static [&'static str],
        en_aliases: &'static [&'static str],
    ) -> Self {
        self.layout = Layout::Standalone;
        self.nl_aliases = nl_aliases;
        self.en_aliases = en_aliases;
        self.sitemap = None;
        self
    }

    /// The primary path of this page in `locale`.
    #[must_use]
    pub fn path(&self, locale: Locale) -> String {
        match (locale, self.en) {
            (Locale::Nl, _) => self.nl.to_string(),
            (Locale::En, Some(en)) => en.to_string(),
            (Locale::En, None) => localized_path(self.nl, Locale::En),
        }
    }

    /// Primary path followed by aliases, for one locale.
    #[must_use]
    pub fn paths(&self, locale: Locale) -> Vec<String> {
        let aliases = match locale {
            Locale::Nl => self.nl_aliases,
            Locale::En => self.en_aliases,
        };
        std::iter::once(self.path(locale))
            .chain(aliases.iter().map(|alias| (*alias).to_string()))
            .collect()
    }
}

/// All pages, in [`PageId`] order.
pub static SITE_PAGES: &[PageSpec] = &[
    PageSpec::page(PageId::Home, "/", None).with_sitemap(hints(1.0, ChangeFreq::Weekly)),
    PageSpec::page(PageId::About, "/over-mij", Some("/en/about-me")),
    PageSpec::page(PageId::Treatments, "/behandelingen", Some("/en/treatments"))
        .with_sitemap(hints(0.9, ChangeFreq::Monthly)),
    PageSpec::page(
        PageId::BackNeck,
        "/rug-nek-problemen",
        Some("/en/back-neck-problems"),
    ),
    PageSpec::page(
        PageId::StressBurnout,
        "/stress-burn-out",
        Some("/en/stress-burnout"),
    ),
    PageSpec::page(
        PageId::Headache,
        "/hoofdpijn-migraine",
        Some("/en/headache-migraine"),
    ),
    PageSpec::page(PageId::Sleep, "/slaapproblemen", Some("/en/sleep-problems")),
    PageSpec::page(
        PageId::SportsInjuries,
        "/sportblessures",
        Some("/en/sports-injuries"),
    ),
    PageSpec::page(PageId::Pregnancy, "/zwangerschap", Some("/en/pregnancy")),
    PageSpec::page(
        PageId::Massage,
        "/ontspanningsmassage",
        Some("/en/relaxation-massage"),
    ),
    PageSpec::page(PageId::Acupuncture, "/acupunctuur", None),
    PageSpec::page(PageId::Rates, "/tarieven", Some("/en/rates")),
    PageSpec::page(PageId::Reviews, "/ervaringen", Some("/en/reviews")),
    PageSpec::page(PageId::Contact, "/contact", None).with_sitemap(hints(0.8, ChangeFreq::Yearly)),
    PageSpec::page(PageId::ThankYou, "/bedankt", Some("/en/thank-you")).with_sitemap(None),
    PageSpec::page(PageId::Blog, "/blog", None).with_sitemap(hints(0.8, ChangeFreq::Weekly)),
    PageSpec::page(PageId::BlogPost, "/blog/:slug", None).with_sitemap(None),
    PageSpec::page(PageId::Privacy, "/privacy", None).with_sitemap(hints(0.2, ChangeFreq::Yearly)),
    PageSpec::page(
        PageId::IntroOffer,
        "/gratis-kennismaking",
        Some("/en/free-introduction"),
    )
    .standalone(&["/kennismaking-gratis"], &["/en/introduction-free"]),
    PageSpec::page(
        PageId::BackPainOffer,
        "/actie-rugpijn",
        Some("/en/back-pain-offer"),
    )
    .standalone(&["/rugpijn-actie"], &["/en/offer-back-pain"]),
];

/// Old URLs that still receive traffic, mapped to their replacement.
pub static LEGACY_REDIRECTS: &[(&str, &str)] = &[
    ("/rug-nek-klachten", "/rug-nek-problemen"),
    ("/en/rug-nek-klachten", "/en/back-neck-problems"),
    ("/over-ons", "/over-mij"),
    ("/en/about", "/en/about-me"),
    ("/behandeling", "/behandelingen"),
    ("/burn-out", "/stress-burn-out"),
    ("/afspraak", "/contact"),
    ("/en/appointment", "/en/contact"),
];

impl PageId {
    /// The declaration of this page.
    #[must_use]
    pub fn spec(self) -> &'static PageSpec {
        &SITE_PAGES[self as usize]
    }

    /// Localized path for internal links.
    ///
    /// For [`PageId::BlogPost`] this is the pattern; use
    /// [`PageId::path_with_slug`] instead.
    #[must_use]
    pub fn path(self, locale: Locale) -> String {
        self.spec().path(locale)
    }

    /// Localized path with the `:slug` segment filled in.
    #[must_use]
    pub fn path_with_slug(self, locale: Locale, slug: &str) -> String {
        self.path(locale).replace(SLUG_PARAM, slug)
    }

    #[must_use]
    pub fn layout(self) -> Layout {
        self.spec().layout
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Why the dispatcher sent the visitor elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// An old URL with a known replacement.
    Legacy,
    /// Nothing matched; back to the Dutch home page.
    Fallback,
}

/// What a table entry does when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Page { page: PageId, locale: Locale },
    Redirect { to: &'static str },
    Fallback,
}

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: String,
    pub target: RouteTarget,
}

/// A matched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: PageId,
    pub locale: Locale,
    /// The `:slug` segment, for blog posts.
    pub slug: Option<String>,
}

impl RouteMatch {
    /// Path of the same page in the other language.
    #[must_use]
    pub fn alternate_path(&self) -> String {
        let other = self.locale.other();
        match &self.slug {
            Some(slug) => self.page.path_with_slug(other, slug),
            None => self.page.path(other),
        }
    }
}

/// Outcome of dispatching a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Page(RouteMatch),
    Redirect {
        to: String,
        reason: RedirectReason,
    },
}

/// Ordered route table; the first matching entry wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

static SITE_TABLE: LazyLock<RouteTable> =
    LazyLock::new(|| RouteTable::build(SITE_PAGES, LEGACY_REDIRECTS));

impl RouteTable {
    /// Builds a table: primary page paths (Dutch then English per page),
    /// then aliases, then legacy redirects, then the wildcard.
    #[must_use]
    pub fn build(pages: &[PageSpec], redirects: &[(&'static str, &'static str)]) -> Self {
        let mut entries = Vec::new();

        for spec in pages {
            for locale in Locale::ALL {
                entries.push(RouteEntry {
                    pattern: spec.path(locale),
                    target: RouteTarget::Page {
                        page: spec.id,
                        locale,
                    },
                });
            }
        }

        for spec in pages {
            for locale in Locale::ALL {
                let aliases = match locale {
                    Locale::Nl => spec.nl_aliases,
                    Locale::En => spec.en_aliases,
                };
                entries.extend(aliases.iter().map(|alias| RouteEntry {
                    pattern: (*alias).to_string(),
                    target: RouteTarget::Page {
                        page: spec.id,
                        locale,
                    },
                }));
            }
        }

        entries.extend(redirects.iter().map(|(from, to)| RouteEntry {
            pattern: (*from).to_string(),
            target: RouteTarget::Redirect { to: *to },
        }));

        entries.push(RouteEntry {
            pattern: "*".to_string(),
            target: RouteTarget::Fallback,
        });

        Self { entries }
    }

    /// The table for this site.
    #[must_use]
    pub fn site() -> &'static Self {
        &SITE_TABLE
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Dispatches a URL path (without query string).
    #[must_use]
    pub fn dispatch(&self, path: &str) -> Dispatch {
        let path = normalize(path);
        for entry in &self.entries {
            let Some(slug) = match_pattern(&entry.pattern, &path) else {
                continue;
            };
            return match &entry.target {
                RouteTarget::Page { page, locale } => Dispatch::Page(RouteMatch {
                    page: *page,
                    locale: *locale,
                    slug,
                }),
                RouteTarget::Redirect { to } => Dispatch::Redirect {
                    to: (*to).to_string(),
                    reason: RedirectReason::Legacy,
                },
                RouteTarget::Fallback => Dispatch::Redirect {
                    to: PageId::Home.path(Locale::Nl),
                    reason: RedirectReason::Fallback,
                },
            };
        }

        Dispatch::Redirect {
            to: PageId::Home.path(Locale::Nl),
            reason: RedirectReason::Fallback,
        }
    }
}

/// Matches a normalized path against a pattern.
///
/// Returns `None` on mismatch, `Some(None)` on a plain match and
/// `Some(Some(slug))` when the pattern captured a slug.
fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    if pattern == "*" {
        return Some(None);
    }

    let mut wanted = pattern.split('/').filter(|s| !s.is_empty());
    let mut actual = path.split('/').filter(|s| !s.is_empty());
    let mut slug = None;

    loop {
        match (wanted.next(), actual.next()) {
            (None, None) => return Some(slug),
            (Some(SLUG_PARAM), Some(segment)) => slug = Some(segment.to_string()),
            (Some(expected), Some(segment)) if expected == segment => {}
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::resolve_locale;

    fn page(page: PageId, locale: Locale) -> Dispatch {
        Dispatch::Page(RouteMatch {
            page,
            locale,
            slug: None,
        })
    }

    #[test]
    fn site_pages_follow_page_id_order() {
        for (index, spec) in SITE_PAGES.iter().enumerate() {
            assert_eq!(spec.id as usize, index, "{} is out of order", spec.id);
        }
    }

    #[test]
    fn dispatches_both_locales() {
        let table = RouteTable::site();
        assert_eq!(table.dispatch("/"), page(PageId::Home, Locale::Nl));
        assert_eq!(table.dispatch("/en"), page(PageId::Home, Locale::En));
        assert_eq!(table.dispatch("/over-mij"), page(PageId::About, Locale::Nl));
        assert_eq!(table.dispatch("/en/about-me"), page(PageId::About, Locale::En));
        assert_eq!(table.dispatch("/en/contact"), page(PageId::Contact, Locale::En));
        assert_eq!(
            table.dispatch("/en/acupunctuur"),
            page(PageId::Acupuncture, Locale::En)
        );
    }

    #[test]
    fn trailing_slash_still_matches() {
        let table = RouteTable::site();
        assert_eq!(table.dispatch("/contact/"), page(PageId::Contact, Locale::Nl));
        assert_eq!(table.dispatch("/en/"), page(PageId::Home, Locale::En));
    }

    #[test]
    fn blog_post_captures_slug() {
        let table = RouteTable::site();
        assert_eq!(
            table.dispatch("/en/blog/better-sleep"),
            Dispatch::Page(RouteMatch {
                page: PageId::BlogPost,
                locale: Locale::En,
                slug: Some("better-sleep".to_string()),
            })
        );
        assert_eq!(table.dispatch("/blog"), page(PageId::Blog, Locale::Nl));
    }

    #[test]
    fn legacy_path_redirects_to_replacement() {
        let table = RouteTable::site();
        assert_eq!(
            table.dispatch("/rug-nek-klachten"),
            Dispatch::Redirect {
                to: "/rug-nek-problemen".to_string(),
                reason: RedirectReason::Legacy,
            }
        );
    }

    #[test]
    fn unknown_path_falls_back_to_dutch_home() {
        let table = RouteTable::site();
        for path in ["/this-does-not-exist", "/en/nope", "/blog/a/b", "/contactx"] {
            assert_eq!(
                table.dispatch(path),
                Dispatch::Redirect {
                    to: "/".to_string(),
                    reason: RedirectReason::Fallback,
                },
                "{path}"
            );
        }
    }

    #[test]
    fn first_match_wins() {
        let pages = [PageSpec::page(PageId::Home, "/", None)];
        let table = RouteTable::build(&pages, &[("/", "/elsewhere")]);
        assert_eq!(table.dispatch("/"), page(PageId::Home, Locale::Nl));
        assert_eq!(table.entries().last().map(|e| &e.target), Some(&RouteTarget::Fallback));
    }

    #[test]
    fn matched_locale_agrees_with_path() {
        for entry in RouteTable::site().entries() {
            if let RouteTarget::Page { locale, .. } = entry.target {
                assert_eq!(locale, resolve_locale(&entry.pattern), "{}", entry.pattern);
            }
        }
    }

    #[test]
    fn every_redirect_lands_on_a_page() {
        let table = RouteTable::site();
        for (_, to) in LEGACY_REDIRECTS {
            assert!(matches!(table.dispatch(to), Dispatch::Page(_)), "{to}");
        }
    }

    #[test]
    fn no_pattern_is_declared_twice() {
        let mut seen = std::collections::HashSet::new();
        for entry in RouteTable::site().entries() {
            assert!(seen.insert(entry.pattern.clone()), "{}", entry.pattern);
        }
    }

    #[test]
    fn alternate_path_switches_language() {
        let about = RouteMatch {
            page: PageId::About,
            locale: Locale::Nl,
            slug: None,
        };
        assert_eq!(about.alternate_path(), "/en/about-me");

        let post = RouteMatch {
            page: PageId::BlogPost,
            locale: Locale::En,
            slug: Some("slaap".to_string()),
        };
        assert_eq!(post.alternate_path(), "/blog/slaap");
    }

    #[test]
    fn paths_without_english_entry_use_builder() {
        for spec in SITE_PAGES.iter().filter(|spec| spec.en.is_none()) {
            assert_eq!(
                spec.path(Locale::En),
                localized_path(spec.nl, Locale::En),
                "{}",
                spec.id
            );
        }
    }
}
