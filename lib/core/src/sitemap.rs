//! XML sitemap generation from the route catalogue.
//!
//! The sitemap reads the same [`PageSpec`] list as the router, so the two
//! cannot drift apart.

use crate::locale::Locale;
use crate::routes::{ChangeFreq, PageId, PageSpec};
use std::fmt::Write;

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    pub loc: String,
    /// `(hreflang, href)` pairs.
    pub alternates: Vec<(&'static str, String)>,
    /// `YYYY-MM-DD`.
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

/// Entries for every locale variant of every listed page.
///
/// Aliases, redirects and pages without sitemap hints are skipped.
#[must_use]
pub fn page_urls(base_url: &str, pages: &[PageSpec]) -> Vec<SitemapUrl> {
    let base_url = base_url.trim_end_matches('/');
    let mut urls = Vec::new();

    for spec in pages {
        let Some(hints) = spec.sitemap else {
            continue;
        };
        let alternates: Vec<(&'static str, String)> = Locale::ALL
            .iter()
            .map(|locale| (locale.as_str(), format!("{base_url}{}", spec.path(*locale))))
            .collect();

        for locale in Locale::ALL {
            urls.push(SitemapUrl {
                loc: format!("{base_url}{}", spec.path(locale)),
                alternates: alternates.clone(),
                lastmod: None,
                changefreq: Some(hints.changefreq),
                priority: Some(hints.priority),
            });
        }
    }

    urls
}

/// Entry for one blog post in `locale`.
///
/// Posts share their slug across languages, so both alternates use `slug`.
#[must_use]
pub fn post_url(base_url: &str, slug: &str, locale: Locale, lastmod: Option<String>) -> SitemapUrl {
    let base_url = base_url.trim_end_matches('/');
    let href = |locale: Locale| format!("{base_url}{}", PageId::BlogPost.path_with_slug(locale, slug));

    SitemapUrl {
        loc: href(locale),
        alternates: Locale::ALL
            .iter()
            .map(|locale| (locale.as_str(), href(*locale)))
            .collect(),
        lastmod,
        changefreq: Some(ChangeFreq::Monthly),
        priority: Some(0.6),
    }
}

/// Renders a `urlset` document.
#[must_use]
pub fn render_sitemap(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for url in urls {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&url.loc));
        for (hreflang, href) in &url.alternates {
            let _ = writeln!(
                xml,
                "    <xhtml:link rel=\"alternate\" hreflang=\"{hreflang}\" href=\"{}\"/>",
                escape_xml(href)
            );
        }
        if let Some(lastmod) = &url.lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(lastmod));
        }
        if let Some(changefreq) = url.changefreq {
            let _ = writeln!(xml, "    <changefreq>{}</changefreq>", changefreq.as_str());
        }
        if let Some(priority) = url.priority {
            let _ = writeln!(xml, "    <priority>{priority:.1}</priority>");
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RouteTable, SITE_PAGES};

    const BASE: &str = "https://www.praktijklichtpunt.nl";

    #[test]
    fn lists_both_locales_with_alternates() {
        let urls = page_urls(BASE, SITE_PAGES);
        let about: Vec<_> = urls
            .iter()
            .filter(|u| u.loc.ends_with("/over-mij") || u.loc.ends_with("/en/about-me"))
            .collect();
        assert_eq!(about.len(), 2);
        assert_eq!(about[0].alternates, about[1].alternates);
        assert_eq!(about[0].alternates[1].1, format!("{BASE}/en/about-me"));
    }

    #[test]
    fn skips_noindex_pages_aliases_and_patterns() {
        let locs: Vec<String> = page_urls(BASE, SITE_PAGES)
            .into_iter()
            .map(|u| u.loc)
            .collect();
        for path in [
            "/bedankt",
            "/gratis-kennismaking",
            "/kennismaking-gratis",
            "/blog/:slug",
            "/rug-nek-klachten",
        ] {
            assert!(!locs.contains(&format!("{BASE}{path}")), "{path}");
        }
        assert!(locs.contains(&format!("{BASE}/")));
        assert!(locs.contains(&format!("{BASE}/en")));
    }

    #[test]
    fn every_listed_url_dispatches_to_a_page() {
        let table = RouteTable::site();
        for url in page_urls(BASE, SITE_PAGES) {
            let path = url.loc.trim_start_matches(BASE);
            assert!(
                matches!(table.dispatch(path), crate::routes::Dispatch::Page(_)),
                "{path}"
            );
        }
    }

    #[test]
    fn post_entries_link_both_languages() {
        let url = post_url(
            "https://www.praktijklichtpunt.nl/",
            "beter-slapen",
            Locale::En,
            Some("2025-02-03".to_string()),
        );
        assert_eq!(url.loc, format!("{BASE}/en/blog/beter-slapen"));
        assert_eq!(
            url.alternates,
            vec![
                ("nl", format!("{BASE}/blog/beter-slapen")),
                ("en", format!("{BASE}/en/blog/beter-slapen")),
            ]
        );
        assert_eq!(url.lastmod.as_deref(), Some("2025-02-03"));
    }

    #[test]
    fn renders_escaped_xml() {
        let xml = render_sitemap(&[SitemapUrl {
            loc: format!("{BASE}/blog/a&b"),
            alternates: vec![("nl", format!("{BASE}/blog/a&b"))],
            lastmod: Some("2025-03-01".to_string()),
            changefreq: Some(ChangeFreq::Monthly),
            priority: Some(0.5),
        }]);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://www.praktijklichtpunt.nl/blog/a&amp;b</loc>"));
        assert!(xml.contains("hreflang=\"nl\""));
        assert!(xml.contains("<lastmod>2025-03-01</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
