//! Blog content model.

use chrono::{DateTime, Datelike, Utc};
use lichtpunt_core::business::BusinessInfo;
use lichtpunt_core::{Locale, PageId};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

const WORDS_PER_MINUTE: usize = 200;

/// An image hosted by the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<Image>,
}

/// A published blog post in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Plain text, paragraphs separated by blank lines.
    pub body: String,
    pub published_at: DateTime<Utc>,
    pub author: Option<Author>,
    pub cover: Option<Image>,
    pub tags: Vec<String>,
}

impl Article {
    /// Non-empty paragraphs of the body.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Estimated reading time, at least one minute.
    #[must_use]
    pub fn reading_minutes(&self) -> usize {
        let words = self.body.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// Whether the article matches a free-text query.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.excerpt.to_lowercase().contains(&query)
            || self.body.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    /// schema.org `BlogPosting` JSON-LD.
    #[must_use]
    pub fn json_ld(&self, locale: Locale, business: &BusinessInfo) -> JsonValue {
        let mut value = json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": self.title,
            "description": self.excerpt,
            "datePublished": self.published_at.to_rfc3339(),
            "inLanguage": locale.as_str(),
            "mainEntityOfPage": business.url(&PageId::BlogPost.path_with_slug(locale, &self.slug)),
            "publisher": {
                "@type": "Organization",
                "name": business.name,
                "url": business.website,
            },
            "keywords": self.tags.join(", "),
        });
        if let Some(author) = &self.author {
            value["author"] = json!({ "@type": "Person", "name": author.name });
        }
        if let Some(cover) = &self.cover {
            value["image"] = json!(cover.url);
        }
        value
    }
}

/// A 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub const DEFAULT_PER_PAGE: u32 = 9;

    /// Clamps both values to at least 1.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Number of items before this page.
    #[must_use]
    pub fn skip(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PER_PAGE)
    }
}

/// One page of results plus the totals needed for page navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub total: u32,
    pub total_pages: u32,
    pub page: u32,
}

impl<T> Paged<T> {
    #[must_use]
    pub fn new(data: Vec<T>, total: u32, pagination: Pagination) -> Self {
        let per_page = pagination.per_page.max(1);
        Self {
            data,
            total,
            total_pages: total.div_ceil(per_page).max(1),
            page: pagination.page,
        }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

const MONTHS_NL: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Long date, `1 maart 2025` or `March 1, 2025`.
#[must_use]
pub fn format_published(date: DateTime<Utc>, locale: Locale) -> String {
    let month = date.month0() as usize;
    match locale {
        Locale::Nl => format!("{} {} {}", date.day(), MONTHS_NL[month], date.year()),
        Locale::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lichtpunt_core::business::BUSINESS;

    fn article(body: &str) -> Article {
        Article {
            id: "1".to_string(),
            slug: "beter-slapen".to_string(),
            title: "Beter slapen".to_string(),
            excerpt: "Vijf tips".to_string(),
            body: body.to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).single().expect("valid"),
            author: None,
            cover: None,
            tags: vec!["Slaap".to_string()],
        }
    }

    #[test]
    fn skip_is_zero_based() {
        assert_eq!(Pagination::new(1, 9).skip(), 0);
        assert_eq!(Pagination::new(3, 9).skip(), 18);
        assert_eq!(Pagination::new(0, 0), Pagination::new(1, 1));
    }

    #[test]
    fn total_pages_rounds_up_with_minimum_one() {
        let paged = |total| Paged::<()>::new(vec![], total, Pagination::new(1, 9));
        assert_eq!(paged(0).total_pages, 1);
        assert_eq!(paged(9).total_pages, 1);
        assert_eq!(paged(10).total_pages, 2);
        assert_eq!(paged(27).total_pages, 3);
    }

    #[test]
    fn page_past_the_end() {
        let paged = Paged::<Article>::new(vec![], 9, Pagination::new(2, 9));
        assert!(paged.data.is_empty());
        assert_eq!(paged.total_pages, 1);
        assert!(paged.has_previous());
        assert!(!paged.has_next());
    }

    #[test]
    fn reading_time() {
        assert_eq!(article("").reading_minutes(), 1);
        assert_eq!(article(&"woord ".repeat(200)).reading_minutes(), 1);
        assert_eq!(article(&"woord ".repeat(201)).reading_minutes(), 2);
    }

    #[test]
    fn paragraphs_skip_blank_blocks() {
        let a = article("Eerste alinea.\n\n\n\nTweede alinea.\n\n  ");
        assert_eq!(
            a.paragraphs().collect::<Vec<_>>(),
            ["Eerste alinea.", "Tweede alinea."]
        );
    }

    #[test]
    fn long_dates() {
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).single().expect("valid");
        assert_eq!(format_published(date, Locale::Nl), "1 maart 2025");
        assert_eq!(format_published(date, Locale::En), "March 1, 2025");
    }

    #[test]
    fn matches_is_case_insensitive() {
        let a = article("Over melatonine en ritme.");
        assert!(a.matches("SLAPEN"));
        assert!(a.matches("melatonine"));
        assert!(a.matches("slaap"));
        assert!(a.matches("  "));
        assert!(!a.matches("migraine"));
    }

    #[test]
    fn blog_posting_json_ld() {
        let mut a = article("tekst");
        a.author = Some(Author {
            name: "Sanne de Vries".to_string(),
            bio: None,
            avatar: None,
        });
        let value = a.json_ld(Locale::En, &BUSINESS);
        assert_eq!(value["@type"], "BlogPosting");
        assert_eq!(value["author"]["name"], "Sanne de Vries");
        assert_eq!(
            value["mainEntityOfPage"],
            "https://www.praktijklichtpunt.nl/en/blog/beter-slapen"
        );
        assert!(value.get("image").is_none());
    }
}
