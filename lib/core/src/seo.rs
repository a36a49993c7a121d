//! Page metadata and schema.org structured data.

use crate::business::{BusinessInfo, Testimonial, average_rating};
use crate::content::page_content;
use crate::locale::Locale;
use crate::routes::{Layout, PageId};
use serde_json::{Value as JsonValue, json};

/// A `<link rel="alternate" hreflang>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

/// Everything that goes into `<head>` for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub locale: Locale,
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub noindex: bool,
}

/// Appends the practice name to a page title.
#[must_use]
pub fn document_title(title: &str, business: &BusinessInfo) -> String {
    format!("{title} | {}", business.name)
}

impl PageMeta {
    /// Metadata for a content page, or `None` when the page has no static
    /// content (blog posts).
    #[must_use]
    pub fn for_page(page: PageId, locale: Locale, business: &BusinessInfo) -> Option<Self> {
        let content = page_content(page)?.get(locale);
        Some(Self::build(
            page,
            locale,
            None,
            content.title,
            content.description,
            business,
        ))
    }

    /// Metadata with an explicit title and description, e.g. for a blog post.
    #[must_use]
    pub fn build(
        page: PageId,
        locale: Locale,
        slug: Option<&str>,
        title: &str,
        description: &str,
        business: &BusinessInfo,
    ) -> Self {
        let path_in = |locale: Locale| match slug {
            Some(slug) => page.path_with_slug(locale, slug),
            None => page.path(locale),
        };

        let alternates = vec![
            Alternate {
                hreflang: Locale::Nl.as_str(),
                href: business.url(&path_in(Locale::Nl)),
            },
            Alternate {
                hreflang: Locale::En.as_str(),
                href: business.url(&path_in(Locale::En)),
            },
            Alternate {
                hreflang: "x-default",
                href: business.url(&path_in(Locale::Nl)),
            },
        ];

        Self {
            locale,
            title: document_title(title, business),
            description: description.to_string(),
            canonical: business.url(&path_in(locale)),
            alternates,
            noindex: page.layout() == Layout::Standalone || page == PageId::ThankYou,
        }
    }

    /// Value for `<meta name="robots">`.
    #[must_use]
    pub fn robots(&self) -> &'static str {
        if self.noindex {
            "noindex, nofollow"
        } else {
            "index, follow"
        }
    }
}

/// schema.org `HealthAndBeautyBusiness` JSON-LD for the practice.
#[must_use]
pub fn local_business_json_ld(
    business: &BusinessInfo,
    testimonials: &[Testimonial],
    locale: Locale,
) -> JsonValue {
    let hours: Vec<JsonValue> = business
        .opening_hours
        .iter()
        .map(|hours| {
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": hours.schema_days,
                "opens": hours.opens,
                "closes": hours.closes,
            })
        })
        .collect();

    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "HealthAndBeautyBusiness",
        "name": business.name,
        "founder": { "@type": "Person", "name": business.practitioner },
        "url": business.url(&PageId::Home.path(locale)),
        "telephone": business.phone,
        "email": business.email,
        "inLanguage": locale.as_str(),
        "address": {
            "@type": "PostalAddress",
            "streetAddress": business.street,
            "postalCode": business.postal_code,
            "addressLocality": business.city,
            "addressCountry": business.country,
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": business.latitude,
            "longitude": business.longitude,
        },
        "openingHoursSpecification": hours,
    });

    if let Some(rating) = average_rating(testimonials) {
        value["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": rating,
            "reviewCount": testimonials.len(),
            "bestRating": 5,
        });
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::{BUSINESS, TESTIMONIALS};

    #[test]
    fn content_page_meta() {
        let meta = PageMeta::for_page(PageId::About, Locale::En, &BUSINESS).expect("has content");
        assert_eq!(meta.title, "About me | Praktijk Lichtpunt");
        assert_eq!(meta.canonical, "https://www.praktijklichtpunt.nl/en/about-me");
        assert!(!meta.noindex);
        assert_eq!(meta.robots(), "index, follow");

        let hreflangs: Vec<_> = meta.alternates.iter().map(|a| a.hreflang).collect();
        assert_eq!(hreflangs, ["nl", "en", "x-default"]);
        assert_eq!(
            meta.alternates[0].href,
            "https://www.praktijklichtpunt.nl/over-mij"
        );
    }

    #[test]
    fn blog_post_has_no_static_meta() {
        assert!(PageMeta::for_page(PageId::BlogPost, Locale::Nl, &BUSINESS).is_none());

        let meta = PageMeta::build(
            PageId::BlogPost,
            Locale::Nl,
            Some("beter-slapen"),
            "Beter slapen",
            "Tips",
            &BUSINESS,
        );
        assert_eq!(
            meta.canonical,
            "https://www.praktijklichtpunt.nl/blog/beter-slapen"
        );
        assert_eq!(
            meta.alternates[1].href,
            "https://www.praktijklichtpunt.nl/en/blog/beter-slapen"
        );
    }

    #[test]
    fn ad_landing_and_thank_you_are_noindex() {
        for page in [PageId::IntroOffer, PageId::BackPainOffer, PageId::ThankYou] {
            let meta = PageMeta::for_page(page, Locale::Nl, &BUSINESS).expect("has content");
            assert!(meta.noindex, "{page}");
            assert_eq!(meta.robots(), "noindex, nofollow");
        }
    }

    #[test]
    fn business_json_ld_includes_rating_and_address() {
        let value = local_business_json_ld(&BUSINESS, TESTIMONIALS, Locale::Nl);
        assert_eq!(value["@type"], "HealthAndBeautyBusiness");
        assert_eq!(value["address"]["addressLocality"], "Utrecht");
        assert_eq!(value["aggregateRating"]["reviewCount"], 4);
        assert_eq!(value["openingHoursSpecification"][1]["dayOfWeek"][0], "Saturday");
    }

    #[test]
    fn business_json_ld_without_reviews_has_no_rating() {
        let value = local_business_json_ld(&BUSINESS, &[], Locale::En);
        assert!(value.get("aggregateRating").is_none());
        assert_eq!(value["url"], "https://www.praktijklichtpunt.nl/en");
    }
}
