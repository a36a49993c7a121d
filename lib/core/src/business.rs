//! Static business details and client testimonials.

use crate::content::Localized;

/// Opening hours for one or more days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: Localized<&'static str>,
    /// schema.org day names, e.g. `["Monday", "Tuesday"]`.
    pub schema_days: &'static [&'static str],
    pub opens: &'static str,
    pub closes: &'static str,
}

/// Contact and registration details of the practice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessInfo {
    pub name: &'static str,
    pub practitioner: &'static str,
    pub street: &'static str,
    pub postal_code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    /// Public base URL, without trailing slash.
    pub website: &'static str,
    pub kvk: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub opening_hours: &'static [OpeningHours],
}

impl BusinessInfo {
    /// `tel:` link target with spaces removed.
    #[must_use]
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }

    #[must_use]
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Absolute URL for a site path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.website, path)
    }
}

pub static BUSINESS: BusinessInfo = BusinessInfo {
    name: "Praktijk Lichtpunt",
    practitioner: "Sanne de Vries",
    street: "Oudegracht 112",
    postal_code: "3511 AX",
    city: "Utrecht",
    country: "NL",
    phone: "030 123 45 67",
    email: "info@praktijklichtpunt.nl",
    website: "https://www.praktijklichtpunt.nl",
    kvk: "81234567",
    latitude: 52.0907,
    longitude: 5.1214,
    opening_hours: &[
        OpeningHours {
            days: Localized::new("Maandag t/m donderdag", "Monday to Thursday"),
            schema_days: &["Monday", "Tuesday", "Wednesday", "Thursday"],
            opens: "09:00",
            closes: "18:00",
        },
        OpeningHours {
            days: Localized::new("Zaterdag", "Saturday"),
            schema_days: &["Saturday"],
            opens: "10:00",
            closes: "14:00",
        },
    ],
};

/// A client review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: Localized<&'static str>,
    /// 1 to 5 stars.
    pub rating: u8,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Marieke",
        quote: Localized::new(
            "Na drie behandelingen was mijn nek eindelijk weer soepel.",
            "After three treatments my neck was finally supple again.",
        ),
        rating: 5,
    },
    Testimonial {
        name: "Joost",
        quote: Localized::new(
            "Rustige praktijk en duidelijke uitleg. Ik slaap een stuk beter.",
            "Calm practice and clear explanations. I sleep a lot better.",
        ),
        rating: 5,
    },
    Testimonial {
        name: "Fatima",
        quote: Localized::new(
            "De zwangerschapsmassage was precies wat ik nodig had.",
            "The pregnancy massage was exactly what I needed.",
        ),
        rating: 5,
    },
    Testimonial {
        name: "Pieter",
        quote: Localized::new(
            "Goede behandeling van mijn hardloopblessure, wel even wachten op een plek.",
            "Good treatment of my running injury, though I had to wait for a slot.",
        ),
        rating: 4,
    },
];

/// Mean rating rounded to one decimal, or `None` without reviews.
#[must_use]
pub fn average_rating(testimonials: &[Testimonial]) -> Option<f32> {
    if testimonials.is_empty() {
        return None;
    }
    let total: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
    let mean = total as f32 / testimonials.len() as f32;
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_site_testimonials() {
        assert_eq!(average_rating(TESTIMONIALS), Some(4.8));
    }

    #[test]
    fn average_of_nothing() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn ratings_are_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn hrefs() {
        assert_eq!(BUSINESS.phone_href(), "tel:0301234567");
        assert_eq!(BUSINESS.email_href(), "mailto:info@praktijklichtpunt.nl");
        assert_eq!(
            BUSINESS.url("/contact"),
            "https://www.praktijklichtpunt.nl/contact"
        );
    }
}
