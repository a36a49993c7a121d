//! A [`BlogSource`] over a fixed list of articles.

use crate::error::BlogError;
use crate::model::{Article, Author, Paged, Pagination};
use crate::source::BlogSource;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lichtpunt_core::Locale;
use rootcause::Report;
use std::collections::HashMap;

/// Articles held in memory, per locale, newest first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlog {
    articles: HashMap<Locale, Vec<Article>>,
}

impl InMemoryBlog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds articles for one locale.
    #[must_use]
    pub fn with_articles(mut self, locale: Locale, articles: Vec<Article>) -> Self {
        let list = self.articles.entry(locale).or_default();
        list.extend(articles);
        list.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        self
    }

    /// A handful of bilingual articles for running the site without a CMS.
    #[must_use]
    pub fn sample() -> Self {
        let author = Author {
            name: "Sanne de Vries".to_string(),
            bio: None,
            avatar: None,
        };
        let post = |id: &str, slug: &str, title: &str, excerpt: &str, body: &str, day: u32, tag: &str| Article {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            body: body.to_string(),
            published_at: Utc
                .with_ymd_and_hms(2025, 2, day, 9, 0, 0)
                .single()
                .unwrap_or_default(),
            author: Some(author.clone()),
            cover: None,
            tags: vec![tag.to_string()],
        };

        Self::new()
            .with_articles(
                Locale::Nl,
                vec![
                    post(
                        "sample-1",
                        "beter-slapen",
                        "Vijf tips om beter te slapen",
                        "Kleine gewoontes die je nachtrust verbeteren.",
                        "Een vast ritme helpt je lichaam om op tijd moe te worden.\n\n\
                         Beperk schermgebruik in het laatste uur voor het slapengaan.",
                        3,
                        "Slaap",
                    ),
                    post(
                        "sample-2",
                        "nekpijn-op-kantoor",
                        "Nekpijn op kantoor voorkomen",
                        "Zo houd je je nek soepel achter het bureau.",
                        "Zet je scherm op ooghoogte.\n\nSta ieder half uur even op.",
                        17,
                        "Rug en nek",
                    ),
                ],
            )
            .with_articles(
                Locale::En,
                vec![
                    post(
                        "sample-1",
                        "beter-slapen",
                        "Five tips for better sleep",
                        "Small habits that improve your night's rest.",
                        "A regular rhythm helps your body get tired on time.\n\n\
                         Limit screen time in the last hour before bed.",
                        3,
                        "Sleep",
                    ),
                    post(
                        "sample-2",
                        "nekpijn-op-kantoor",
                        "Preventing neck pain at the office",
                        "How to keep your neck supple behind the desk.",
                        "Put your screen at eye level.\n\nStand up every half hour.",
                        17,
                        "Back and neck",
                    ),
                ],
            )
    }

    fn list(&self, locale: Locale) -> &[Article] {
        self.articles.get(&locale).map(Vec::as_slice).unwrap_or_default()
    }

    fn page(matching: Vec<&Article>, pagination: Pagination) -> Paged<Article> {
        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let data = matching
            .into_iter()
            .skip(pagination.skip() as usize)
            .take(pagination.per_page as usize)
            .cloned()
            .collect();
        Paged::new(data, total, pagination)
    }
}

#[async_trait]
impl BlogSource for InMemoryBlog {
    async fn fetch_articles(
        &self,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>> {
        Ok(Self::page(self.list(locale).iter().collect(), pagination))
    }

    async fn fetch_article_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Article>, Report<BlogError>> {
        Ok(self.list(locale).iter().find(|a| a.slug == slug).cloned())
    }

    async fn search_articles(
        &self,
        query: &str,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>> {
        let matching = self.list(locale).iter().filter(|a| a.matches(query)).collect();
        Ok(Self::page(matching, pagination))
    }
}
