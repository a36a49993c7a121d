use crate::error::BlogError;
use crate::model::{Article, Paged, Pagination};
use async_trait::async_trait;
use lichtpunt_core::Locale;
use rootcause::Report;
use std::sync::Arc;

/// Read-only access to published blog articles.
#[async_trait]
pub trait BlogSource: Send + Sync {
    /// Articles in `locale`, newest first.
    async fn fetch_articles(
        &self,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>>;

    /// The article with `slug`, or `None` when it does not exist.
    async fn fetch_article_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Article>, Report<BlogError>>;

    /// Articles matching a free-text query, newest first.
    async fn search_articles(
        &self,
        query: &str,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>>;
}

#[async_trait]
impl<T: BlogSource + ?Sized> BlogSource for Arc<T> {
    async fn fetch_articles(
        &self,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>> {
        (**self).fetch_articles(locale, pagination).await
    }

    async fn fetch_article_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Article>, Report<BlogError>> {
        (**self).fetch_article_by_slug(slug, locale).await
    }

    async fn search_articles(
        &self,
        query: &str,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>> {
        (**self).search_articles(query, locale, pagination).await
    }
}
