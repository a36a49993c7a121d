//! Blog server functions.
//!
//! Thin wrappers over the registered [`BlogSource`](lichtpunt_blog::BlogSource);
//! failures are logged here and reach the browser as a generic error.

use leptos::prelude::*;
use lichtpunt_blog::{Article, Paged};
use lichtpunt_core::Locale;

#[cfg(feature = "ssr")]
fn unavailable(report: impl std::fmt::Display) -> ServerFnError {
    use crate::error::SiteError;

    tracing::warn!(error = %report, "Blog content request failed");
    SiteError::ContentUnavailable {
        details: report.to_string(),
    }
    .into_server_error()
}

/// One page of articles, newest first.
#[server]
pub async fn list_articles(locale: Locale, page: u32) -> Result<Paged<Article>, ServerFnError> {
    use crate::services::blog_source;
    use lichtpunt_blog::Pagination;

    let source = blog_source().await.map_err(|e| e.into_server_error())?;
    source
        .fetch_articles(locale, Pagination::new(page, Pagination::DEFAULT_PER_PAGE))
        .await
        .map_err(unavailable)
}

/// One page of articles matching `query`.
#[server]
pub async fn search_articles(
    locale: Locale,
    query: String,
    page: u32,
) -> Result<Paged<Article>, ServerFnError> {
    use crate::services::blog_source;
    use lichtpunt_blog::Pagination;

    let source = blog_source().await.map_err(|e| e.into_server_error())?;
    source
        .search_articles(
            &query,
            locale,
            Pagination::new(page, Pagination::DEFAULT_PER_PAGE),
        )
        .await
        .map_err(unavailable)
}

/// The article with `slug`, or `None` if there is none.
#[server]
pub async fn get_article(locale: Locale, slug: String) -> Result<Option<Article>, ServerFnError> {
    use crate::services::blog_source;

    let source = blog_source().await.map_err(|e| e.into_server_error())?;
    source
        .fetch_article_by_slug(&slug, locale)
        .await
        .map_err(unavailable)
}
