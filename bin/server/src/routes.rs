//! Axum endpoints and middleware outside the Leptos router.

use crate::config::SiteConfig;
use crate::services::SharedBlogSource;
use axum::Extension;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use lichtpunt_blog::{BlogSource, Pagination};
use lichtpunt_core::business::BUSINESS;
use lichtpunt_core::routes::SITE_PAGES;
use lichtpunt_core::sitemap::{SitemapUrl, page_urls, post_url, render_sitemap};
use lichtpunt_core::{LOCALE_COOKIE, Locale, resolve_locale};
use time::Duration as TimeDuration;

/// Articles requested per page while building the sitemap.
const SITEMAP_PAGE_SIZE: u32 = 100;

/// `GET /sitemap.xml`
///
/// Static pages always appear; posts are added as far as the blog source
/// delivers them.
pub async fn sitemap_xml(Extension(blog): Extension<SharedBlogSource>) -> impl IntoResponse {
    let mut urls = page_urls(BUSINESS.website, SITE_PAGES);
    for locale in Locale::ALL {
        urls.extend(post_urls(blog.as_ref(), locale).await);
    }

    let xml = render_sitemap(&urls);
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

async fn post_urls(blog: &dyn BlogSource, locale: Locale) -> Vec<SitemapUrl> {
    let mut urls = Vec::new();
    let mut page = 1;

    loop {
        let paged = match blog
            .fetch_articles(locale, Pagination::new(page, SITEMAP_PAGE_SIZE))
            .await
        {
            Ok(paged) => paged,
            Err(e) => {
                tracing::warn!(error = %e, locale = %locale, page, "Skipping blog posts in sitemap");
                break;
            }
        };

        urls.extend(paged.data.iter().map(|article| {
            post_url(
                BUSINESS.website,
                &article.slug,
                locale,
                Some(article.published_at.date_naive().to_string()),
            )
        }));

        if !paged.has_next() {
            break;
        }
        page += 1;
    }

    urls
}

/// `GET /robots.txt`
pub async fn robots_txt() -> impl IntoResponse {
    let body = format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        BUSINESS.website
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

/// Remembers the language of the requested page in the `lang` cookie.
///
/// Assets, server functions and files are left alone.
pub async fn remember_locale(
    State(site): State<SiteConfig>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    if !is_page_path(&path) {
        return response;
    }

    let locale = resolve_locale(&path);
    if jar.get(LOCALE_COOKIE).map(Cookie::value) == Some(locale.as_str()) {
        return response;
    }

    let cookie = Cookie::build((LOCALE_COOKIE, locale.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(site.secure_cookies)
        .max_age(TimeDuration::days(site.locale_cookie_days));

    (jar.add(cookie), response).into_response()
}

fn is_page_path(path: &str) -> bool {
    if path.starts_with("/pkg/") || path.starts_with("/api/") {
        return false;
    }
    let last = path.rsplit('/').next().unwrap_or_default();
    !last.contains('.')
}
