//! Blog list and blog post pages.

mod server;

pub use server::{get_article, list_articles, search_articles};

use super::content::PageIntro;
use crate::components::{JsonLd, Seo};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use lichtpunt_blog::{Article, Paged, format_published};
use lichtpunt_core::business::BUSINESS;
use lichtpunt_core::seo::PageMeta;
use lichtpunt_core::{Locale, PageId, UI, page_content};

/// Article overview with search and `?page=` pagination.
#[component]
pub fn BlogPage(locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);
    let content = page_content(PageId::Blog).map(|c| c.get(locale));
    let query = use_query_map();
    let page = Memo::new(move |_| {
        query.with(|q| {
            q.get("page")
                .and_then(|p| p.parse::<u32>().ok())
                .unwrap_or(1)
                .max(1)
        })
    });
    let search = Memo::new(move |_| {
        query.with(|q| q.get("q").map(|s| s.trim().to_string()).unwrap_or_default())
    });

    // Only the latest (page, search) pair is kept; older responses are dropped.
    let articles = Resource::new(
        move || (page.get(), search.get()),
        move |(page, search)| async move {
            if search.is_empty() {
                list_articles(locale, page).await
            } else {
                search_articles(locale, search, page).await
            }
        },
    );

    view! {
        {PageMeta::for_page(PageId::Blog, locale, &BUSINESS).map(|meta| view! { <Seo meta/> })}
        <div class="blog-page">
            {content.map(|content| view! { <PageIntro content/> })}
            <form method="get" action=PageId::Blog.path(locale) class="blog-search" role="search">
                <input
                    type="search"
                    name="q"
                    placeholder=ui.blog_search_placeholder
                    aria-label=ui.blog_search_placeholder
                    prop:value=move || search.get()
                />
                <button type="submit">{ui.blog_search}</button>
            </form>
            <Suspense fallback=move || view! { <p class="loading">{ui.loading}</p> }>
                {move || {
                    articles.get().map(|result| match result {
                        Ok(paged) if paged.data.is_empty() => {
                            view! { <p class="empty-state">{ui.blog_empty}</p> }.into_any()
                        }
                        Ok(paged) => {
                            view! { <ArticleList paged locale search=search.get_untracked()/> }
                                .into_any()
                        }
                        Err(_) => view! { <p class="error">{ui.blog_error}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ArticleList(paged: Paged<Article>, locale: Locale, search: String) -> impl IntoView {
    let ui = UI.get(locale);
    let previous = paged
        .has_previous()
        .then(|| page_href(locale, paged.page - 1, &search));
    let next = paged
        .has_next()
        .then(|| page_href(locale, paged.page + 1, &search));
    let position = format!("{} {} / {}", ui.blog_page, paged.page, paged.total_pages);

    view! {
        <ul class="article-list">
            {paged
                .data
                .into_iter()
                .map(|article| view! { <li><ArticleCard article locale/></li> })
                .collect_view()}
        </ul>
        <nav class="pagination">
            {previous.map(|href| view! { <a href=href rel="prev">{ui.blog_previous}</a> })}
            <span>{position}</span>
            {next.map(|href| view! { <a href=href rel="next">{ui.blog_next}</a> })}
        </nav>
    }
}

#[component]
fn ArticleCard(article: Article, locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);
    let href = PageId::BlogPost.path_with_slug(locale, &article.slug);

    view! {
        <article class="article-card">
            {article.cover.clone().map(|cover| view! {
                <img src=cover.url alt=cover.title loading="lazy"/>
            })}
            <h2><a href=href.clone()>{article.title.clone()}</a></h2>
            <ArticleByline article=article.clone() locale/>
            <p>{article.excerpt}</p>
            <a href=href class="read-more">{ui.blog_read_more}</a>
        </article>
    }
}

/// Date, author and reading time.
#[component]
fn ArticleByline(article: Article, locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);
    let published = format_published(article.published_at, locale);
    let reading = format!(" · {} {}", article.reading_minutes(), ui.blog_minutes_read);
    let author = article
        .author
        .map(|author| format!(" {} {}", ui.blog_by, author.name));

    view! {
        <p class="byline">
            <time datetime=article.published_at.to_rfc3339()>{published}</time>
            {author}
            {reading}
        </p>
    }
}

/// A single article.
#[component]
pub fn BlogPostPage(locale: Locale, slug: String) -> impl IntoView {
    let ui = UI.get(locale);
    let source_slug = slug.clone();
    let article = Resource::new(move || source_slug.clone(), move |slug| get_article(locale, slug));

    view! {
        <Suspense fallback=move || view! { <p class="loading">{ui.loading}</p> }>
            {move || {
                article.get().map(|result| match result {
                    Ok(Some(article)) => view! { <ArticleView article locale/> }.into_any(),
                    Ok(None) => view! { <ArticleNotFound locale slug=slug.clone()/> }.into_any(),
                    Err(_) => view! { <p class="error">{ui.blog_error}</p> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn ArticleView(article: Article, locale: Locale) -> impl IntoView {
    let ui = UI.get(locale);
    let meta = PageMeta::build(
        PageId::BlogPost,
        locale,
        Some(&article.slug),
        &article.title,
        &article.excerpt,
        &BUSINESS,
    );
    let json_ld = article.json_ld(locale, &BUSINESS);
    let paragraphs: Vec<String> = article.paragraphs().map(str::to_string).collect();

    view! {
        <Seo meta/>
        <JsonLd value=json_ld/>
        <article class="blog-post">
            <header>
                <h1>{article.title.clone()}</h1>
                <ArticleByline article=article.clone() locale/>
            </header>
            {article.cover.clone().map(|cover| view! {
                <img class="cover" src=cover.url alt=cover.title/>
            })}
            {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            {(!article.tags.is_empty()).then(|| view! {
                <ul class="tags">
                    {article.tags.iter().map(|tag| view! { <li>{tag.clone()}</li> }).collect_view()}
                </ul>
            })}
            <a href=PageId::Blog.path(locale) class="back-link">{ui.blog_back}</a>
        </article>
    }
}

#[component]
fn ArticleNotFound(locale: Locale, slug: String) -> impl IntoView {
    let ui = UI.get(locale);

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    let mut meta = PageMeta::build(
        PageId::BlogPost,
        locale,
        Some(&slug),
        ui.blog_not_found_title,
        ui.blog_not_found_body,
        &BUSINESS,
    );
    meta.noindex = true;

    view! {
        <Seo meta/>
        <div class="not-found">
            <h1>{ui.blog_not_found_title}</h1>
            <p>{ui.blog_not_found_body}</p>
            <a href=PageId::Blog.path(locale) class="back-link">{ui.blog_back}</a>
        </div>
    }
}

/// Link to another page of the overview, keeping the search query.
fn page_href(locale: Locale, page: u32, search: &str) -> String {
    let base = PageId::Blog.path(locale);
    if search.is_empty() {
        format!("{base}?page={page}")
    } else {
        format!("{base}?q={}&page={page}", urlencoding::encode(search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_links_keep_search() {
        assert_eq!(page_href(Locale::Nl, 2, ""), "/blog?page=2");
        assert_eq!(page_href(Locale::En, 3, ""), "/en/blog?page=3");
        assert_eq!(
            page_href(Locale::Nl, 2, "rug & nek"),
            "/blog?q=rug%20%26%20nek&page=2"
        );
    }

    #[test]
    fn query_encoding_handles_non_ascii() {
        assert_eq!(page_href(Locale::En, 2, "café"), "/en/blog?q=caf%C3%A9&page=2");
    }
}
