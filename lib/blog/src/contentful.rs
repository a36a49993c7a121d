//! Client for the Contentful content delivery API.

use crate::config::CmsCredentials;
use crate::error::BlogError;
use crate::model::{Article, Author, Image, Paged, Pagination};
use crate::source::BlogSource;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use lichtpunt_core::Locale;
use rootcause::Report;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Depth of linked entries and assets returned in `includes`.
const INCLUDE_DEPTH: u8 = 2;
const NEWEST_FIRST: &str = "-fields.publishedAt,-sys.createdAt";

/// Reads blog posts from a Contentful space.
#[derive(Debug, Clone)]
pub struct ContentfulClient {
    http: reqwest::Client,
    credentials: CmsCredentials,
}

impl ContentfulClient {
    pub fn new(credentials: CmsCredentials) -> Result<Self, Report<BlogError>> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| BlogError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self { http, credentials })
    }

    fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.credentials.api_base, self.credentials.space_id, self.credentials.environment
        )
    }

    /// Runs an entries query for blog posts in `locale`.
    #[instrument(skip_all, fields(locale = %locale))]
    async fn query(
        &self,
        locale: Locale,
        params: &[(&str, String)],
    ) -> Result<EntryCollection, Report<BlogError>> {
        let response = self
            .http
            .get(self.entries_url())
            .bearer_auth(&self.credentials.access_token)
            .query(&[
                ("content_type", self.credentials.content_type.clone()),
                ("locale", locale.content_locale().to_string()),
                ("include", INCLUDE_DEPTH.to_string()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| BlogError::Request {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "CMS returned error");
            return Err(BlogError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let collection: EntryCollection =
            response.json().await.map_err(|e| BlogError::Decode {
                reason: e.to_string(),
            })?;
        debug!(
            total = collection.total,
            items = collection.items.len(),
            "CMS entries loaded"
        );
        Ok(collection)
    }

    async fn paged(
        &self,
        locale: Locale,
        pagination: Pagination,
        extra: Option<(&str, String)>,
    ) -> Result<Paged<Article>, Report<BlogError>> {
        let mut params = vec![
            ("skip", pagination.skip().to_string()),
            ("limit", pagination.per_page.to_string()),
            ("order", NEWEST_FIRST.to_string()),
        ];
        params.extend(extra);

        let collection = self.query(locale, &params).await?;
        let data = collection.articles()?;
        Ok(Paged::new(data, collection.total, pagination))
    }
}

#[async_trait]
impl BlogSource for ContentfulClient {
    async fn fetch_articles(
        &self,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>> {
        self.paged(locale, pagination, None).await
    }

    async fn fetch_article_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Article>, Report<BlogError>> {
        let params = [("fields.slug", slug.to_string()), ("limit", "1".to_string())];
        let collection = self.query(locale, &params).await?;
        Ok(collection.articles()?.into_iter().next())
    }

    async fn search_articles(
        &self,
        query: &str,
        locale: Locale,
        pagination: Pagination,
    ) -> Result<Paged<Article>, Report<BlogError>> {
        let query = query.trim();
        let extra = (!query.is_empty()).then(|| ("query", query.to_string()));
        self.paged(locale, pagination, extra).await
    }
}

// Delivery API wire format.

#[derive(Debug, Deserialize)]
struct EntryCollection {
    total: u32,
    #[serde(default)]
    items: Vec<Entry>,
    #[serde(default)]
    includes: Includes,
}

#[derive(Debug, Default, Deserialize)]
struct Includes {
    #[serde(rename = "Entry", default)]
    entries: Vec<Entry>,
    #[serde(rename = "Asset", default)]
    assets: Vec<Asset>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sys {
    id: String,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    sys: Sys,
    fields: JsonValue,
}

#[derive(Debug, Deserialize)]
struct Link {
    sys: Sys,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostFields {
    title: String,
    slug: String,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    author: Option<Link>,
    #[serde(default)]
    cover_image: Option<Link>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AuthorFields {
    name: String,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    avatar: Option<Link>,
}

#[derive(Debug, Deserialize)]
struct Asset {
    sys: Sys,
    fields: AssetFields,
}

#[derive(Debug, Deserialize)]
struct AssetFields {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    file: Option<AssetFile>,
}

#[derive(Debug, Deserialize)]
struct AssetFile {
    url: String,
    #[serde(default)]
    details: Option<AssetDetails>,
}

#[derive(Debug, Deserialize)]
struct AssetDetails {
    #[serde(default)]
    image: Option<ImageSize>,
}

#[derive(Debug, Deserialize)]
struct ImageSize {
    width: u32,
    height: u32,
}

impl EntryCollection {
    /// Converts the items, resolving links against `includes`.
    fn articles(&self) -> Result<Vec<Article>, Report<BlogError>> {
        let entries: HashMap<&str, &JsonValue> = self
            .includes
            .entries
            .iter()
            .map(|e| (e.sys.id.as_str(), &e.fields))
            .collect();
        let assets: HashMap<&str, &Asset> = self
            .includes
            .assets
            .iter()
            .map(|a| (a.sys.id.as_str(), a))
            .collect();
        let linked = Linked { entries, assets };

        self.items.iter().map(|item| linked.article(item)).collect()
    }
}

struct Linked<'a> {
    entries: HashMap<&'a str, &'a JsonValue>,
    assets: HashMap<&'a str, &'a Asset>,
}

impl Linked<'_> {
    fn article(&self, entry: &Entry) -> Result<Article, Report<BlogError>> {
        let fields: PostFields = decode(&entry.fields, &entry.sys.id)?;

        let published_at = fields
            .published_at
            .as_deref()
            .or(entry.sys.created_at.as_deref())
            .and_then(parse_timestamp)
            .ok_or_else(|| BlogError::Decode {
                reason: format!("entry {} has no valid publication date", entry.sys.id),
            })?;

        let author = match &fields.author {
            Some(link) => self.author(link)?,
            None => None,
        };

        Ok(Article {
            id: entry.sys.id.clone(),
            slug: fields.slug,
            title: fields.title,
            excerpt: fields.excerpt.unwrap_or_default(),
            body: fields.body.unwrap_or_default(),
            published_at,
            author,
            cover: fields.cover_image.as_ref().and_then(|link| self.image(link)),
            tags: fields.tags,
        })
    }

    /// `None` when the linked entry was not included, e.g. unpublished.
    fn author(&self, link: &Link) -> Result<Option<Author>, Report<BlogError>> {
        let Some(fields) = self.entries.get(link.sys.id.as_str()) else {
            return Ok(None);
        };
        let fields: AuthorFields = decode(fields, &link.sys.id)?;
        Ok(Some(Author {
            name: fields.name,
            bio: fields.bio,
            avatar: fields.avatar.as_ref().and_then(|link| self.image(link)),
        }))
    }

    fn image(&self, link: &Link) -> Option<Image> {
        let asset = self.assets.get(link.sys.id.as_str())?;
        let file = asset.fields.file.as_ref()?;
        let size = file.details.as_ref().and_then(|d| d.image.as_ref());
        Some(Image {
            url: absolute_asset_url(&file.url),
            title: asset.fields.title.clone().unwrap_or_default(),
            width: size.map(|s| s.width),
            height: size.map(|s| s.height),
        })
    }
}

fn decode<T: DeserializeOwned>(fields: &JsonValue, id: &str) -> Result<T, Report<BlogError>> {
    Ok(
        serde_json::from_value(fields.clone()).map_err(|e| BlogError::Decode {
            reason: format!("entry {id}: {e}"),
        })?,
    )
}

/// Asset URLs are protocol-relative.
fn absolute_asset_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

/// Accepts full RFC 3339, the minute-precision form the CMS editor
/// produces, and plain dates.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
