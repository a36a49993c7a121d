//! CMS settings.

use crate::error::BlogError;
use rootcause::Report;
use serde::Deserialize;

/// Which [`BlogSource`](crate::BlogSource) backs the blog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Cms,
    /// Built-in sample articles for local development.
    Memory,
}

/// CMS settings as loaded from the environment, possibly incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CmsConfig {
    pub space_id: Option<String>,
    pub access_token: Option<String>,
    pub environment: Option<String>,
    /// Delivery API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Content type id of blog posts.
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            access_token: None,
            environment: None,
            api_base: default_api_base(),
            content_type: default_content_type(),
        }
    }
}

fn default_api_base() -> String {
    "https://cdn.contentful.com".to_string()
}

fn default_content_type() -> String {
    "blogPost".to_string()
}

/// Complete CMS credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct CmsCredentials {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub api_base: String,
    pub content_type: String,
}

impl std::fmt::Debug for CmsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsCredentials")
            .field("space_id", &self.space_id)
            .field("access_token", &"[redacted]")
            .field("environment", &self.environment)
            .field("api_base", &self.api_base)
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl CmsConfig {
    /// Environment variable names of absent or empty settings.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("CMS__SPACE_ID", &self.space_id),
            ("CMS__ACCESS_TOKEN", &self.access_token),
            ("CMS__ENVIRONMENT", &self.environment),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    /// Complete credentials, or the list of what is missing.
    pub fn credentials(&self) -> Result<CmsCredentials, Report<BlogError>> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(BlogError::MissingCredentials { names: missing }.into());
        }

        Ok(CmsCredentials {
            space_id: self.space_id.clone().unwrap_or_default(),
            access_token: self.access_token.clone().unwrap_or_default(),
            environment: self.environment.clone().unwrap_or_default(),
            api_base: self.api_base.trim_end_matches('/').to_string(),
            content_type: self.content_type.clone(),
        })
    }
}
