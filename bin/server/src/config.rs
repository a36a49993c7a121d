//! Centralized server configuration.
//!
//! Loaded via the `config` crate from environment variables, using `__` to
//! separate sections: `CONTACT__WEBHOOK_URL`, `CMS__SPACE_ID`,
//! `SITE__SECURE_COOKIES` and so on.

use lichtpunt_blog::{CmsConfig, SourceKind};
use serde::Deserialize;
use std::time::Duration;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Contact form delivery.
    pub contact: ContactConfig,

    /// Blog CMS credentials. Completeness is checked at startup.
    #[serde(default)]
    pub cms: CmsConfig,

    #[serde(default)]
    pub blog: BlogConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Automation webhook receiving contact submissions.
    pub webhook_url: String,

    /// Request timeout. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl ContactConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub source: SourceKind,
}

/// Site-wide HTTP settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Whether to set the Secure flag on cookies (requires HTTPS).
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,

    /// Lifetime of the language cookie, in days.
    #[serde(default = "default_locale_cookie_days")]
    pub locale_cookie_days: i64,
}

fn default_secure_cookies() -> bool {
    true
}

fn default_locale_cookie_days() -> i64 {
    365
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            secure_cookies: default_secure_cookies(),
            locale_cookie_days: default_locale_cookie_days(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::default())
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, config::ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::load(config::Environment::default().source(Some(map)))
    }

    #[test]
    fn site_config_has_correct_defaults() {
        let config = SiteConfig::default();
        assert!(config.secure_cookies);
        assert_eq!(config.locale_cookie_days, 365);
    }

    #[test]
    fn loads_sections_from_environment() {
        let config = load(&[
            ("CONTACT__WEBHOOK_URL", "https://hooks.example/abc"),
            ("CONTACT__TIMEOUT_SECONDS", "15"),
            ("CMS__SPACE_ID", "space1"),
            ("CMS__ACCESS_TOKEN", "token"),
            ("CMS__ENVIRONMENT", "master"),
            ("BLOG__SOURCE", "memory"),
            ("SITE__SECURE_COOKIES", "false"),
        ])
        .expect("valid configuration");

        assert_eq!(config.contact.webhook_url, "https://hooks.example/abc");
        assert_eq!(config.contact.timeout(), Some(Duration::from_secs(15)));
        assert!(config.cms.missing().is_empty());
        assert_eq!(config.blog.source, SourceKind::Memory);
        assert!(!config.site.secure_cookies);
        assert_eq!(config.site.locale_cookie_days, 365);
    }

    #[test]
    fn optional_sections_default() {
        let config = load(&[("CONTACT__WEBHOOK_URL", "https://hooks.example/abc")])
            .expect("valid configuration");

        assert_eq!(config.contact.timeout(), None);
        assert_eq!(config.blog.source, SourceKind::Cms);
        assert_eq!(
            config.cms.missing(),
            ["CMS__SPACE_ID", "CMS__ACCESS_TOKEN", "CMS__ENVIRONMENT"]
        );
        assert!(config.site.secure_cookies);
    }

    #[test]
    fn webhook_url_is_required() {
        assert!(load(&[]).is_err());
    }
}
