//! The two site locales and resolution from a URL path.
//!
//! The leading path segment is the only source of truth: `/en/...` is
//! English, everything else is Dutch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the cookie that remembers the last locale a visitor browsed in.
pub const LOCALE_COOKIE: &str = "lang";

/// A site locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Dutch, the default. Dutch paths carry no prefix.
    #[default]
    Nl,
    /// English. English paths are prefixed with `/en`.
    En,
}

impl Locale {
    /// The path segment that marks an English URL.
    pub const ENGLISH_MARKER: &'static str = "en";

    /// Both locales, Dutch first.
    pub const ALL: [Locale; 2] = [Locale::Nl, Locale::En];

    /// Short language code, also used for `<html lang>` and `hreflang`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nl => "nl",
            Self::En => "en",
        }
    }

    /// Locale code used by the headless CMS.
    #[must_use]
    pub const fn content_locale(self) -> &'static str {
        match self {
            Self::Nl => "nl-NL",
            Self::En => "en-US",
        }
    }

    /// The other locale, for language switchers.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Nl => Self::En,
            Self::En => Self::Nl,
        }
    }

    #[must_use]
    pub const fn is_english(self) -> bool {
        matches!(self, Self::En)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a language tag that is neither Dutch nor English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}'", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts `nl`, `en` and region forms like `en-GB` or `nl_BE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "nl" => Ok(Self::Nl),
            "en" => Ok(Self::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Resolves the active locale from a URL path.
///
/// The first non-empty segment decides: the English marker selects English,
/// anything else (including no segment at all) falls back to Dutch.
#[must_use]
pub fn resolve_locale(path: &str) -> Locale {
    match path.split('/').find(|segment| !segment.is_empty()) {
        Some(Locale::ENGLISH_MARKER) => Locale::En,
        _ => Locale::Nl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn english_prefix_resolves_to_english() {
        assert_eq!(resolve_locale("/en"), Locale::En);
        assert_eq!(resolve_locale("/en/"), Locale::En);
        assert_eq!(resolve_locale("/en/contact"), Locale::En);
        assert_eq!(resolve_locale("//en/contact"), Locale::En);
    }

    #[test]
    fn everything_else_is_dutch() {
        assert_eq!(resolve_locale("/"), Locale::Nl);
        assert_eq!(resolve_locale(""), Locale::Nl);
        assert_eq!(resolve_locale("/contact"), Locale::Nl);
        assert_eq!(resolve_locale("/english"), Locale::Nl);
        assert_eq!(resolve_locale("/EN/contact"), Locale::Nl);
        assert_eq!(resolve_locale("/blog/en"), Locale::Nl);
    }

    #[test]
    fn parse_language_tags() {
        assert_eq!("nl".parse::<Locale>(), Ok(Locale::Nl));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("en-GB".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("nl_BE".parse::<Locale>(), Ok(Locale::Nl));
        assert!("de".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn other_swaps() {
        assert_eq!(Locale::Nl.other(), Locale::En);
        assert_eq!(Locale::En.other().other(), Locale::En);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Locale::En).expect("serialize"), "\"en\"");
        let parsed: Locale = serde_json::from_str("\"nl\"").expect("deserialize");
        assert_eq!(parsed, Locale::Nl);
    }

    proptest! {
        #[test]
        fn prop_resolution_is_idempotent(path in "(/[a-z]{0,6}){0,4}") {
            let once = resolve_locale(&path);
            let twice = resolve_locale(&path);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_unprefixed_paths_are_dutch(rest in "(/[a-df-z][a-z]{0,6}){0,4}") {
            prop_assert_eq!(resolve_locale(&rest), Locale::Nl);
        }
    }
}
