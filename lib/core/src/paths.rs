//! Localized path building.
//!
//! Internal links are always written against the canonical, Dutch-rooted
//! path and localized at render time.

use crate::locale::{Locale, resolve_locale};

/// Builds the URL path for `path` in the requested language.
///
/// Dutch paths are returned unchanged. English paths get the `/en` prefix,
/// and the root collapses to `/en` rather than `/en/`.
///
/// `path` must be canonical; passing an already localized path is out of
/// contract and yields a double prefix.
#[must_use]
pub fn build_localized_path(path: &str, is_english: bool) -> String {
    if !is_english {
        return path.to_string();
    }
    if path == "/" || path.is_empty() {
        return format!("/{}", Locale::ENGLISH_MARKER);
    }
    if path.starts_with('/') {
        format!("/{}{}", Locale::ENGLISH_MARKER, path)
    } else {
        format!("/{}/{}", Locale::ENGLISH_MARKER, path)
    }
}

/// Typed wrapper around [`build_localized_path`].
#[must_use]
pub fn localized_path(path: &str, locale: Locale) -> String {
    build_localized_path(path, locale.is_english())
}

/// Splits a localized path into its locale and canonical path.
///
/// `/en/contact` becomes `(En, "/contact")`, `/en` becomes `(En, "/")` and
/// any Dutch path is returned as-is.
#[must_use]
pub fn strip_locale(path: &str) -> (Locale, String) {
    match resolve_locale(path) {
        Locale::Nl => (Locale::Nl, normalize(path)),
        Locale::En => {
            let trimmed = path.trim_start_matches('/');
            let rest = trimmed
                .strip_prefix(Locale::ENGLISH_MARKER)
                .unwrap_or(trimmed);
            (Locale::En, normalize(rest))
        }
    }
}

/// Normalizes a path for matching: leading slash, no trailing slash, no
/// empty segments. The root is `/`.
#[must_use]
pub fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dutch_paths_are_unchanged() {
        assert_eq!(build_localized_path("/", false), "/");
        assert_eq!(build_localized_path("/contact", false), "/contact");
    }

    #[test]
    fn english_paths_are_prefixed() {
        assert_eq!(build_localized_path("/", true), "/en");
        assert_eq!(build_localized_path("/contact", true), "/en/contact");
        assert_eq!(build_localized_path("/blog/rust", true), "/en/blog/rust");
        assert_eq!(build_localized_path("contact", true), "/en/contact");
    }

    #[test]
    fn typed_wrapper_matches_flag() {
        assert_eq!(localized_path("/tarieven", Locale::En), "/en/tarieven");
        assert_eq!(localized_path("/tarieven", Locale::Nl), "/tarieven");
    }

    #[test]
    fn strip_locale_inverts_builder() {
        assert_eq!(strip_locale("/en"), (Locale::En, "/".to_string()));
        assert_eq!(strip_locale("/en/"), (Locale::En, "/".to_string()));
        assert_eq!(
            strip_locale("/en/contact"),
            (Locale::En, "/contact".to_string())
        );
        assert_eq!(strip_locale("/contact/"), (Locale::Nl, "/contact".to_string()));
    }

    #[test]
    fn normalize_collapses_slashes() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("//"), "/");
        assert_eq!(normalize("/a//b/"), "/a/b");
    }

    proptest! {
        #[test]
        fn prop_builder_prefixes_canonical_paths(path in "(/[a-df-z][a-z-]{0,10}){1,3}") {
            prop_assert_eq!(build_localized_path(&path, false), path.clone());
            prop_assert_eq!(build_localized_path(&path, true), format!("/en{path}"));
        }

        #[test]
        fn prop_strip_then_build_round_trips(path in "(/[a-df-z][a-z-]{0,10}){1,3}") {
            let english = build_localized_path(&path, true);
            let (locale, canonical) = strip_locale(&english);
            prop_assert_eq!(locale, Locale::En);
            prop_assert_eq!(canonical, path);
        }
    }
}
