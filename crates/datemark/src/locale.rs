// ABOUTME: Locale resolution from the page URL path and the document's default-language marker.
// ABOUTME: Provides resolve_locale plus the supported-language and fallback constants.

//! Locale resolution for one page view.
//!
//! The default locale comes from a `<script data-default-lang="..">` element
//! (`fr-CH` when the marker is absent or empty). The first segment of the
//! page URL path overrides the default when it names one of the supported
//! site languages.

use dom_query::{Document, Matcher};
use once_cell::sync::Lazy;
use url::Url;

/// Language codes that may appear as the first URL path segment.
pub const SUPPORTED_LANGUAGES: &[&str] = &["fr", "de", "it", "en", "es"];

/// Locale used when the document declares no default.
pub const FALLBACK_LOCALE: &str = "fr-CH";

/// Attribute carrying the document's default locale.
pub const DEFAULT_LANG_ATTR: &str = "data-default-lang";

static DEFAULT_LANG_MATCHER: Lazy<Matcher> =
    Lazy::new(|| Matcher::new("script[data-default-lang]").expect("static selector is valid"));

/// Reads the document's default locale from the first `script[data-default-lang]`
/// element. A missing marker or an empty value falls back to [`FALLBACK_LOCALE`].
pub fn default_locale(doc: &Document) -> String {
    if let Some(value) = doc.select_matcher(&DEFAULT_LANG_MATCHER).attr(DEFAULT_LANG_ATTR) {
        let value = value.trim();
        if !value.is_empty() {
            return value.to_string();
        }
    }
    FALLBACK_LOCALE.to_string()
}

/// Extracts the path portion of a page URL. Inputs that do not parse as an
/// absolute URL are treated as already being a path.
pub fn page_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    }
}

/// Picks the locale for a page path: the first path segment wins when it is
/// one of [`SUPPORTED_LANGUAGES`], otherwise the default stands.
pub fn locale_from_path(path: &str, default: &str) -> String {
    let first = path
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");
    if SUPPORTED_LANGUAGES.contains(&first) {
        first.to_string()
    } else {
        default.to_string()
    }
}

/// Resolves the locale for one update pass over `doc`, viewed at `url`.
pub fn resolve_locale(doc: &Document, url: &str) -> String {
    locale_from_path(&page_path(url), &default_locale(doc))
}
