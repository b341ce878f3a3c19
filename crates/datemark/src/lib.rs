// ABOUTME: Core library for locale-aware date rewriting in HTML documents.
// ABOUTME: Re-exports the public API: rewrite_html, update_date_elements, locale resolution, format table, parsing, rendering.

//! Datemark - rewrites marked date elements in an HTML document.
//!
//! Elements carrying the `ns-date-format` attribute have their text content
//! parsed as a date and re-rendered according to the attribute's format token
//! and a locale resolved from the page URL path or a script-tag default.
//! Text that does not parse as a date is left untouched.
//!
//! # Example
//!
//! ```
//! use datemark::rewrite_html;
//!
//! let page = r#"<!DOCTYPE html>
//! <html><body><span ns-date-format="DD.MM.YYYY">2021-01-15</span></body></html>"#;
//!
//! let (rewritten, stats) = rewrite_html(page, "https://example.ch/de/aktuell");
//! assert!(rewritten.contains("15.01.2021"));
//! assert_eq!(stats.rewritten, 1);
//! ```

pub mod format;
pub mod locale;
pub mod render;
pub mod time_parse;
pub mod update;

pub use crate::format::{format_options, format_tokens, FormatOptions, MonthStyle, NumberStyle, TextStyle};
pub use crate::locale::{
    default_locale, locale_from_path, page_path, resolve_locale, FALLBACK_LOCALE,
    SUPPORTED_LANGUAGES,
};
pub use crate::render::format_datetime;
pub use crate::time_parse::parse_date_text;
pub use crate::update::{reformat_date_text, rewrite_html, update_date_elements, UpdateStats, MARKER_ATTR};
