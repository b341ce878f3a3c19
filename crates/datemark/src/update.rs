// ABOUTME: The document update pass: finds marked elements and rewrites their text as formatted dates.
// ABOUTME: Per-element failures are isolated and silent; the pass reports counters instead of errors.

//! The element update pass.
//!
//! Key behaviors:
//! - The locale is resolved once per pass, then applied to every element.
//! - Each `[ns-date-format]` element is processed independently: its trimmed
//!   text is parsed, and on success replaced with the rendered date. Text
//!   that does not parse is left exactly as it was, and processing of the
//!   remaining elements continues.
//! - Only text content changes. The marker attribute and the element
//!   structure stay untouched, so a pass can run again after dynamic
//!   content injection.

use dom_query::{Document, Matcher};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::format::format_options;
use crate::locale::resolve_locale;
use crate::render::format_datetime;
use crate::time_parse::parse_date_text;

/// Attribute marking an element for date formatting; its value is the
/// format token, the element's text is the date source.
pub const MARKER_ATTR: &str = "ns-date-format";

static MARKER_MATCHER: Lazy<Matcher> =
    Lazy::new(|| Matcher::new("[ns-date-format]").expect("static selector is valid"));

/// Counters from one update pass, for diagnostics and tests.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateStats {
    /// Elements carrying the marker attribute.
    pub matched: usize,
    /// Elements whose text was replaced with a rendered date.
    pub rewritten: usize,
    /// Elements left untouched because their text did not parse.
    pub skipped: usize,
}

/// Reformats one piece of date text for a format token and locale.
///
/// Returns `None` when the text is not parseable under the documented
/// parser contract, in which case the original text should stand.
pub fn reformat_date_text(text: &str, token: &str, locale_id: &str) -> Option<String> {
    let parsed = parse_date_text(text)?;
    let options = format_options(token);
    Some(format_datetime(&parsed, &options, locale_id))
}

/// Runs the update pass over every marked element in `doc`.
///
/// `page_url` (a full URL or a bare path) feeds locale resolution together
/// with the document's default-language marker.
pub fn update_date_elements(doc: &Document, page_url: &str) -> UpdateStats {
    let locale = resolve_locale(doc, page_url);
    let mut stats = UpdateStats::default();

    for element in doc.select_matcher(&MARKER_MATCHER).iter() {
        stats.matched += 1;

        let token = element
            .attr(MARKER_ATTR)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();
        let source = element.text();

        match reformat_date_text(source.trim(), &token, &locale) {
            Some(rendered) => {
                element.set_html(escape_text(&rendered).as_str());
                stats.rewritten += 1;
            }
            None => stats.skipped += 1,
        }
    }

    stats
}

/// Parses `html`, runs the update pass, and serializes the document back.
pub fn rewrite_html(html: &str, page_url: &str) -> (String, UpdateStats) {
    let doc = Document::from(html);
    let stats = update_date_elements(&doc, page_url);
    (doc.html().to_string(), stats)
}

/// Escapes text for insertion as element content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
