// ABOUTME: Integration tests for the document update pass.
// ABOUTME: Covers locale resolution end to end, rewrite scenarios, silent skips, and second-pass behavior.

use dom_query::Document;
use pretty_assertions::assert_eq;

use datemark::{resolve_locale, rewrite_html, update_date_elements, UpdateStats};

fn page(head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>News</title>{}</head><body>{}</body></html>",
        head_extra, body
    )
}

fn text_of(doc: &Document, css: &str) -> String {
    doc.select(css).text().trim().to_string()
}

#[test]
fn iso_token_renders_iso_date_for_english() {
    let html = page(
        "",
        r#"<span id="d" ns-date-format="YYYY-MM-DD">2021-01-15T00:00:00Z</span>"#,
    );
    let doc = Document::from(html.as_str());

    let stats = update_date_elements(&doc, "https://example.com/en/news");

    assert_eq!(text_of(&doc, "#d"), "2021-01-15");
    assert_eq!(stats, UpdateStats { matched: 1, rewritten: 1, skipped: 0 });
}

#[test]
fn long_month_token_renders_english_textual_date() {
    let html = page(
        r#"<script src="/app.js" data-default-lang="en"></script>"#,
        r#"<time id="d" ns-date-format="MMMM DD, YYYY">2021-01-15</time>"#,
    );
    let doc = Document::from(html.as_str());

    update_date_elements(&doc, "/about");

    assert_eq!(text_of(&doc, "#d"), "January 15, 2021");
}

#[test]
fn german_pages_render_dotted_dates() {
    let html = page("", r#"<span id="d" ns-date-format="DD.MM.YYYY">2021-01-15</span>"#);
    let doc = Document::from(html.as_str());

    update_date_elements(&doc, "https://example.com/de/aktuelles");

    assert_eq!(text_of(&doc, "#d"), "15.01.2021");
}

#[test]
fn url_segment_beats_default_language_marker() {
    let html = page(
        r#"<script data-default-lang="de"></script>"#,
        r#"<span id="d" ns-date-format="D de MMMM de YYYY">2021-01-15</span>"#,
    );
    let doc = Document::from(html.as_str());

    assert_eq!(resolve_locale(&doc, "/es/acerca"), "es");
    update_date_elements(&doc, "/es/acerca");

    assert_eq!(text_of(&doc, "#d"), "15 de enero de 2021");
}

#[test]
fn missing_marker_defaults_to_swiss_french() {
    let html = page("", r#"<span id="d" ns-date-format="DD-MM-YYYY">2021-01-15</span>"#);
    let doc = Document::from(html.as_str());

    assert_eq!(resolve_locale(&doc, "/"), "fr-CH");
    update_date_elements(&doc, "/");

    assert_eq!(text_of(&doc, "#d"), "15.01.2021");
}

#[test]
fn unparseable_text_is_left_unchanged() {
    let html = page("", r#"<span id="d" ns-date-format="YYYY-MM-DD">hello world</span>"#);
    let doc = Document::from(html.as_str());

    let stats = update_date_elements(&doc, "/en/");

    assert_eq!(text_of(&doc, "#d"), "hello world");
    assert_eq!(stats, UpdateStats { matched: 1, rewritten: 0, skipped: 1 });
}

#[test]
fn bad_elements_do_not_abort_the_pass() {
    let html = page(
        "",
        concat!(
            r#"<span id="bad" ns-date-format="YYYY-MM-DD">not a date</span>"#,
            r#"<span id="good" ns-date-format="MMMM DD, YYYY">2021-01-15</span>"#,
        ),
    );
    let doc = Document::from(html.as_str());

    let stats = update_date_elements(&doc, "/en/articles");

    assert_eq!(text_of(&doc, "#bad"), "not a date");
    assert_eq!(text_of(&doc, "#good"), "January 15, 2021");
    assert_eq!(stats, UpdateStats { matched: 2, rewritten: 1, skipped: 1 });
}

#[test]
fn marker_attribute_and_structure_survive_the_pass() {
    let html = page(
        "",
        r#"<p>Published <span id="d" class="date" ns-date-format="YYYY-MM-DD">2021-01-15</span> here.</p>"#,
    );
    let doc = Document::from(html.as_str());

    update_date_elements(&doc, "/en/post");

    let span = doc.select("#d");
    assert_eq!(span.attr("ns-date-format").as_deref(), Some("YYYY-MM-DD"));
    assert_eq!(span.attr("class").as_deref(), Some("date"));
    assert_eq!(doc.select("p").text().trim(), "Published 2021-01-15 here.");
}

#[test]
fn unknown_token_falls_back_to_locale_default_date() {
    let html = page("", r#"<span id="d" ns-date-format="XYZ">2021-01-15</span>"#);
    let doc = Document::from(html.as_str());

    update_date_elements(&doc, "/de/");

    assert_eq!(text_of(&doc, "#d"), "15.01.2021");
}

#[test]
fn second_pass_leaves_rewritten_text_alone() {
    let html = page(
        "",
        r#"<span id="d" ns-date-format="MMMM DD, YYYY">2021-01-15</span>"#,
    );

    let (first, stats) = rewrite_html(&html, "/en/news");
    assert_eq!(stats.rewritten, 1);
    assert!(first.contains("January 15, 2021"));

    // The rendered text is outside the parser contract, so a re-run skips it.
    let (second, stats) = rewrite_html(&first, "/en/news");
    assert_eq!(stats, UpdateStats { matched: 1, rewritten: 0, skipped: 1 });
    assert!(second.contains("January 15, 2021"));
}

#[test]
fn documents_without_markers_are_untouched() {
    let html = page("", "<p>No dates here, just 2021-01-15 in prose.</p>");
    let doc = Document::from(html.as_str());

    let stats = update_date_elements(&doc, "/en/");

    assert_eq!(stats, UpdateStats::default());
    assert_eq!(doc.select("p").text().trim(), "No dates here, just 2021-01-15 in prose.");
}

#[test]
fn time_tokens_render_clock_values() {
    let html = page(
        "",
        concat!(
            r#"<span id="t12" ns-date-format="h:mm A">2021-01-15T13:45:30Z</span>"#,
            r#"<span id="t24" ns-date-format="HH:mm:ss">2021-01-15T13:45:30Z</span>"#,
        ),
    );
    let doc = Document::from(html.as_str());

    update_date_elements(&doc, "/en/schedule");

    assert_eq!(text_of(&doc, "#t12"), "1:45 PM");
    assert_eq!(text_of(&doc, "#t24"), "13:45:30");
}
