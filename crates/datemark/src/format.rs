// ABOUTME: Closed lookup table from symbolic date-format tokens to structured formatting options.
// ABOUTME: Unrecognized tokens map to the empty options record (locale default rendering).

//! Format-token translation.
//!
//! Display formats are requested with short symbolic tokens (`"DD.MM.YYYY"`,
//! `"h:mm A"`, ...). Each token maps to an exact, fixed [`FormatOptions`]
//! record naming which date/time components to render and in what style; the
//! renderer decides component order and separators per locale.
//!
//! Key behaviors:
//! - Tokens match by exact string comparison; there is no pattern lexer.
//! - The vocabulary is a closed enumeration; new formats are new table rows.
//! - Unknown tokens yield `FormatOptions::default()`, which renders as the
//!   locale's default date. Every input has a defined output.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Rendering style for named components (weekday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    /// Abbreviated name ("Fri").
    Short,
    /// Full name ("Friday").
    Long,
}

/// Rendering style for numeric components (day, year, hour, minute, second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// Unpadded ("5").
    Numeric,
    /// Zero-padded to two digits ("05").
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// Rendering style for the month, which may be numeric or named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    /// Unpadded month number ("1").
    Numeric,
    /// Zero-padded month number ("01").
    #[serde(rename = "2-digit")]
    TwoDigit,
    /// Abbreviated name ("Jan").
    Short,
    /// Full name ("January").
    Long,
}

/// Which date/time components to render, and how.
///
/// `None` fields are omitted from the output. The empty record (all `None`)
/// means "render the locale's default date".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NumberStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<NumberStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<NumberStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<NumberStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<NumberStyle>,
    /// `Some(true)` forces a 12-hour clock with a day period, `Some(false)`
    /// a 24-hour clock. `None` defers to the locale's convention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour12: Option<bool>,
}

static FORMAT_TABLE: Lazy<HashMap<&'static str, FormatOptions>> = Lazy::new(|| {
    use MonthStyle as M;
    use NumberStyle as N;
    use TextStyle as T;

    let mut t = HashMap::new();

    // Single components. Samples are for Friday 2021-01-15 in English.
    t.insert("ddd", FormatOptions { weekday: Some(T::Short), ..Default::default() }); // Fri
    t.insert("dddd", FormatOptions { weekday: Some(T::Long), ..Default::default() }); // Friday
    t.insert("D", FormatOptions { day: Some(N::Numeric), ..Default::default() }); // 15
    t.insert("DD", FormatOptions { day: Some(N::TwoDigit), ..Default::default() }); // 15
    t.insert("MMM", FormatOptions { month: Some(M::Short), ..Default::default() }); // Jan
    t.insert("MMMM", FormatOptions { month: Some(M::Long), ..Default::default() }); // January
    t.insert("YY", FormatOptions { year: Some(N::TwoDigit), ..Default::default() }); // 21
    t.insert("YYYY", FormatOptions { year: Some(N::Numeric), ..Default::default() }); // 2021

    // Numeric dates. Component order and separator are the locale's, so the
    // punctuation in these tokens is a mnemonic, not a literal template.
    t.insert(
        "DD-MM",
        FormatOptions { day: Some(N::TwoDigit), month: Some(M::TwoDigit), ..Default::default() },
    );
    t.insert(
        "DD-MM-YYYY",
        FormatOptions {
            day: Some(N::TwoDigit),
            month: Some(M::TwoDigit),
            year: Some(N::Numeric),
            ..Default::default()
        },
    );
    t.insert(
        "DD/MM/YYYY",
        FormatOptions {
            day: Some(N::TwoDigit),
            month: Some(M::TwoDigit),
            year: Some(N::Numeric),
            ..Default::default()
        },
    );
    t.insert(
        "MM/DD/YYYY",
        FormatOptions {
            month: Some(M::TwoDigit),
            day: Some(N::TwoDigit),
            year: Some(N::Numeric),
            ..Default::default()
        },
    );
    t.insert(
        "DD.MM.YYYY",
        FormatOptions {
            day: Some(N::TwoDigit),
            month: Some(M::TwoDigit),
            year: Some(N::Numeric),
            ..Default::default()
        },
    );
    t.insert(
        "YYYY-MM-DD",
        FormatOptions {
            year: Some(N::Numeric),
            month: Some(M::TwoDigit),
            day: Some(N::TwoDigit),
            ..Default::default()
        },
    );

    // Textual dates.
    t.insert(
        "MMMM DD, YYYY",
        FormatOptions {
            month: Some(M::Long),
            day: Some(N::Numeric),
            year: Some(N::Numeric),
            ..Default::default()
        },
    ); // January 15, 2021
    t.insert(
        "D MMM YYYY",
        FormatOptions {
            day: Some(N::Numeric),
            month: Some(M::Short),
            year: Some(N::Numeric),
            ..Default::default()
        },
    ); // Jan 15, 2021
    t.insert(
        "dddd, MMMM DD, YYYY",
        FormatOptions {
            weekday: Some(T::Long),
            month: Some(M::Long),
            day: Some(N::Numeric),
            year: Some(N::Numeric),
            ..Default::default()
        },
    ); // Friday, January 15, 2021
    t.insert(
        "D de MMMM de YYYY",
        FormatOptions {
            day: Some(N::Numeric),
            month: Some(M::Long),
            year: Some(N::Numeric),
            ..Default::default()
        },
    ); // 15 de enero de 2021 (es)

    // Times.
    t.insert(
        "HH:mm",
        FormatOptions {
            hour: Some(N::TwoDigit),
            minute: Some(N::TwoDigit),
            hour12: Some(false),
            ..Default::default()
        },
    ); // 13:45
    t.insert(
        "HH:mm:ss",
        FormatOptions {
            hour: Some(N::TwoDigit),
            minute: Some(N::TwoDigit),
            second: Some(N::TwoDigit),
            hour12: Some(false),
            ..Default::default()
        },
    ); // 13:45:30
    t.insert(
        "h:mm A",
        FormatOptions {
            hour: Some(N::Numeric),
            minute: Some(N::Numeric),
            hour12: Some(true),
            ..Default::default()
        },
    ); // 1:45 PM
    t.insert(
        "h:mm:ss A",
        FormatOptions {
            hour: Some(N::Numeric),
            minute: Some(N::Numeric),
            second: Some(N::Numeric),
            hour12: Some(true),
            ..Default::default()
        },
    ); // 1:45:30 PM

    // Combined date and time.
    t.insert(
        "DD-MM-YYYY HH:mm",
        FormatOptions {
            day: Some(N::TwoDigit),
            month: Some(M::TwoDigit),
            year: Some(N::Numeric),
            hour: Some(N::TwoDigit),
            minute: Some(N::TwoDigit),
            hour12: Some(false),
            ..Default::default()
        },
    );
    t.insert(
        "MMMM DD, YYYY h:mm A",
        FormatOptions {
            month: Some(M::Long),
            day: Some(N::Numeric),
            year: Some(N::Numeric),
            hour: Some(N::Numeric),
            minute: Some(N::Numeric),
            hour12: Some(true),
            ..Default::default()
        },
    );
    t.insert(
        "DD/MM/YYYY HH:mm:ss",
        FormatOptions {
            day: Some(N::TwoDigit),
            month: Some(M::TwoDigit),
            year: Some(N::Numeric),
            hour: Some(N::TwoDigit),
            minute: Some(N::TwoDigit),
            second: Some(N::TwoDigit),
            hour12: Some(false),
            ..Default::default()
        },
    );
    t.insert(
        "YYYY-MM-DDTHH:mm:ss",
        FormatOptions {
            year: Some(N::Numeric),
            month: Some(M::TwoDigit),
            day: Some(N::TwoDigit),
            hour: Some(N::TwoDigit),
            minute: Some(N::TwoDigit),
            second: Some(N::TwoDigit),
            hour12: Some(false),
            ..Default::default()
        },
    );

    t
});

/// Translates a format token into its options record.
///
/// Unknown tokens return the empty record, deferring to the locale's default
/// rendering. Total function; never fails.
pub fn format_options(token: &str) -> FormatOptions {
    FORMAT_TABLE.get(token).copied().unwrap_or_default()
}

/// Iterates over every recognized token and its options record.
pub fn format_tokens() -> impl Iterator<Item = (&'static str, FormatOptions)> {
    FORMAT_TABLE.iter().map(|(token, options)| (*token, *options))
}
