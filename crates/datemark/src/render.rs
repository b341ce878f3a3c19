// ABOUTME: Locale-aware rendering of a parsed date according to a FormatOptions record.
// ABOUTME: Maps options plus per-language conventions onto chrono's localized strftime formatting.

//! Rendering parsed dates for a locale.
//!
//! An options record says *which* components to show; the locale says *how*
//! they read. Month, weekday and day-period names come from chrono's
//! bundled locale data (`unstable-locales`); this module only supplies the
//! per-language composition conventions: the order and separator of numeric
//! dates, the shape of textual dates, and the preferred clock.
//!
//! Key behaviors:
//! - Numeric dates follow the language's component order and separator
//!   (English pages compose them ISO-style, German pages dotted
//!   day-first, French/Italian/Spanish slashed day-first).
//! - An empty options record renders the locale's full numeric date.
//! - Unknown locale identifiers render with POSIX names and ISO order.

use chrono::format::Locale;
use chrono::{DateTime, Utc};

use crate::format::{FormatOptions, MonthStyle, NumberStyle, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    YearMonthDay,
    DayMonthYear,
}

/// How a date with a named month reads in a given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextualShape {
    /// "January 15, 2021"
    MonthFirst,
    /// "15. Januar 2021"
    DayDotted,
    /// "15 janvier 2021"
    DayPlain,
    /// "15 de enero de 2021"
    DayWithDe,
}

struct Conventions {
    names: Locale,
    order: DateOrder,
    separator: char,
    textual: TextualShape,
    twelve_hour: bool,
}

/// Rendering for an unrecognized format token: the full numeric date in the
/// locale's own order.
const LOCALE_DEFAULT_DATE: FormatOptions = FormatOptions {
    weekday: None,
    day: Some(NumberStyle::TwoDigit),
    month: Some(MonthStyle::TwoDigit),
    year: Some(NumberStyle::Numeric),
    hour: None,
    minute: None,
    second: None,
    hour12: None,
};

fn conventions(locale_id: &str) -> Conventions {
    let normalized = locale_id.trim().replace('_', "-").to_lowercase();

    // Regional variants first; fr-CH writes numeric dates dotted.
    if normalized == "fr-ch" {
        return Conventions {
            names: Locale::fr_CH,
            order: DateOrder::DayMonthYear,
            separator: '.',
            textual: TextualShape::DayPlain,
            twelve_hour: false,
        };
    }

    let primary = normalized.split('-').next().unwrap_or("");
    match primary {
        "en" => Conventions {
            names: Locale::en_US,
            order: DateOrder::YearMonthDay,
            separator: '-',
            textual: TextualShape::MonthFirst,
            twelve_hour: true,
        },
        "de" => Conventions {
            names: Locale::de_DE,
            order: DateOrder::DayMonthYear,
            separator: '.',
            textual: TextualShape::DayDotted,
            twelve_hour: false,
        },
        "fr" => Conventions {
            names: Locale::fr_FR,
            order: DateOrder::DayMonthYear,
            separator: '/',
            textual: TextualShape::DayPlain,
            twelve_hour: false,
        },
        "it" => Conventions {
            names: Locale::it_IT,
            order: DateOrder::DayMonthYear,
            separator: '/',
            textual: TextualShape::DayPlain,
            twelve_hour: false,
        },
        "es" => Conventions {
            names: Locale::es_ES,
            order: DateOrder::DayMonthYear,
            separator: '/',
            textual: TextualShape::DayWithDe,
            twelve_hour: false,
        },
        _ => Conventions {
            names: Locale::POSIX,
            order: DateOrder::YearMonthDay,
            separator: '-',
            textual: TextualShape::MonthFirst,
            twelve_hour: false,
        },
    }
}

fn day_code(style: NumberStyle) -> &'static str {
    match style {
        NumberStyle::Numeric => "%-d",
        NumberStyle::TwoDigit => "%d",
    }
}

fn year_code(style: NumberStyle) -> &'static str {
    match style {
        NumberStyle::Numeric => "%Y",
        NumberStyle::TwoDigit => "%y",
    }
}

/// Builds the date portion of the strftime pattern, or an empty string when
/// the options name no date fields.
fn date_pattern(opts: &FormatOptions, conv: &Conventions) -> String {
    match opts.month {
        Some(MonthStyle::Short) => return textual_date_pattern(opts, conv, "%b"),
        Some(MonthStyle::Long) => return textual_date_pattern(opts, conv, "%B"),
        _ => {}
    }

    let day = opts.day.map(day_code);
    let month = opts.month.map(|style| match style {
        MonthStyle::Numeric => "%-m",
        _ => "%m",
    });
    let year = opts.year.map(year_code);

    let fields: Vec<&str> = match conv.order {
        DateOrder::YearMonthDay => [year, month, day],
        DateOrder::DayMonthYear => [day, month, year],
    }
    .into_iter()
    .flatten()
    .collect();

    fields.join(&conv.separator.to_string())
}

fn textual_date_pattern(opts: &FormatOptions, conv: &Conventions, month_code: &str) -> String {
    let day = opts.day.map(day_code);
    let year = opts.year.map(year_code);
    let mut out = String::new();

    match conv.textual {
        TextualShape::MonthFirst => {
            out.push_str(month_code);
            if let Some(day) = day {
                out.push(' ');
                out.push_str(day);
            }
            if let Some(year) = year {
                out.push_str(if day.is_some() { ", " } else { " " });
                out.push_str(year);
            }
        }
        TextualShape::DayDotted => {
            if let Some(day) = day {
                out.push_str(day);
                out.push_str(". ");
            }
            out.push_str(month_code);
            if let Some(year) = year {
                out.push(' ');
                out.push_str(year);
            }
        }
        TextualShape::DayPlain => {
            if let Some(day) = day {
                out.push_str(day);
                out.push(' ');
            }
            out.push_str(month_code);
            if let Some(year) = year {
                out.push(' ');
                out.push_str(year);
            }
        }
        TextualShape::DayWithDe => {
            if let Some(day) = day {
                out.push_str(day);
                out.push_str(" de ");
            }
            out.push_str(month_code);
            if let Some(year) = year {
                out.push_str(" de ");
                out.push_str(year);
            }
        }
    }

    out
}

/// Builds the time portion of the pattern, or an empty string when the
/// options name no time fields.
fn time_pattern(opts: &FormatOptions, conv: &Conventions) -> String {
    if opts.hour.is_none() && opts.minute.is_none() && opts.second.is_none() {
        return String::new();
    }

    let twelve_hour = opts.hour12.unwrap_or(conv.twelve_hour);
    let mut out = String::from(match (twelve_hour, opts.hour) {
        (true, Some(NumberStyle::Numeric)) => "%-I",
        (true, _) => "%I",
        (false, Some(NumberStyle::Numeric)) => "%-H",
        (false, _) => "%H",
    });

    if opts.minute.is_some() {
        out.push_str(":%M");
    }
    if opts.second.is_some() {
        out.push_str(":%S");
    }
    if twelve_hour {
        out.push_str(" %p");
    }

    out
}

fn strftime_pattern(opts: &FormatOptions, conv: &Conventions) -> String {
    let mut out = String::new();

    if let Some(style) = opts.weekday {
        out.push_str(match style {
            TextStyle::Short => "%a",
            TextStyle::Long => "%A",
        });
    }

    let date = date_pattern(opts, conv);
    if !date.is_empty() {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(&date);
    }

    let time = time_pattern(opts, conv);
    if !time.is_empty() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&time);
    }

    if out.is_empty() {
        return date_pattern(&LOCALE_DEFAULT_DATE, conv);
    }
    out
}

/// Renders `dt` for `locale_id` according to the options record.
pub fn format_datetime(dt: &DateTime<Utc>, opts: &FormatOptions, locale_id: &str) -> String {
    let conv = conventions(locale_id);
    let pattern = strftime_pattern(opts, &conv);
    let mut rendered = dt.format_localized(&pattern, conv.names).to_string();
    // Locales without day-period strings render %p as empty, leaving a
    // dangling space after 12-hour times.
    rendered.truncate(rendered.trim_end().len());
    rendered
}
