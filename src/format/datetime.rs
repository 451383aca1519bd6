//! Date/time formatting with `YYYY-MM-DD HH:mm:ss` style tokens.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};

/// Format used when none is given.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Naive layouts accepted by [`parse_datetime`], tried in order.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Format `date` (local wall-clock time, now when `None`) with `format`
/// ([`DEFAULT_FORMAT`] when `None`).
pub fn datetime(date: Option<NaiveDateTime>, format: Option<&str>) -> String {
    let date = date.unwrap_or_else(|| Local::now().naive_local());
    format_datetime(&date, format.unwrap_or(DEFAULT_FORMAT))
}

/// Parse `input` with [`parse_datetime`] and format it.
pub fn datetime_from_str(input: &str, format: Option<&str>) -> Result<String> {
    let date = parse_datetime(input)?;
    Ok(datetime(Some(date), format))
}

/// Replace the tokens `YYYY`, `MM`, `DD`, `HH`, `mm` and `ss` in `format`.
///
/// A token is a run of one repeated letter; runs that are not one of the
/// tokens above (`YY`, `SSS`, `YYYYY`) are copied unchanged, and so is every
/// other character.
pub fn format_datetime(date: &NaiveDateTime, format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 4);
    let mut rest = format;

    while let Some(first) = rest.chars().next() {
        let run_len = if first.is_ascii_alphabetic() {
            rest.find(|c: char| c != first).unwrap_or(rest.len())
        } else {
            first.len_utf8()
        };
        let (token, tail) = rest.split_at(run_len);

        match token {
            "YYYY" => out.push_str(&date.year().to_string()),
            "MM" => out.push_str(&format!("{:02}", date.month())),
            "DD" => out.push_str(&format!("{:02}", date.day())),
            "HH" => out.push_str(&format!("{:02}", date.hour())),
            "mm" => out.push_str(&format!("{:02}", date.minute())),
            "ss" => out.push_str(&format!("{:02}", date.second())),
            other => out.push_str(other),
        }

        rest = tail;
    }

    out
}

/// Parse a date/time string into local wall-clock time.
///
/// RFC 3339 and RFC 2822 inputs carry an offset and are converted to the
/// local zone. Offset-less inputs (`2024-01-31 08:05:09`, `2024-01-31`)
/// are taken as local time already.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Local).naive_local());
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(input) {
        return Ok(date.with_timezone(&Local).naive_local());
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(date) = NaiveDateTime::parse_from_str(input, layout) {
            return Ok(date);
        }
    }

    for layout in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, layout) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight);
            }
        }
    }

    Err(Error::Conversion(format!("Unrecognized date: '{}'", input)))
}
