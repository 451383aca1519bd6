//! Humanized durations to milliseconds.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

const SECOND: f64 = 1000.0;
const MINUTE: f64 = SECOND * 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;
const YEAR: f64 = DAY * 365.25;

/// Longer inputs are rejected without being matched.
const MAX_INPUT_LEN: usize = 100;

fn duration_regex() -> &'static Regex {
    static DURATION: OnceLock<Regex> = OnceLock::new();
    DURATION.get_or_init(|| {
        Regex::new(
            r"(?i)^(-?(?:\d+)?\.?\d+) *(milliseconds?|msecs?|ms|seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d|weeks?|w|years?|yrs?|y)?$",
        )
        .expect("duration pattern is valid")
    })
}

/// Convert a humanized duration (`"2 days"`, `"1.5h"`, `"300"`, `"-10s"`)
/// into whole milliseconds. A bare number is already milliseconds.
///
/// Fractional results are rounded to the nearest millisecond.
pub fn ms(input: &str) -> Result<i64> {
    let unparseable = || Error::Conversion(format!("Cannot convert '{}' to milliseconds", input));

    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_INPUT_LEN {
        return Err(unparseable());
    }

    let captures = duration_regex().captures(trimmed).ok_or_else(unparseable)?;
    let amount: f64 = captures[1].parse().map_err(|_| unparseable())?;
    let unit = captures
        .get(2)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();

    let factor = match unit.as_str() {
        "years" | "year" | "yrs" | "yr" | "y" => YEAR,
        "weeks" | "week" | "w" => WEEK,
        "days" | "day" | "d" => DAY,
        "hours" | "hour" | "hrs" | "hr" | "h" => HOUR,
        "minutes" | "minute" | "mins" | "min" | "m" => MINUTE,
        "seconds" | "second" | "secs" | "sec" | "s" => SECOND,
        _ => 1.0,
    };

    let millis = (amount * factor).round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return Err(Error::Conversion(format!(
            "Duration '{}' does not fit in milliseconds",
            input
        )));
    }

    Ok(millis as i64)
}
