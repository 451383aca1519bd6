//! Predicates over host (non-JSON) values.
//!
//! These inspect the concrete type behind a `&dyn Any`.

use std::any::Any;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::Error;

/// Date and time values from `chrono` or `std::time`.
pub fn is_date(value: &dyn Any) -> bool {
    value.is::<DateTime<Utc>>()
        || value.is::<DateTime<Local>>()
        || value.is::<DateTime<FixedOffset>>()
        || value.is::<NaiveDateTime>()
        || value.is::<NaiveDate>()
        || value.is::<SystemTime>()
}

/// Compiled regular expressions.
pub fn is_regexp(value: &dyn Any) -> bool {
    value.is::<Regex>() || value.is::<regex::bytes::Regex>()
}

/// Error values.
pub fn is_error(value: &dyn Any) -> bool {
    value.is::<Error>()
        || value.is::<std::io::Error>()
        || value.is::<serde_json::Error>()
        || value.is::<Box<dyn std::error::Error>>()
        || value.is::<Box<dyn std::error::Error + Send + Sync>>()
}

/// Owned or static byte buffers.
pub fn is_buffer(value: &dyn Any) -> bool {
    value.is::<Vec<u8>>() || value.is::<Box<[u8]>>() || value.is::<&'static [u8]>()
}
