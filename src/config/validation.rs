//! Configuration validation logic.

use crate::config::loader::HelperConfig;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Validate the entire configuration.
pub fn validate_config(config: &HelperConfig) -> Result<()> {
    validate_mode(&config.fs.mode)?;
    validate_datetime_format(&config.format.datetime_format)?;

    Ok(())
}

/// Validate an octal permission mode string.
pub fn validate_mode(mode: &str) -> Result<()> {
    static MODE_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = MODE_PATTERN
        .get_or_init(|| Regex::new(r"^(0[oO]?)?[0-7]{1,4}$").expect("mode pattern is valid"));

    if !pattern.is_match(mode.trim()) {
        return Err(Error::ConfigValidation {
            field: "fs.mode".to_string(),
            message: format!(
                "Mode '{}' is not an octal permission value (e.g. 0755)",
                mode
            ),
        });
    }

    Ok(())
}

/// Validate the default date/time pattern.
pub fn validate_datetime_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "format.datetime_format".to_string(),
            message: "Date/time format must not be empty".to_string(),
        });
    }

    Ok(())
}
