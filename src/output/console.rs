//! Console output utilities.

use console::style;

use crate::config::HelperConfig;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a debug message.
pub fn print_debug(message: &str) {
    eprintln!("{} {}", style("DEBUG").dim(), message);
}

/// Print the effective configuration.
pub fn print_config_summary(config: &HelperConfig) {
    eprintln!("{}", style("Configuration:").bold());
    eprintln!("  Mode: {}", config.fs.mode);
    eprintln!("  Skip hidden: {}", config.fs.skip_hidden);
    eprintln!("  Date format: {}", config.format.datetime_format);
    eprintln!("  UUID version: {}", config.format.uuid_version);
}
