//! Output module for console output.
//!
//! Provides:
//! - Colored status messages
//! - Configuration summary

pub mod console;

pub use console::{
    print_config_summary, print_debug, print_error, print_info, print_success, print_warning,
};
