//! Configuration module for think-helper.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation
//! - Resolving layered adapter configuration blocks

pub mod adapter;
pub mod loader;
pub mod validation;

pub use adapter::parse_adapter_config;
pub use loader::{FormatConfig, FsConfig, HelperConfig};
pub use validation::{validate_config, validate_datetime_format, validate_mode};
