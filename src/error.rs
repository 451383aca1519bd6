//! Error types for the think-helper library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    // Conversion errors
    #[error("Conversion error: {0}")]
    Conversion(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Control flow
    #[error("PREVENT_NEXT_PROCESS")]
    Prevent,

    #[error("Deferred dropped without being settled")]
    Deferred,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Return a [`Error::Prevent`] sentinel used to stop a handler chain.
pub fn prevent() -> Error {
    Error::Prevent
}

/// Check whether an error is the prevent sentinel.
pub fn is_prevent(err: &Error) -> bool {
    matches!(err, Error::Prevent)
}

/// Exit codes for the command-line binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const CONVERSION_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
