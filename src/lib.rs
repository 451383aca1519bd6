//! think-helper - general purpose helpers
//!
//! This library provides the small utilities an application framework leans on.
//!
//! # Features
//!
//! - Deep merge of JSON values with sequence replacement semantics
//! - Recursive directory creation, enumeration and concurrent removal
//! - Type and emptiness predicates over dynamic values
//! - Case conversion, HTML escaping, date formatting, MD5 digests and UUIDs
//! - Humanized duration parsing
//! - Adapter configuration resolution
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use think_helper::{extend, fs::remove_tree};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut target = json!({"name": ["1"]});
//!     extend(&mut target, &[json!({"name": ["2"]})]);
//!     assert_eq!(target, json!({"name": ["2"]}));
//!
//!     remove_tree("runtime/cache", false).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod fs;
pub mod merge;
pub mod output;
pub mod predicate;
pub mod task;

// Re-exports for convenience
pub use config::{parse_adapter_config, HelperConfig};
pub use error::{is_prevent, prevent, Error, Result};
pub use format::{camel_case, datetime, escape_html, md5, ms, snake_case, uuid, UuidVersion};
pub use fs::{
    change_mode, create_directory, enumerate_files, enumerate_files_filtered, remove_tree, Mode,
};
pub use merge::{extend, omit};
pub use task::{defer, timeout};
