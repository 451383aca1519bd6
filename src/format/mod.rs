//! Formatting utilities.
//!
//! Provides:
//! - String case conversion
//! - HTML escaping
//! - Date/time formatting
//! - MD5 digests
//! - UUID generation
//! - Humanized duration parsing

pub mod case;
pub mod datetime;
pub mod digest;
pub mod duration;
pub mod html;
pub mod id;

pub use case::{camel_case, snake_case};
pub use datetime::{datetime, datetime_from_str, format_datetime, parse_datetime, DEFAULT_FORMAT};
pub use digest::md5;
pub use duration::ms;
pub use html::escape_html;
pub use id::{uuid, UuidVersion};
