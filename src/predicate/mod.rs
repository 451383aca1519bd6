//! Type predicates.
//!
//! Provides:
//! - Shape and emptiness checks over dynamic values
//! - Type checks over host values behind `&dyn Any`
//! - Numeric-literal and IP address checks over strings

pub mod host;
pub mod text;
pub mod value;

pub use host::{is_buffer, is_date, is_error, is_regexp};
pub use text::{ip_version, is_ip, is_ipv4, is_ipv6, is_number_string};
pub use value::{
    is_array, is_boolean, is_empty, is_int, is_null, is_null_or_undefined, is_number, is_object,
    is_primitive, is_string, is_true_empty, is_undefined,
};
