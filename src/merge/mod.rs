//! Merge module.
//!
//! Provides:
//! - Value shape classification
//! - Recursive deep merge (`extend`)
//! - Key removal (`omit`)

pub mod extend;
pub mod kind;
pub mod omit;

pub use extend::{extend, merge_all};
pub use kind::{is_truthy, Kind};
pub use omit::{omit, KeyList};
