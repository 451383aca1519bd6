//! Filesystem module.
//!
//! Provides:
//! - Path checks and node classification
//! - Permission modes
//! - Recursive directory creation
//! - Deep file enumeration
//! - Asynchronous recursive removal

pub mod create;
pub mod mode;
pub mod node;
pub mod remove;
pub mod walk;

pub use create::create_directory;
pub use mode::{change_mode, Mode};
pub use node::{is_dir, is_directory, is_exist, is_file, node_kind, normalize, NodeKind};
pub use remove::remove_tree;
pub use walk::{enumerate_files, enumerate_files_filtered, hidden_filter};
