//! Path checks and node classification.

use std::path::{Component, Path, PathBuf};

/// What a path points at, observed at the instant of the stat call.
///
/// The classification is never cached, so it can race with external
/// mutation of the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
    /// Exists but is neither a regular file nor a directory (fifo, socket, device).
    Other,
    Missing,
}

impl NodeKind {
    /// Classify a path, following symlinks.
    pub fn of(path: &Path) -> Self {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => NodeKind::File,
            Ok(meta) if meta.is_dir() => NodeKind::Directory,
            Ok(_) => NodeKind::Other,
            Err(_) => NodeKind::Missing,
        }
    }

    pub fn exists(self) -> bool {
        !matches!(self, NodeKind::Missing)
    }
}

/// Lexically normalize a path: drop `.` components and fold `name/..` pairs.
///
/// Leading `..` components of a relative path are kept. An empty result
/// becomes `.`.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }

    out
}

/// Classify `path` after normalizing it.
pub fn node_kind(path: impl AsRef<Path>) -> NodeKind {
    NodeKind::of(&normalize(path))
}

/// Check whether a path exists.
pub fn is_exist(path: impl AsRef<Path>) -> bool {
    node_kind(path).exists()
}

/// Check whether a path is a regular file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    node_kind(path) == NodeKind::File
}

/// Check whether a path is a directory.
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    node_kind(path) == NodeKind::Directory
}

/// Alias for [`is_directory`].
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    is_directory(path)
}
