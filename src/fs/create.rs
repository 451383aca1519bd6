//! Recursive directory creation.

use std::io::ErrorKind;
use std::path::Path;

use crate::fs::mode::{change_mode, Mode};
use crate::fs::node::{normalize, NodeKind};

/// Ensure `path` exists as a directory with `mode`, creating missing parents.
///
/// An existing directory only has `mode` applied (see [`change_mode`]).
/// An existing file (or any other non-directory) is a failure: it is left
/// untouched, permissions included, and `false` is returned. Other ordinary
/// failures (permission denied, a parent that is a file) are logged and
/// reported as `false` too.
pub fn create_directory(path: impl AsRef<Path>, mode: Mode) -> bool {
    create_normalized(&normalize(path), mode)
}

fn create_normalized(path: &Path, mode: Mode) -> bool {
    match NodeKind::of(path) {
        NodeKind::Directory => return change_mode(path, mode),
        NodeKind::File | NodeKind::Other => return not_a_directory(path),
        NodeKind::Missing => {}
    }

    // `parent()` of a bare name is the empty path, which stands for the cwd
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !NodeKind::of(parent).exists() && !create_normalized(parent, mode) {
            tracing::debug!(
                "Not creating {}, parent could not be created",
                path.display()
            );
            return false;
        }
    }

    match make_dir(path, mode) {
        Ok(()) => {
            tracing::debug!("Created directory {} ({})", path.display(), mode);
            true
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            // Created by someone else between the existence check and the mkdir.
            if NodeKind::of(path) == NodeKind::Directory {
                change_mode(path, mode)
            } else {
                not_a_directory(path)
            }
        }
        Err(e) => {
            tracing::warn!("Failed to create directory {}: {}", path.display(), e);
            false
        }
    }
}

fn not_a_directory(path: &Path) -> bool {
    tracing::warn!(
        "Cannot create directory {}, a non-directory already exists there",
        path.display()
    );
    false
}

#[cfg(unix)]
fn make_dir(path: &Path, mode: Mode) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new().mode(mode.bits()).create(path)
}

#[cfg(not(unix))]
fn make_dir(path: &Path, _mode: Mode) -> std::io::Result<()> {
    std::fs::DirBuilder::new().create(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::node::{is_directory, is_file};
    use tempfile::TempDir;

    #[test]
    fn test_create_single_level() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("welefen22");

        assert!(create_directory(&target, Mode::DEFAULT));
        assert!(is_directory(&target));
    }

    #[test]
    fn test_create_nested_levels() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("welefen").join("suredy").join("www");

        assert!(create_directory(&target, Mode::DEFAULT));
        assert!(is_directory(dir.path().join("welefen")));
        assert!(is_directory(dir.path().join("welefen/suredy")));
        assert!(is_directory(&target));
    }

    #[test]
    fn test_create_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("welefen44/suredy/www");

        assert!(create_directory(&target, Mode::DEFAULT));
        assert!(create_directory(&target, Mode::DEFAULT));
        assert!(is_directory(&target));
    }

    #[test]
    fn test_create_over_existing_file_fails() {
        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("a/b");
        std::fs::create_dir_all(&parent).unwrap();
        let file = parent.join("c");
        std::fs::write(&file, "keep me").unwrap();

        assert!(!create_directory(&file, Mode::DEFAULT));
        assert!(is_file(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "keep me");
    }

    #[cfg(unix)]
    #[test]
    fn test_create_over_existing_file_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("c");
        std::fs::write(&file, "x").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o600)).unwrap();

        assert!(!create_directory(&file, Mode::DEFAULT));
        let bits = std::fs::metadata(&file).unwrap().permissions().mode() & 0o7777;
        assert_eq!(bits, 0o600);
    }

    #[test]
    fn test_create_below_a_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, "x").unwrap();

        assert!(!create_directory(file.join("child"), Mode::DEFAULT));
        assert!(is_file(&file));
    }

    #[test]
    fn test_create_with_dot_components() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("x/./y/../z");

        assert!(create_directory(&target, Mode::DEFAULT));
        assert!(is_directory(dir.path().join("x/z")));
        assert!(!dir.path().join("x/y").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_directory_gets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("m");
        std::fs::create_dir(&target).unwrap();

        assert!(create_directory(&target, Mode::new(0o750)));
        let bits = std::fs::metadata(&target).unwrap().permissions().mode() & 0o7777;
        assert_eq!(bits, 0o750);
    }
}
