//! Deep file enumeration.

use std::path::{Component, Path, MAIN_SEPARATOR};

use walkdir::{DirEntry, WalkDir};

use crate::fs::node::normalize;

/// List every file below `root`, depth first, as paths relative to `root`.
///
/// Each returned path starts with `prefix`; nested files extend it with
/// their directory names joined by the platform separator. Directories
/// themselves are never listed. A missing or unreadable root gives an
/// empty list. Entry order is whatever the platform's directory listing
/// returns. Symlinks are followed.
///
/// Entries whose name is not valid UTF-8 are skipped, with a warning.
pub fn enumerate_files(root: impl AsRef<Path>, prefix: &str) -> Vec<String> {
    enumerate_files_filtered(root, prefix, |_, _| true)
}

/// Like [`enumerate_files`], with a `filter(name, is_directory)` predicate.
///
/// Returning `false` for a file omits it; returning `false` for a directory
/// prunes its whole subtree.
pub fn enumerate_files_filtered<F>(root: impl AsRef<Path>, prefix: &str, filter: F) -> Vec<String>
where
    F: Fn(&str, bool) -> bool,
{
    let root = normalize(root);

    WalkDir::new(&root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || accepts(entry, &filter))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| relative_name(&root, entry.path()))
        .map(|relative| format!("{}{}", prefix, relative))
        .collect()
}

/// Filter that skips dot-files and dot-directories.
pub fn hidden_filter() -> impl Fn(&str, bool) -> bool {
    |name, _| !name.starts_with('.')
}

fn accepts(entry: &DirEntry, filter: &dyn Fn(&str, bool) -> bool) -> bool {
    match entry.file_name().to_str() {
        Some(name) => filter(name, entry.file_type().is_dir()),
        None => {
            tracing::warn!("Skipping non UTF-8 name {}", entry.path().display());
            false
        }
    }
}

/// `path` relative to `root`, components joined by the platform separator.
fn relative_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join(&MAIN_SEPARATOR.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sorted(mut files: Vec<String>) -> Vec<String> {
        files.sort();
        files
    }

    fn sep(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    fn make_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.js"), "a").unwrap();
        std::fs::create_dir(dir.path().join("lib")).unwrap();
        std::fs::write(dir.path().join("lib/util.js"), "b").unwrap();
        dir
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(enumerate_files(dir.path().join("wwwfasdf"), "").is_empty());
    }

    #[test]
    fn test_single_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.js"), "a").unwrap();
        assert_eq!(enumerate_files(dir.path(), ""), vec!["index.js".to_string()]);
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let dir = make_tree();
        let files = sorted(enumerate_files(dir.path(), ""));
        assert_eq!(files, vec!["index.js".to_string(), sep("lib/util.js")]);
    }

    #[test]
    fn test_prefix_is_threaded() {
        let dir = make_tree();
        let files = sorted(enumerate_files(dir.path(), "app/"));
        assert_eq!(
            files,
            vec![
                "app/index.js".to_string(),
                format!("app/lib{}util.js", MAIN_SEPARATOR)
            ]
        );
    }

    #[test]
    fn test_filter_prunes_directories() {
        let dir = make_tree();
        let files = enumerate_files_filtered(dir.path(), "", |_, is_dir| !is_dir);
        assert_eq!(files, vec!["index.js".to_string()]);
    }

    #[test]
    fn test_filter_skips_files() {
        let dir = make_tree();
        let files = enumerate_files_filtered(dir.path(), "", |name, _| name != "index.js");
        assert_eq!(files, vec![sep("lib/util.js")]);
    }

    #[test]
    fn test_hidden_filter() {
        let dir = make_tree();
        std::fs::write(dir.path().join(".env"), "c").unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git/HEAD"), "d").unwrap();

        let all = enumerate_files(dir.path(), "");
        assert_eq!(all.len(), 4);

        let visible = sorted(enumerate_files_filtered(dir.path(), "", hidden_filter()));
        assert_eq!(visible, vec!["index.js".to_string(), sep("lib/util.js")]);
    }

    #[test]
    fn test_empty_directories_are_not_listed() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        assert!(enumerate_files(dir.path(), "").is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = make_tree();
        let odd = dir.path().join(OsStr::from_bytes(b"bad\xffname"));
        std::fs::write(&odd, "x").unwrap();

        let files = sorted(enumerate_files(dir.path(), ""));
        assert_eq!(files, vec!["index.js".to_string(), sep("lib/util.js")]);
        for file in &files {
            assert!(dir.path().join(file).exists());
        }
    }

    #[test]
    fn test_hidden_root_is_walked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".cache");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("entry"), "x").unwrap();

        let files = enumerate_files_filtered(&root, "", hidden_filter());
        assert_eq!(files, vec!["entry".to_string()]);
    }

    #[test]
    fn test_file_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("index.js");
        std::fs::write(&file, "a").unwrap();
        assert!(enumerate_files(&file, "").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_directory_symlinks() {
        let dir = TempDir::new().unwrap();
        let outside = dir.path().join("outside");
        std::fs::create_dir(&outside).unwrap();
        std::fs::write(outside.join("shared.js"), "x").unwrap();

        let root = dir.path().join("root");
        std::fs::create_dir(&root).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("linked")).unwrap();

        assert_eq!(enumerate_files(&root, ""), vec![sep("linked/shared.js")]);
    }
}
