//! Permission modes.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::fs::node::{normalize, NodeKind};

/// Unix permission bits, parsed from an octal string such as `"0777"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u32);

impl Mode {
    /// `0777`, the mode used when callers do not pick one.
    pub const DEFAULT: Mode = Mode(0o777);

    /// Create a mode from raw bits. Anything above `0o7777` is masked off.
    pub const fn new(bits: u32) -> Self {
        Mode(bits & 0o7777)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::DEFAULT
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0o")
            .or_else(|| trimmed.strip_prefix("0O"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(Error::Conversion(format!("Empty permission mode: '{}'", s)));
        }

        let bits = u32::from_str_radix(digits, 8)
            .map_err(|_| Error::Conversion(format!("Invalid octal permission mode: '{}'", s)))?;

        if bits > 0o7777 {
            return Err(Error::Conversion(format!(
                "Permission mode out of range: '{}'",
                s
            )));
        }

        Ok(Mode(bits))
    }
}

/// Apply `mode` to `path`.
///
/// A path that does not exist is a no-op and reports `true`: nothing needed
/// changing. `false` means the path exists and the chmod call failed; the
/// platform error is logged, not returned.
pub fn change_mode(path: impl AsRef<Path>, mode: Mode) -> bool {
    let path = normalize(path);

    if !NodeKind::of(&path).exists() {
        tracing::debug!("chmod skipped, {} does not exist", path.display());
        return true;
    }

    match set_mode(&path, mode) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to chmod {} to {}: {}", path.display(), mode, e);
            false
        }
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: Mode) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode.bits()))
}

#[cfg(not(unix))]
fn set_mode(path: &Path, mode: Mode) -> std::io::Result<()> {
    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_readonly(mode.bits() & 0o200 == 0);
    std::fs::set_permissions(path, permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_mode() {
        assert_eq!("0777".parse::<Mode>().unwrap(), Mode::new(0o777));
        assert_eq!("755".parse::<Mode>().unwrap(), Mode::new(0o755));
        assert_eq!("0o644".parse::<Mode>().unwrap(), Mode::new(0o644));
        assert_eq!(" 0700 ".parse::<Mode>().unwrap(), Mode::new(0o700));
    }

    #[test]
    fn test_parse_mode_invalid() {
        assert!("".parse::<Mode>().is_err());
        assert!("0o".parse::<Mode>().is_err());
        assert!("0789".parse::<Mode>().is_err());
        assert!("rwx".parse::<Mode>().is_err());
        assert!("17777".parse::<Mode>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::DEFAULT.to_string(), "0777");
        assert_eq!(Mode::new(0o55).to_string(), "0055");
        assert_eq!(Mode::default(), Mode::DEFAULT);
    }

    #[test]
    fn test_change_mode_missing_path_is_noop() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        assert!(change_mode(&missing, Mode::DEFAULT));
        assert!(change_mode(&missing, Mode::new(0o600)));
        assert!(!missing.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_change_mode_applies_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(change_mode(&file, Mode::new(0o640)));
        let bits = std::fs::metadata(&file).unwrap().permissions().mode() & 0o7777;
        assert_eq!(bits, 0o640);
    }
}
