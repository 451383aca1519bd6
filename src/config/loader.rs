//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use crate::format::{UuidVersion, DEFAULT_FORMAT};
use crate::fs::Mode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelperConfig {
    #[serde(default)]
    pub fs: FsConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

/// Filesystem helper defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsConfig {
    /// Octal permission mode applied by `mkdir` and `chmod` (e.g. "0755").
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Whether `files` skips entries whose name starts with a dot.
    #[serde(default)]
    pub skip_hidden: bool,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            skip_hidden: false,
        }
    }
}

/// Formatting defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Pattern used by `datetime` when none is given.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// UUID version produced by `uuid` when none is given.
    #[serde(default)]
    pub uuid_version: UuidVersion,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            datetime_format: default_datetime_format(),
            uuid_version: UuidVersion::default(),
        }
    }
}

fn default_mode() -> String {
    "0777".to_string()
}

fn default_datetime_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl HelperConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: HelperConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from [`default_path`] if that
    /// file exists, otherwise fall back to defaults.
    ///
    /// [`default_path`]: HelperConfig::default_path
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Platform configuration file location, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "thinkjs", "think-helper")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parsed permission mode from `[fs] mode`.
    pub fn mode(&self) -> Result<Mode> {
        self.fs.mode.parse()
    }
}
