//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::HelperConfig;
use crate::format::UuidVersion;

/// Helper utilities for the shell.
#[derive(Parser, Debug)]
#[command(
    name = "think-helper",
    version,
    about = "Formatting, merging and filesystem helpers",
    long_about = "Small helpers for scripts: digests, ids, date formatting, duration parsing,\n\
                  case conversion, deep JSON merging, and recursive directory operations."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (defaults to the platform config dir).
    #[arg(short, long, global = true, env = "THINK_HELPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Octal permission mode for mkdir and chmod (e.g. 0755).
    #[arg(short, long, global = true)]
    pub mode: Option<String>,

    /// Skip entries whose name starts with a dot.
    #[arg(long, global = true)]
    pub skip_hidden: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the MD5 hex digest of a string.
    Md5 { input: String },

    /// Generate a UUID.
    Uuid {
        /// UUID version (v1 or v4).
        version: Option<UuidVersion>,
    },

    /// Format a date (or the current local time).
    Datetime {
        /// Date to format; the current time when omitted.
        date: Option<String>,

        /// Pattern using YYYY, MM, DD, HH, mm and ss.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Convert a humanized duration ("2 days", "1.5h") to milliseconds.
    Ms { input: String },

    /// Convert between camelCase and snake_case.
    Case {
        #[arg(value_enum)]
        style: CaseStyle,
        input: String,
    },

    /// Escape HTML special characters.
    Escape { input: String },

    /// Create a directory and any missing parents.
    Mkdir { path: PathBuf },

    /// Change the permission mode of a path.
    Chmod { path: PathBuf },

    /// List every file under a directory, relative to it.
    Files {
        root: PathBuf,

        /// String prepended to every listed path.
        #[arg(short, long, default_value = "")]
        prefix: String,
    },

    /// Remove a directory tree.
    Rmdir {
        path: PathBuf,

        /// Keep the top directory, emptied.
        #[arg(short, long)]
        reserve: bool,
    },

    /// Deep merge JSON documents left to right and print the result.
    Merge {
        /// JSON literals or paths to JSON files.
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<String>,
    },
}

/// Target case for the `case` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    /// snake_case to camelCase.
    Camel,
    /// camelCase to snake_case.
    Snake,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut HelperConfig) {
        if let Some(mode) = &self.mode {
            config.fs.mode = mode.clone();
        }

        if self.skip_hidden {
            config.fs.skip_hidden = true;
        }

        if let Command::Uuid {
            version: Some(version),
        } = &self.command
        {
            config.format.uuid_version = *version;
        }

        if let Command::Datetime {
            format: Some(format),
            ..
        } = &self.command
        {
            config.format.datetime_format = format.clone();
        }
    }
}
