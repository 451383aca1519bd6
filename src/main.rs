//! think-helper - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use think_helper::{
    cli::{Args, CaseStyle, Command},
    config::{validate_config, HelperConfig},
    error::{exit_codes, Error, Result},
    format::{camel_case, datetime, datetime_from_str, escape_html, md5, ms, snake_case, uuid},
    fs::{change_mode, create_directory, enumerate_files_filtered, hidden_filter, remove_tree},
    merge::merge_all,
    output::{
        print_config_summary, print_debug, print_error, print_info, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Conversion(_) | Error::Json(_) => {
                    ExitCode::from(exit_codes::CONVERSION_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::IO_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = HelperConfig::load_or_default(args.config.as_deref())?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    if args.debug {
        print_config_summary(&config);
        print_debug(&format!("Running {:?}", args.command));
    }

    execute(args.command, &config).await
}

/// Run a single subcommand against the effective configuration.
async fn execute(command: Command, config: &HelperConfig) -> Result<()> {
    match command {
        Command::Md5 { input } => println!("{}", md5(input)),
        Command::Uuid { .. } => println!("{}", uuid(config.format.uuid_version)),
        Command::Datetime { date, .. } => {
            let format = Some(config.format.datetime_format.as_str());
            let formatted = match date {
                Some(date) => datetime_from_str(&date, format)?,
                None => datetime(None, format),
            };
            println!("{}", formatted);
        }
        Command::Ms { input } => println!("{}", ms(&input)?),
        Command::Case { style, input } => match style {
            CaseStyle::Camel => println!("{}", camel_case(&input)),
            CaseStyle::Snake => println!("{}", snake_case(&input)),
        },
        Command::Escape { input } => println!("{}", escape_html(&input)),
        Command::Mkdir { path } => {
            if !create_directory(&path, config.mode()?) {
                return Err(failed("create directory", &path));
            }
            print_success(&format!("Created {}", path.display()));
        }
        Command::Chmod { path } => {
            let mode = config.mode()?;
            if !path.exists() {
                print_warning(&format!("{} does not exist, nothing to change", path.display()));
            } else if !change_mode(&path, mode) {
                return Err(failed("change mode of", &path));
            } else {
                print_success(&format!("Set mode {} on {}", mode, path.display()));
            }
        }
        Command::Files { root, prefix } => {
            let files = if config.fs.skip_hidden {
                enumerate_files_filtered(&root, &prefix, hidden_filter())
            } else {
                enumerate_files_filtered(&root, &prefix, |_, _| true)
            };
            tracing::debug!("Found {} files under {}", files.len(), root.display());
            for file in files {
                println!("{}", file);
            }
        }
        Command::Rmdir { path, reserve } => {
            remove_tree(&path, reserve).await?;
            if reserve {
                print_info(&format!("Emptied {}", path.display()));
            } else {
                print_info(&format!("Removed {}", path.display()));
            }
        }
        Command::Merge { inputs } => {
            let layers = inputs
                .iter()
                .map(|input| read_json(input))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&merge_all(&layers))?);
        }
    }

    Ok(())
}

/// Parse a merge input: a JSON file when the path exists, otherwise a literal.
fn read_json(input: &str) -> Result<Value> {
    let path = Path::new(input);
    if path.is_file() {
        tracing::debug!("Reading JSON from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&content)?);
    }
    Ok(serde_json::from_str(input)?)
}

fn failed(action: &str, path: &Path) -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to {} {}", action, path.display()),
    ))
}
