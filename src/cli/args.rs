//! Command-line argument parsing for Plaza.

use std::path::PathBuf;

use crate::error::ArgsError;
use crate::startup::AppConfig;

/// Options that adjust a TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--seed <path>`
    pub seed_path: Option<PathBuf>,
    /// `--no-mouse`
    pub no_mouse: bool,
}

impl CliOptions {
    /// Layer these options over a config; flags win over the environment.
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = self.seed_path {
            config = config.with_seed_path(path);
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

/// Parse command-line arguments, including the program name.
///
/// `--version` and `--help` win over anything else on the line.
///
/// # Examples
///
/// ```
/// use plaza::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["plaza".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--no-mouse" => options.no_mouse = true,
            "--seed" => {
                let path = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.seed_path = Some(PathBuf::from(path));
            }
            other => {
                if let Some(path) = other.strip_prefix("--seed=") {
                    if path.is_empty() {
                        return Err(ArgsError::MissingValue("--seed".to_string()));
                    }
                    options.seed_path = Some(PathBuf::from(path));
                } else {
                    return Err(ArgsError::Unknown(other.to_string()));
                }
            }
        }
    }

    Ok(CliCommand::RunTui(options))
}

/// Usage text for `--help`.
pub fn usage() -> &'static str {
    "\
Usage: plaza [OPTIONS]

A terminal social feed.

Options:
  --seed <PATH>   Load posts and profile data from a JSON file
  --no-mouse      Do not capture the mouse
  -V, --version   Print version
  -h, --help      Print this help

Environment:
  PLAZA_SEED       Seed file (overridden by --seed)
  PLAZA_LOG        Log filter, e.g. debug or plaza=trace
  PLAZA_LOG_FILE   Log file path
  PLAZA_TICK_MS    UI tick interval in milliseconds
  PLAZA_NO_MOUSE   Disable mouse capture when set"
}
