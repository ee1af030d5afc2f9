//! File-based tracing setup.
//!
//! Stdout belongs to the TUI, so log output goes to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::startup::{AppConfig, DEFAULT_LOG_FILTER};

/// Build the filter: `PLAZA_LOG`-style directive, falling back to the default.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the log path on success. Any failure leaves logging disabled
/// rather than stopping the app.
pub fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let path = config.resolved_log_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert_eq!(build_filter("debug").to_string(), "debug");
        assert_eq!(build_filter("plaza=trace").to_string(), "plaza=trace");
    }

    #[test]
    fn test_build_filter_falls_back() {
        assert_eq!(build_filter("plaza=notalevel").to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("plaza.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
