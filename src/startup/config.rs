//! Startup configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default log filter when `PLAZA_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default UI tick interval
pub const DEFAULT_TICK_MS: u64 = 50;

/// Runtime configuration.
///
/// Use the builder pattern to customize startup behavior.
///
/// # Example
///
/// ```
/// use plaza::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_seed_path("posts.json")
///     .with_mouse(false);
/// assert!(!config.mouse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed document to load instead of the built-in one
    pub seed_path: Option<PathBuf>,
    /// Log file; `None` uses the default location under the cache directory
    pub log_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Interval between UI ticks
    pub tick_rate: Duration,
    /// Capture the mouse for click interactions
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            mouse: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Build a config from environment variables:
    /// - `PLAZA_SEED`: seed document path
    /// - `PLAZA_LOG_FILE`: log file path
    /// - `PLAZA_LOG`: log filter directive
    /// - `PLAZA_TICK_MS`: tick interval in milliseconds (ignored if not a positive integer)
    /// - `PLAZA_NO_MOUSE`: disable mouse capture when set
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = non_empty_var("PLAZA_SEED") {
            config = config.with_seed_path(path);
        }
        if let Some(path) = non_empty_var("PLAZA_LOG_FILE") {
            config = config.with_log_path(path);
        }
        if let Some(filter) = non_empty_var("PLAZA_LOG") {
            config = config.with_log_filter(filter);
        }
        if let Some(ms) = non_empty_var("PLAZA_TICK_MS").and_then(|v| v.parse::<u64>().ok()) {
            if ms > 0 {
                config = config.with_tick_rate(Duration::from_millis(ms));
            }
        }
        if std::env::var_os("PLAZA_NO_MOUSE").is_some() {
            config = config.with_mouse(false);
        }

        config
    }

    /// Log file location: the configured path or `<cache dir>/plaza/plaza.log`.
    pub fn resolved_log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("plaza").join("plaza.log")))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "PLAZA_SEED",
        "PLAZA_LOG_FILE",
        "PLAZA_LOG",
        "PLAZA_TICK_MS",
        "PLAZA_NO_MOUSE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.seed_path, None);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.tick_rate, Duration::from_millis(DEFAULT_TICK_MS));
        assert!(config.mouse);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_seed_path("/tmp/seed.json")
            .with_log_path("/tmp/plaza.log")
            .with_log_filter("debug")
            .with_tick_rate(Duration::from_millis(10))
            .with_mouse(false);

        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.resolved_log_path(), Some(PathBuf::from("/tmp/plaza.log")));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.tick_rate, Duration::from_millis(10));
        assert!(!config.mouse);
    }

    #[test]
    #[serial]
    fn test_from_env_empty() {
        clear_env();
        assert_eq!(AppConfig::from_env(), AppConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_vars() {
        clear_env();
        std::env::set_var("PLAZA_SEED", "/data/seed.json");
        std::env::set_var("PLAZA_LOG", "plaza=debug");
        std::env::set_var("PLAZA_TICK_MS", "25");
        std::env::set_var("PLAZA_NO_MOUSE", "1");

        let config = AppConfig::from_env();
        clear_env();

        assert_eq!(config.seed_path, Some(PathBuf::from("/data/seed.json")));
        assert_eq!(config.log_filter, "plaza=debug");
        assert_eq!(config.tick_rate, Duration::from_millis(25));
        assert!(!config.mouse);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_bad_tick() {
        clear_env();
        std::env::set_var("PLAZA_TICK_MS", "fast");
        let config = AppConfig::from_env();
        std::env::set_var("PLAZA_TICK_MS", "0");
        let zero = AppConfig::from_env();
        clear_env();

        assert_eq!(config.tick_rate, Duration::from_millis(DEFAULT_TICK_MS));
        assert_eq!(zero.tick_rate, Duration::from_millis(DEFAULT_TICK_MS));
    }
}
