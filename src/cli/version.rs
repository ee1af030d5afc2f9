//! Version display.

/// The current version of Plaza, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line printed for `--version`.
pub fn version_string() -> String {
    format!("plaza {}", VERSION)
}
