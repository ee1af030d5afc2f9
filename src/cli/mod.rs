//! CLI module for Plaza.
//!
//! Command-line flags are parsed before the TUI starts:
//!
//! ```
//! use plaza::cli::{parse_args, CliCommand};
//!
//! let args = vec!["plaza".to_string(), "--no-mouse".to_string()];
//! match parse_args(args.into_iter()).unwrap() {
//!     CliCommand::RunTui(options) => assert!(options.no_mouse),
//!     other => panic!("unexpected command: {:?}", other),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOptions};
pub use version::{version_string, VERSION};
