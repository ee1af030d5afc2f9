//! Plaza - a terminal social feed
//!
//! Two screens, a post feed and a user profile, driven by static seed data
//! and local toggle state. This library exposes modules for use in
//! integration tests and benchmarks.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod ui;
