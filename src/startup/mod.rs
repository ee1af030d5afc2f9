//! Startup: configuration and seed loading.
//!
//! The seed is read off the event loop so the splash can render while it
//! loads; the result comes back as [`AppMessage::SeedLoaded`].

mod config;

pub use config::{AppConfig, DEFAULT_LOG_FILTER, DEFAULT_TICK_MS};

use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::models::Seed;

/// Load the seed on the blocking pool and report back to the app.
pub fn spawn_seed_loader(
    seed_path: Option<PathBuf>,
    tx: UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        match &seed_path {
            Some(path) => tracing::info!("loading seed from {}", path.display()),
            None => tracing::info!("loading built-in seed"),
        }
        let result = Seed::load(seed_path.as_deref()).map_err(|e| e.to_string());
        // The receiver is gone only when the app is already shutting down
        let _ = tx.send(AppMessage::SeedLoaded(result));
    })
}
