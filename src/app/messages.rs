//! AppMessage enum for async communication within the application.

use crate::models::Seed;

/// Messages received from background tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The seed loader finished. Errors are carried as display strings.
    SeedLoaded(Result<Seed, String>),
}
