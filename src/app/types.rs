//! Type definitions for the application state.
//!
//! - [`AppPhase`] - Startup progress
//! - [`FeedView`] - Feed list selection and scroll offset

/// Startup progress. Screens render only once the seed is ready.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Loading,
    Ready,
    /// Seed loading failed; the splash shows the message until quit
    Failed(String),
}

/// View state of the feed list.
///
/// This is presentation only and never touches the post collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedView {
    /// Index of the highlighted post
    pub selected: usize,
    /// Index of the first post drawn
    pub scroll: usize,
}
