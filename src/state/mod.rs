//! Application state management
//!
//! This module contains the state containers behind each screen:
//! - FeedState: the post collection and the like-toggle
//! - ProfileState: active content tab and follow flag
//! - NavigationState: which screen is visible

pub mod feed;
pub mod navigation;
pub mod profile;

pub use feed::{toggle_like, FeedState};
pub use navigation::{NavigationState, Screen};
pub use profile::{ProfileState, ProfileTab};
