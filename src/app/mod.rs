//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppPhase`] - Whether the seed data has finished loading
//! - [`Action`] - Every state transition a key press or click can request
//! - [`AppMessage`] - Messages for async communication

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use actions::Action;
pub use messages::AppMessage;
pub use types::{AppPhase, FeedView};

pub use crate::state::{ProfileTab, Screen};

use tokio::sync::mpsc;

use crate::models::{ProfileCard, Seed};
use crate::state::{FeedState, NavigationState, ProfileState};
use crate::ui::interaction::HitAreaRegistry;

/// Root application state.
///
/// Each screen's state is owned here and handed to the render functions
/// read-only; mutation goes through [`App::dispatch`].
pub struct App {
    /// Loading progress of the seed data
    pub phase: AppPhase,
    /// Which screen is visible
    pub navigation: NavigationState,
    /// Post collection owned by the feed screen
    pub feed: FeedState,
    /// Selection and scroll position of the feed list
    pub feed_view: FeedView,
    /// Tab and follow state owned by the profile screen
    pub profile: ProfileState,
    /// Static profile details
    pub profile_card: ProfileCard,
    /// Avatar glyphs for the story strip
    pub stories: Vec<String>,
    /// Count shown on the notification badge
    pub notifications: u32,
    /// Clickable regions registered during the last render
    pub hit_areas: HitAreaRegistry,
    /// Flag to track if app should quit
    pub should_quit: bool,
    /// Set whenever state changes and the UI must be redrawn
    pub needs_redraw: bool,
    /// Tick counter for the splash animation
    pub tick_count: u64,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an app in the loading phase with no seed data.
    pub fn new() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            phase: AppPhase::Loading,
            navigation: NavigationState::new(),
            feed: FeedState::default(),
            feed_view: FeedView::default(),
            profile: ProfileState::new(),
            profile_card: ProfileCard::default(),
            stories: Vec::new(),
            notifications: 0,
            hit_areas: HitAreaRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Create an app that is ready with the given seed.
    pub fn with_seed(seed: Seed) -> Self {
        let mut app = Self::new();
        app.install_seed(seed);
        app
    }

    /// Replace the screen data with `seed` and enter the ready phase.
    pub fn install_seed(&mut self, seed: Seed) {
        self.feed = FeedState::new(seed.posts);
        self.feed_view = FeedView::default();
        self.stories = seed.stories;
        self.profile_card = seed.profile;
        self.notifications = seed.notifications;
        self.phase = AppPhase::Ready;
        self.mark_dirty();
    }

    pub fn is_ready(&self) -> bool {
        self.phase == AppPhase::Ready
    }

    /// Screen currently displayed
    pub fn screen(&self) -> Screen {
        self.navigation.current()
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the tick counter. Only the splash animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.phase == AppPhase::Loading {
            self.mark_dirty();
        }
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_is_loading() {
        let app = App::new();
        assert_eq!(app.phase, AppPhase::Loading);
        assert!(!app.is_ready());
        assert!(app.feed.is_empty());
        assert_eq!(app.screen(), Screen::Feed);
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
    }

    #[test]
    fn test_with_seed_is_ready() {
        let app = App::with_seed(Seed::builtin().unwrap());
        assert!(app.is_ready());
        assert_eq!(app.feed.len(), 3);
        assert_eq!(app.stories.len(), 5);
        assert_eq!(app.notifications, 3);
        assert_eq!(app.profile_card.name, "Alex Thompson");
    }

    #[test]
    fn test_tick_redraws_only_while_loading() {
        let mut app = App::new();
        app.needs_redraw = false;
        app.tick();
        assert_eq!(app.tick_count, 1);
        assert!(app.needs_redraw);

        let mut app = App::with_seed(Seed::builtin().unwrap());
        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_install_seed_resets_selection_into_range() {
        let mut app = App::with_seed(Seed::builtin().unwrap());
        app.select_next_post();
        app.select_next_post();
        assert_eq!(app.feed_view.selected, 2);

        let json = r#"{"posts": [
            {"id": 9, "author": "a", "avatar": "a", "content": "a", "time": "1h"}
        ]}"#;
        app.install_seed(Seed::from_json(json).unwrap());
        assert_eq!(app.feed_view, FeedView::default());
        assert!(app.feed.id_at(app.feed_view.selected).is_some());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.quit();
        assert!(app.should_quit);
    }
}
