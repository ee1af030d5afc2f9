//! Input and message handlers for the App.
//!
//! Key presses and clicks are first mapped to an [`Action`] without touching
//! state, then applied through [`App::dispatch`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Action, App, AppMessage, AppPhase};
use crate::state::{ProfileTab, Screen};

impl App {
    /// Map a key press to the action it requests on the current screen.
    pub fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        if key.code == KeyCode::Char('q') {
            return Some(Action::Quit);
        }

        // Nothing but quit until the screens exist
        if !self.is_ready() {
            return None;
        }

        match key.code {
            KeyCode::F(1) => return Some(Action::Navigate(Screen::Feed)),
            KeyCode::F(2) => return Some(Action::Navigate(Screen::Profile)),
            _ => {}
        }

        match self.screen() {
            Screen::Feed => self.feed_action_for_key(key.code),
            Screen::Profile => self.profile_action_for_key(key.code),
        }
    }

    fn feed_action_for_key(&self, code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNextPost),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrevPost),
            KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => self
                .feed
                .id_at(self.feed_view.selected)
                .map(Action::ToggleLike),
            KeyCode::Char('p') => Some(Action::Navigate(Screen::Profile)),
            _ => None,
        }
    }

    fn profile_action_for_key(&self, code: KeyCode) -> Option<Action> {
        let active = self.profile.active_tab;
        match code {
            KeyCode::Char('1') => Some(Action::SelectTab(ProfileTab::Posts)),
            KeyCode::Char('2') => Some(Action::SelectTab(ProfileTab::Photos)),
            KeyCode::Char('3') => Some(Action::SelectTab(ProfileTab::Videos)),
            KeyCode::Left => Some(Action::SelectTab(active.prev())),
            KeyCode::Right => Some(Action::SelectTab(active.next())),
            KeyCode::Char('f') => Some(Action::ToggleFollow),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('h') => {
                Some(Action::Navigate(Screen::Feed))
            }
            _ => None,
        }
    }

    /// Map a left click at a terminal cell to the action registered there.
    pub fn action_for_click(&self, x: u16, y: u16) -> Option<Action> {
        if !self.is_ready() {
            return None;
        }
        self.hit_areas.hit_test(x, y)
    }

    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SeedLoaded(Ok(seed)) => {
                tracing::info!(
                    "seed loaded: {} posts, {} stories",
                    seed.posts.len(),
                    seed.stories.len()
                );
                self.install_seed(seed);
            }
            AppMessage::SeedLoaded(Err(err)) => {
                tracing::error!("seed load failed: {}", err);
                self.phase = AppPhase::Failed(err);
                self.mark_dirty();
            }
        }
    }
}
