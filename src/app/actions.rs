//! State transitions requested by key presses and clicks.

use super::App;
use crate::models::PostId;
use crate::state::{ProfileTab, Screen};

/// A single state transition.
///
/// Every interactive element maps to exactly one action with a fixed
/// argument: a post's own id, a fixed tab, or a fixed target screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flip the like on a post
    ToggleLike(PostId),
    /// Make a profile tab active
    SelectTab(ProfileTab),
    /// Flip the follow flag
    ToggleFollow,
    /// Show a screen
    Navigate(Screen),
    /// Move the feed highlight down
    SelectNextPost,
    /// Move the feed highlight up
    SelectPrevPost,
    Quit,
}

impl App {
    /// Apply an action to the owning state and schedule a redraw.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("dispatch: {:?}", action);
        match action {
            Action::ToggleLike(id) => {
                if self.feed.toggle_like(id) {
                    if let Some(post) = self.feed.get(id) {
                        tracing::debug!(
                            "post {} liked={} likes={}",
                            id,
                            post.is_liked(),
                            post.likes()
                        );
                    }
                }
            }
            Action::SelectTab(tab) => self.profile.set_active_tab(tab),
            Action::ToggleFollow => self.profile.toggle_follow(),
            Action::Navigate(screen) => self.navigate_to(screen),
            Action::SelectNextPost => self.select_next_post(),
            Action::SelectPrevPost => self.select_prev_post(),
            Action::Quit => self.quit(),
        }
        self.mark_dirty();
    }
}
