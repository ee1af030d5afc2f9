//! Navigation methods for the App.

use super::App;
use crate::state::Screen;

impl App {
    /// Show `screen`. Leaving and re-entering the feed keeps its selection.
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.navigation.current() != screen {
            tracing::info!("navigate: {:?} -> {:?}", self.navigation.current(), screen);
        }
        self.navigation.navigate_to(screen);
    }

    /// Move the feed highlight down, stopping at the last post
    pub fn select_next_post(&mut self) {
        let len = self.feed.len();
        if len > 0 && self.feed_view.selected < len - 1 {
            self.feed_view.selected += 1;
        }
    }

    /// Move the feed highlight up, stopping at the first post
    pub fn select_prev_post(&mut self) {
        if self.feed_view.selected > 0 {
            self.feed_view.selected -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Seed;

    #[test]
    fn test_select_bounds() {
        let mut app = App::with_seed(Seed::builtin().unwrap());
        app.select_prev_post();
        assert_eq!(app.feed_view.selected, 0);

        for _ in 0..10 {
            app.select_next_post();
        }
        assert_eq!(app.feed_view.selected, 2);

        app.select_prev_post();
        assert_eq!(app.feed_view.selected, 1);
    }

    #[test]
    fn test_select_on_empty_feed() {
        let mut app = App::new();
        app.select_next_post();
        assert_eq!(app.feed_view.selected, 0);
    }

    #[test]
    fn test_selection_survives_navigation() {
        let mut app = App::with_seed(Seed::builtin().unwrap());
        app.select_next_post();
        app.navigate_to(Screen::Profile);
        app.navigate_to(Screen::Feed);
        assert_eq!(app.feed_view.selected, 1);
    }
}
