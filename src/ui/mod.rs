//! UI rendering for Plaza
//!
//! Draws the splash until the seed is ready, then the active screen inside a
//! centered column with the bottom navigation and keybind hints beneath it:
//! - Feed: header, story strip, post cards with like buttons
//! - Profile: profile card, follow button, content tabs, tile grid
//!
//! Rendering is a pure function of the app state apart from two pieces of
//! bookkeeping: hit areas for the frame are re-registered and the feed
//! scroll offset is adjusted to keep the highlighted post visible.

mod feed;
mod helpers;
pub mod interaction;
mod layout;
mod nav_bar;
mod profile;
mod splash;
mod theme;

pub use feed::{adjust_scroll, card_height};
pub use helpers::wrapped_line_count;
pub use layout::{is_terminal_too_small, LayoutContext, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
pub use nav_bar::build_keybinds;
pub use theme::{
    follow_button, like_indicator, nav_item_style, tab_style, tab_underline, COLOR_ACCENT,
    COLOR_ALERT, COLOR_NEUTRAL, COLOR_SURFACE,
};

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AppPhase};
use crate::state::Screen;
use feed::{render_feed, FeedScreen};
use nav_bar::{render_keybinds, render_nav_bar};
use profile::render_profile;
use splash::render_splash;

/// Render the UI based on current phase and screen
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let area = frame.area();
    if is_terminal_too_small(area.width, area.height) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Terminal too small",
                Style::default().fg(COLOR_NEUTRAL),
            ))
            .alignment(Alignment::Center),
            area,
        );
        return;
    }

    if app.phase != AppPhase::Ready {
        render_splash(frame, area, &app.phase, app.tick_count);
        return;
    }

    let column = LayoutContext::from_rect(area).centered_column(area);
    let [screen_area, nav_area, hints_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(column);

    let current = app.navigation.current();
    match current {
        Screen::Feed => {
            let screen = FeedScreen {
                feed: &app.feed,
                stories: &app.stories,
                notifications: app.notifications,
            };
            render_feed(frame, screen_area, &screen, &mut app.feed_view, &mut app.hit_areas);
        }
        Screen::Profile => render_profile(
            frame,
            screen_area,
            &app.profile_card,
            &app.profile,
            &mut app.hit_areas,
        ),
    }

    render_nav_bar(frame, nav_area, current, &mut app.hit_areas);
    render_keybinds(frame, hints_area, current);
}
