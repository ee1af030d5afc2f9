//! Color theme and state-driven styles for the Plaza UI.
//!
//! Every style that depends on state is a pure function of that state so the
//! screens can be checked without a terminal.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Accent color - indigo for active tabs, nav items and primary buttons
pub const COLOR_ACCENT: Color = Color::Rgb(88, 86, 214); // #5856D6

/// Lighter accent used for placeholder gradients
pub const COLOR_ACCENT_LIGHT: Color = Color::Rgb(123, 121, 232); // #7B79E8

/// Alert color - liked hearts and the notification badge
pub const COLOR_ALERT: Color = Color::Rgb(255, 59, 48); // #FF3B30

/// Neutral gray for inactive controls and secondary text
pub const COLOR_NEUTRAL: Color = Color::Rgb(142, 142, 147); // #8E8E93

/// Primary text - follows the terminal's own foreground
pub const COLOR_TEXT: Color = Color::Reset;

/// Light surface behind the "Following" button
pub const COLOR_SURFACE: Color = Color::Rgb(242, 242, 247); // #F2F2F7

/// Dark text drawn on light surfaces
pub const COLOR_ON_SURFACE: Color = Color::Rgb(28, 28, 30); // #1C1C1E

/// Text drawn on accent backgrounds
pub const COLOR_ON_ACCENT: Color = Color::White;

/// Card and separator borders
pub const COLOR_BORDER: Color = Color::DarkGray;

// ============================================================================
// State-driven styles
// ============================================================================

/// Heart glyph and style for a post's like button.
pub fn like_indicator(is_liked: bool) -> (&'static str, Style) {
    if is_liked {
        ("♥", Style::default().fg(COLOR_ALERT))
    } else {
        ("♡", Style::default().fg(COLOR_NEUTRAL))
    }
}

/// Style of the "Like" label next to the heart.
pub fn like_label_style(is_liked: bool) -> Style {
    if is_liked {
        Style::default().fg(COLOR_ALERT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT)
    }
}

/// Style of a profile tab's icon and label.
pub fn tab_style(active: bool) -> Style {
    if active {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_NEUTRAL)
    }
}

/// Underline drawn beneath a profile tab. Only the active tab gets one.
pub fn tab_underline(active: bool) -> (&'static str, Style) {
    if active {
        ("━", Style::default().fg(COLOR_ACCENT))
    } else {
        ("─", Style::default().fg(COLOR_BORDER))
    }
}

/// Label and style of the follow button.
pub fn follow_button(is_following: bool) -> (&'static str, Style) {
    if is_following {
        (
            "✓ Following",
            Style::default().fg(COLOR_ON_SURFACE).bg(COLOR_SURFACE),
        )
    } else {
        (
            "+ Follow",
            Style::default()
                .fg(COLOR_ON_ACCENT)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    }
}

/// Style of a bottom navigation item.
pub fn nav_item_style(active: bool) -> Style {
    if active {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_NEUTRAL)
    }
}

/// Border style of a feed card; the highlighted card is drawn in the accent.
pub fn card_border_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_indicator() {
        assert_eq!(like_indicator(true), ("♥", Style::default().fg(COLOR_ALERT)));
        assert_eq!(like_indicator(false), ("♡", Style::default().fg(COLOR_NEUTRAL)));
    }

    #[test]
    fn test_tab_styles_differ() {
        assert_eq!(tab_style(true).fg, Some(COLOR_ACCENT));
        assert_eq!(tab_style(false).fg, Some(COLOR_NEUTRAL));
        assert_eq!(tab_underline(true).1.fg, Some(COLOR_ACCENT));
        assert_ne!(tab_underline(true).0, tab_underline(false).0);
    }

    #[test]
    fn test_follow_button() {
        let (label, style) = follow_button(false);
        assert_eq!(label, "+ Follow");
        assert_eq!(style.bg, Some(COLOR_ACCENT));

        let (label, style) = follow_button(true);
        assert_eq!(label, "✓ Following");
        assert_eq!(style.bg, Some(COLOR_SURFACE));
    }

    #[test]
    fn test_nav_item_style() {
        assert_eq!(nav_item_style(true).fg, Some(COLOR_ACCENT));
        assert_eq!(nav_item_style(false).fg, Some(COLOR_NEUTRAL));
    }
}
