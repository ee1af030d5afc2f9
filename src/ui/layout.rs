//! Layout helpers.
//!
//! Screens are drawn in a centered column so wide terminals keep a
//! phone-like reading width.

use ratatui::layout::Rect;

/// Widest the content column grows
pub const MAX_COLUMN_WIDTH: u16 = 64;

/// Smallest terminal the screens render in
pub const MIN_TERMINAL_WIDTH: u16 = 30;
pub const MIN_TERMINAL_HEIGHT: u16 = 12;

/// Check whether the terminal is too small to draw the screens.
pub fn is_terminal_too_small(width: u16, height: u16) -> bool {
    width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width of the content column.
    pub fn column_width(&self) -> u16 {
        self.width.min(MAX_COLUMN_WIDTH)
    }

    /// The content column centered horizontally inside `area`.
    pub fn centered_column(&self, area: Rect) -> Rect {
        let width = self.column_width().min(area.width);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Narrow terminals drop labels from the bottom navigation.
    pub fn is_narrow(&self) -> bool {
        self.width < 44
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_capped_on_wide_terminals() {
        let ctx = LayoutContext::new(200, 50);
        let column = ctx.centered_column(Rect::new(0, 0, 200, 50));
        assert_eq!(column.width, MAX_COLUMN_WIDTH);
        assert_eq!(column.x, (200 - MAX_COLUMN_WIDTH) / 2);
        assert_eq!(column.height, 50);
    }

    #[test]
    fn test_column_fills_narrow_terminals() {
        let ctx = LayoutContext::new(40, 20);
        let column = ctx.centered_column(Rect::new(0, 0, 40, 20));
        assert_eq!(column, Rect::new(0, 0, 40, 20));
        assert!(ctx.is_narrow());
    }

    #[test]
    fn test_too_small() {
        assert!(is_terminal_too_small(29, 40));
        assert!(is_terminal_too_small(80, 11));
        assert!(!is_terminal_too_small(30, 12));
    }
}
