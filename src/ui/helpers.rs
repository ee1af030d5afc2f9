//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Spinner frames for the splash animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Number of lines `text` occupies when word-wrapped to `width` columns.
///
/// Mirrors ratatui's word wrapping closely enough to size cards: words move
/// to the next line when they do not fit, and words wider than the line are
/// broken across lines.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width as usize;
    if width == 0 {
        return 0;
    }

    let mut total = 0u16;
    for paragraph in text.split('\n') {
        let mut lines = 1u16;
        let mut current = 0usize;
        for word in paragraph.split_whitespace() {
            let w = word.width();
            let needed = if current == 0 { w } else { current + 1 + w };
            if needed <= width {
                current = needed;
            } else if w <= width {
                lines += 1;
                current = w;
            } else {
                // Long word: break it, starting on a fresh line if needed
                if current > 0 {
                    lines += 1;
                }
                let extra = (w - 1) / width;
                lines += extra as u16;
                current = w - extra * width;
            }
        }
        total = total.saturating_add(lines);
    }
    total
}

/// A row `offset` lines below the top of `area`, clipped to `area`.
///
/// Returns a zero-height rect when the row falls outside.
pub fn row_at(area: Rect, offset: u16, height: u16) -> Rect {
    let row = Rect::new(area.x, area.y.saturating_add(offset), area.width, height);
    row.intersection(area)
}

/// Split `area` into `count` equal-width columns; the last takes the remainder.
pub fn equal_columns(area: Rect, count: u16) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let base = area.width / count;
    (0..count)
        .map(|i| {
            let x = area.x + base * i;
            let width = if i == count - 1 {
                area.width - base * i
            } else {
                base
            };
            Rect::new(x, area.y, width, area.height)
        })
        .collect()
}
