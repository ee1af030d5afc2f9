//! Bottom navigation bar and keybind hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::equal_columns;
use super::interaction::HitAreaRegistry;
use super::layout::LayoutContext;
use super::theme::{nav_item_style, COLOR_ACCENT, COLOR_BORDER, COLOR_NEUTRAL, COLOR_ON_ACCENT};
use crate::app::Action;
use crate::state::Screen;

/// One entry of the bottom bar.
struct NavItem {
    icon: &'static str,
    label: &'static str,
    /// Screen this item opens; `None` for decorative items
    target: Option<Screen>,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem { icon: "⌂", label: "Feed", target: Some(Screen::Feed) },
    NavItem { icon: "⌕", label: "Search", target: None },
    NavItem { icon: "+", label: "", target: None },
    NavItem { icon: "◔", label: "Alerts", target: None },
    NavItem { icon: "☺", label: "Profile", target: Some(Screen::Profile) },
];

/// Render the bottom navigation and register its screen items.
pub fn render_nav_bar(
    frame: &mut Frame,
    area: Rect,
    current: Screen,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_labels = !LayoutContext::from_rect(area).is_narrow();
    let columns = equal_columns(inner, NAV_ITEMS.len() as u16);
    for (item, column) in NAV_ITEMS.iter().zip(columns) {
        let line = if item.label.is_empty() {
            // Create button
            Line::from(Span::styled(
                format!(" {} ", item.icon),
                Style::default()
                    .fg(COLOR_ON_ACCENT)
                    .bg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            let style = nav_item_style(item.target == Some(current));
            let text = if show_labels {
                format!("{} {}", item.icon, item.label)
            } else {
                item.icon.to_string()
            };
            Line::from(Span::styled(text, style))
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), column);

        if let Some(target) = item.target {
            registry.register(column, Action::Navigate(target));
        }
    }
}

/// Keybind hints for the current screen.
pub fn build_keybinds(screen: Screen) -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(COLOR_ACCENT));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(COLOR_NEUTRAL));

    let mut spans = vec![Span::raw(" ")];
    match screen {
        Screen::Feed => {
            spans.extend([
                key("[j/k]"),
                text(" select  "),
                key("[l]"),
                text(" like  "),
                key("[p]"),
                text(" profile  "),
            ]);
        }
        Screen::Profile => {
            spans.extend([
                key("[1-3]"),
                text(" tab  "),
                key("[f]"),
                text(" follow  "),
                key("[Esc]"),
                text(" back  "),
            ]);
        }
    }
    spans.extend([key("[q]"), text(" quit")]);
    Line::from(spans)
}

pub fn render_keybinds(frame: &mut Frame, area: Rect, screen: Screen) {
    frame.render_widget(Paragraph::new(build_keybinds(screen)), area);
}
