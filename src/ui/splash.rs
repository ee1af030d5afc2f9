//! Splash shown until the seed data is ready.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::SPINNER_FRAMES;
use super::theme::{COLOR_ACCENT, COLOR_ALERT, COLOR_NEUTRAL};
use crate::app::AppPhase;

pub fn render_splash(frame: &mut Frame, area: Rect, phase: &AppPhase, tick_count: u64) {
    let title = Line::from(Span::styled(
        "plaza",
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![title, Line::raw("")];
    match phase {
        AppPhase::Failed(err) => {
            lines.push(Line::from(Span::styled(
                "Could not load feed data",
                Style::default().fg(COLOR_ALERT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(COLOR_NEUTRAL),
            )));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "Press q to quit",
                Style::default().fg(COLOR_NEUTRAL),
            )));
        }
        _ => {
            let frame_index = (tick_count as usize / 4) % SPINNER_FRAMES.len();
            lines.push(Line::from(Span::styled(
                format!("{} Loading feed", SPINNER_FRAMES[frame_index]),
                Style::default().fg(COLOR_NEUTRAL),
            )));
        }
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let top = area.y + (area.height - height) / 2;
    let rect = Rect::new(area.x, top, area.width, height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
