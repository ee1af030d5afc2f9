//! Profile screen: header, profile card, follow button, tabs and tile grid.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{equal_columns, row_at, wrapped_line_count};
use super::interaction::HitAreaRegistry;
use super::theme::{
    follow_button, tab_style, tab_underline, COLOR_ACCENT, COLOR_ACCENT_LIGHT, COLOR_BORDER,
    COLOR_NEUTRAL, COLOR_ON_ACCENT, COLOR_TEXT,
};
use crate::app::Action;
use crate::models::ProfileCard;
use crate::state::{ProfileState, ProfileTab, Screen};

/// Height of one tile in the content grid
const TILE_HEIGHT: u16 = 3;
/// Tiles per grid row
const GRID_COLUMNS: u16 = 3;

/// Render the profile screen and register its hit areas.
pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    card: &ProfileCard,
    state: &ProfileState,
    registry: &mut HitAreaRegistry,
) {
    render_header(frame, row_at(area, 0, 2), registry);

    let body = Rect::new(
        area.x,
        area.y.saturating_add(2),
        area.width,
        area.height.saturating_sub(2),
    )
    .intersection(area);
    if body.height == 0 {
        return;
    }

    let mut offset = 1u16;
    offset += render_card(frame, body, offset, card);
    offset += 1;

    offset += render_stats(frame, row_at(body, offset, 2), card);
    offset += 1;

    render_buttons(frame, row_at(body, offset, 1), state.is_following, registry);
    offset += 2;

    render_tabs(frame, row_at(body, offset, 2), state.active_tab, registry);
    offset += 2;

    let grid = Rect::new(
        body.x,
        body.y.saturating_add(offset),
        body.width,
        body.height.saturating_sub(offset),
    )
    .intersection(body);
    render_grid(frame, grid, card.grid_tiles, state.active_tab);
}

fn render_header(frame: &mut Frame, area: Rect, registry: &mut HitAreaRegistry) {
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let back_label = " ← Back ";
    let back_rect = Rect::new(
        inner.x,
        inner.y,
        (back_label.chars().count() as u16).min(inner.width),
        inner.height.min(1),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Profile",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        inner,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("⚙ ", Style::default().fg(COLOR_NEUTRAL)))
            .alignment(Alignment::Right),
        inner,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            back_label,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        back_rect,
    );
    registry.register(back_rect, Action::Navigate(Screen::Feed));
}

/// Avatar, name, bio and location. Returns the rows used.
fn render_card(frame: &mut Frame, body: Rect, top: u16, card: &ProfileCard) -> u16 {
    let centered = |text: Line<'static>| Paragraph::new(text).alignment(Alignment::Center);
    let mut offset = top;

    frame.render_widget(
        centered(Line::from(Span::styled(
            format!("( {} )", card.avatar),
            Style::default().fg(COLOR_ACCENT_LIGHT).add_modifier(Modifier::BOLD),
        ))),
        row_at(body, offset, 1),
    );
    offset += 2;

    frame.render_widget(
        centered(Line::from(Span::styled(
            card.name.clone(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ))),
        row_at(body, offset, 1),
    );
    offset += 1;

    let bio_width = body.width.saturating_sub(4);
    let bio_lines = wrapped_line_count(&card.bio, bio_width);
    let bio_row = row_at(body, offset, bio_lines);
    frame.render_widget(
        centered(Line::from(Span::styled(
            card.bio.clone(),
            Style::default().fg(COLOR_NEUTRAL),
        )))
        .wrap(Wrap { trim: true }),
        Rect::new(bio_row.x + 2, bio_row.y, bio_width, bio_row.height).intersection(bio_row),
    );
    offset += bio_lines;

    if !card.location.is_empty() {
        frame.render_widget(
            centered(Line::from(Span::styled(
                format!("📍 {}", card.location),
                Style::default().fg(COLOR_NEUTRAL),
            ))),
            row_at(body, offset, 1),
        );
        offset += 1;
    }

    offset - top
}

/// Value/label columns for the display stats. Returns the rows used.
fn render_stats(frame: &mut Frame, area: Rect, card: &ProfileCard) -> u16 {
    if card.stats.is_empty() {
        return 0;
    }
    let columns = equal_columns(area, card.stats.len() as u16);
    for (stat, column) in card.stats.iter().zip(columns) {
        let text = vec![
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label.clone(), Style::default().fg(COLOR_NEUTRAL))),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), column);
    }
    2
}

fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    is_following: bool,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 {
        return;
    }
    let columns = equal_columns(area, 2);
    let (label, style) = follow_button(is_following);

    let follow = inset(columns[0], 1);
    frame.render_widget(Block::default().style(style), follow);
    frame.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
        follow,
    );
    registry.register(follow, Action::ToggleFollow);

    let message = inset(columns[1], 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "✉ Message",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        message,
    );
}

fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    active_tab: ProfileTab,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 {
        return;
    }
    let columns = equal_columns(area, ProfileTab::ALL.len() as u16);
    for (tab, column) in ProfileTab::ALL.into_iter().zip(columns) {
        let active = tab == active_tab;
        let style = tab_style(active);
        let (underline, underline_style) = tab_underline(active);

        let text = vec![
            Line::from(vec![
                Span::styled(tab.icon(), style),
                Span::styled(format!(" {}", tab.label()), style),
            ]),
            Line::from(Span::styled(
                underline.repeat(column.width as usize),
                underline_style,
            )),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), column);
        registry.register(column, Action::SelectTab(tab));
    }
}

fn render_grid(frame: &mut Frame, area: Rect, tiles: usize, active_tab: ProfileTab) {
    if area.height == 0 || tiles == 0 {
        return;
    }
    let rows = tiles.div_ceil(GRID_COLUMNS as usize) as u16;
    let mut drawn = 0usize;
    for row in 0..rows {
        let row_rect = row_at(area, row * TILE_HEIGHT, TILE_HEIGHT);
        if row_rect.height == 0 {
            break;
        }
        for (column, cell) in equal_columns(row_rect, GRID_COLUMNS).into_iter().enumerate() {
            if drawn == tiles {
                return;
            }
            let bg = if (row as usize + column) % 2 == 0 {
                COLOR_ACCENT_LIGHT
            } else {
                COLOR_ACCENT
            };
            let tile = inset(cell, 1);
            frame.render_widget(Block::default().style(Style::default().bg(bg)), tile);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    active_tab.icon(),
                    Style::default().fg(COLOR_ON_ACCENT).bg(bg),
                ))
                .alignment(Alignment::Center),
                row_at(tile, tile.height / 2, 1),
            );
            drawn += 1;
        }
    }
}

/// Shrink `area` by `margin` columns on each side.
fn inset(area: Rect, margin: u16) -> Rect {
    Rect::new(
        area.x.saturating_add(margin),
        area.y,
        area.width.saturating_sub(margin * 2),
        area.height,
    )
}
