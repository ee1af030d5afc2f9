//! Feed screen: header, story strip and the post cards.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{equal_columns, row_at, wrapped_line_count};
use super::interaction::HitAreaRegistry;
use super::theme::{
    card_border_style, like_indicator, like_label_style, COLOR_ACCENT, COLOR_ACCENT_LIGHT,
    COLOR_ALERT, COLOR_BORDER, COLOR_NEUTRAL, COLOR_ON_ACCENT, COLOR_TEXT,
};
use crate::app::{Action, FeedView};
use crate::models::Post;
use crate::state::{FeedState, Screen};

/// Height of the placeholder image block
const IMAGE_HEIGHT: u16 = 3;

/// Everything the feed screen draws, borrowed from the app.
pub struct FeedScreen<'a> {
    pub feed: &'a FeedState,
    pub stories: &'a [String],
    pub notifications: u32,
}

/// Render the feed screen and register its hit areas.
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    screen: &FeedScreen<'_>,
    view: &mut FeedView,
    registry: &mut HitAreaRegistry,
) {
    let header = row_at(area, 0, 2);
    let stories = row_at(area, 2, 2);
    let list = Rect::new(
        area.x,
        area.y.saturating_add(4),
        area.width,
        area.height.saturating_sub(4),
    )
    .intersection(area);

    render_header(frame, header, screen.notifications, registry);
    render_stories(frame, stories, screen.stories);
    render_post_list(frame, list, screen.feed, view, registry);
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    notifications: u32,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Social",
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, inner);

    // Right side: notification bell with badge, then the profile button
    let profile_label = " [ Profile ] ";
    let profile_width = profile_label.chars().count() as u16;
    let profile_rect = Rect::new(
        inner.x + inner.width.saturating_sub(profile_width),
        inner.y,
        profile_width.min(inner.width),
        inner.height.min(1),
    );
    let mut bell = vec![Span::styled("🔔", Style::default().fg(COLOR_TEXT))];
    if notifications > 0 {
        bell.push(Span::styled(
            format!(" {} ", notifications),
            Style::default()
                .fg(COLOR_ON_ACCENT)
                .bg(COLOR_ALERT)
                .add_modifier(Modifier::BOLD),
        ));
    }
    bell.push(Span::raw(" "));
    let bell_rect = Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(profile_width),
        inner.height.min(1),
    );
    frame.render_widget(
        Paragraph::new(Line::from(bell)).alignment(Alignment::Right),
        bell_rect,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            profile_label,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        profile_rect,
    );
    registry.register(profile_rect, Action::Navigate(Screen::Profile));
}

fn render_stories(frame: &mut Frame, area: Rect, stories: &[String]) {
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(" (+)", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(" Your Story", Style::default().fg(COLOR_NEUTRAL)),
    ];
    for (index, avatar) in stories.iter().enumerate() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("({})", avatar),
            Style::default().fg(COLOR_ACCENT_LIGHT),
        ));
        spans.push(Span::styled(
            format!(" User {}", index + 1),
            Style::default().fg(COLOR_NEUTRAL),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Total rows a post card needs at the given outer width.
pub fn card_height(post: &Post, width: u16) -> u16 {
    let inner_width = width.saturating_sub(2);
    let content = wrapped_line_count(&post.content, inner_width);
    let image = if post.has_image { IMAGE_HEIGHT } else { 0 };
    // borders + author row + content + image + stats + actions
    2 + 1 + content + image + 1 + 1
}

/// Bring the highlighted card into view.
///
/// Moves `scroll` the least amount needed for the whole selected card to fit
/// in `viewport` rows. The selection itself is owned by the app and is only
/// read here.
pub fn adjust_scroll(view: &mut FeedView, heights: &[u16], viewport: u16) {
    if heights.is_empty() {
        view.scroll = 0;
        return;
    }
    let selected = view.selected.min(heights.len() - 1);
    view.scroll = view.scroll.min(selected);

    while view.scroll < selected {
        let needed: u32 = heights[view.scroll..=selected]
            .iter()
            .map(|&h| h as u32)
            .sum();
        if needed <= viewport as u32 {
            break;
        }
        view.scroll += 1;
    }
}

fn render_post_list(
    frame: &mut Frame,
    area: Rect,
    feed: &FeedState,
    view: &mut FeedView,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 {
        return;
    }
    if feed.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No posts yet",
            Style::default().fg(COLOR_NEUTRAL),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, row_at(area, area.height / 2, 1));
        return;
    }

    let heights: Vec<u16> = feed
        .posts()
        .iter()
        .map(|post| card_height(post, area.width))
        .collect();
    adjust_scroll(view, &heights, area.height);

    let bottom = area.y + area.height;
    let mut y = area.y;
    for (index, post) in feed.posts().iter().enumerate().skip(view.scroll) {
        if y >= bottom {
            break;
        }
        let height = heights[index];
        let card = Rect::new(area.x, y, area.width, height).intersection(area);
        let fully_visible = card.height == height;
        render_post_card(
            frame,
            card,
            post,
            index == view.selected,
            fully_visible.then_some(&mut *registry),
        );
        y = y.saturating_add(height);
    }
}

/// Render one post card.
///
/// The like button is only registered for cards drawn in full, so a click
/// never lands on a row that was cut off.
fn render_post_card(
    frame: &mut Frame,
    area: Rect,
    post: &Post,
    selected: bool,
    registry: Option<&mut HitAreaRegistry>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(card_border_style(selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut offset = 0u16;

    // Author row
    let author_row = row_at(inner, offset, 1);
    let author = Line::from(vec![
        Span::raw(format!("{} ", post.avatar)),
        Span::styled(
            post.author.clone(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {}", post.time), Style::default().fg(COLOR_NEUTRAL)),
    ]);
    frame.render_widget(Paragraph::new(author), author_row);
    frame.render_widget(
        Paragraph::new(Span::styled("⋯", Style::default().fg(COLOR_NEUTRAL)))
            .alignment(Alignment::Right),
        author_row,
    );
    offset += 1;

    // Content
    let content_lines = wrapped_line_count(&post.content, inner.width);
    let content_row = row_at(inner, offset, content_lines);
    frame.render_widget(
        Paragraph::new(post.content.as_str())
            .style(Style::default().fg(COLOR_TEXT))
            .wrap(Wrap { trim: true }),
        content_row,
    );
    offset += content_lines;

    // Placeholder image
    if post.has_image {
        let image_row = row_at(inner, offset, IMAGE_HEIGHT);
        if image_row.height > 0 {
            let placeholder = Block::default().style(Style::default().bg(COLOR_ACCENT_LIGHT));
            frame.render_widget(placeholder, image_row);
            let label = row_at(image_row, IMAGE_HEIGHT / 2, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "▣ image",
                    Style::default().fg(COLOR_ON_ACCENT).bg(COLOR_ACCENT_LIGHT),
                ))
                .alignment(Alignment::Center),
                label,
            );
        }
        offset += IMAGE_HEIGHT;
    }

    // Stats
    let stats = Line::from(vec![
        Span::styled(format!("{} likes", post.likes()), Style::default().fg(COLOR_NEUTRAL)),
        Span::styled("  ·  ", Style::default().fg(COLOR_BORDER)),
        Span::styled(
            format!("{} comments", post.comments),
            Style::default().fg(COLOR_NEUTRAL),
        ),
    ]);
    frame.render_widget(Paragraph::new(stats), row_at(inner, offset, 1));
    offset += 1;

    // Actions: like, comment, share
    let actions_row = row_at(inner, offset, 1);
    if actions_row.height == 0 {
        return;
    }
    let columns = equal_columns(actions_row, 3);
    let (heart, heart_style) = like_indicator(post.is_liked());
    let like = Line::from(vec![
        Span::styled(heart, heart_style),
        Span::styled(" Like", like_label_style(post.is_liked())),
    ]);
    frame.render_widget(Paragraph::new(like).alignment(Alignment::Center), columns[0]);
    frame.render_widget(
        Paragraph::new(Span::styled("✎ Comment", Style::default().fg(COLOR_TEXT)))
            .alignment(Alignment::Center),
        columns[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("➤ Share", Style::default().fg(COLOR_TEXT)))
            .alignment(Alignment::Center),
        columns[2],
    );

    if let Some(registry) = registry {
        registry.register(columns[0], Action::ToggleLike(post.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostId;

    fn post(content: &str, has_image: bool) -> Post {
        Post::new(PostId(1), "a", "@", content, "1h").with_image(has_image)
    }

    #[test]
    fn test_card_height() {
        // 2 borders + author + 1 content + stats + actions
        assert_eq!(card_height(&post("short", false), 40), 6);
        assert_eq!(card_height(&post("short", true), 40), 6 + IMAGE_HEIGHT);
    }

    #[test]
    fn test_card_height_grows_with_wrapping() {
        let long = "word ".repeat(30);
        assert!(card_height(&post(&long, false), 30) > card_height(&post(&long, false), 60));
    }

    #[test]
    fn test_adjust_scroll_keeps_selected_visible() {
        let heights = [6, 6, 6, 6];
        let mut view = FeedView { selected: 3, scroll: 0 };
        adjust_scroll(&mut view, &heights, 12);
        assert_eq!(view.scroll, 2);

        view.selected = 0;
        adjust_scroll(&mut view, &heights, 12);
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_adjust_scroll_leaves_selection_alone() {
        let mut view = FeedView { selected: 10, scroll: 10 };
        adjust_scroll(&mut view, &[5, 5], 20);
        assert_eq!(view, FeedView { selected: 10, scroll: 1 });
    }

    #[test]
    fn test_adjust_scroll_oversized_card() {
        let mut view = FeedView { selected: 1, scroll: 0 };
        adjust_scroll(&mut view, &[5, 30], 10);
        assert_eq!(view.scroll, 1);
    }

    #[test]
    fn test_adjust_scroll_empty() {
        let mut view = FeedView { selected: 2, scroll: 1 };
        adjust_scroll(&mut view, &[], 10);
        assert_eq!(view, FeedView { selected: 2, scroll: 0 });
    }
}
