//! Common test utilities for integration tests.

#![allow(dead_code)]

use plaza::app::App;
use plaza::models::{Post, PostId, Seed};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// An app in the ready phase with the built-in seed.
pub fn ready_app() -> App {
    App::with_seed(Seed::builtin().expect("built-in seed parses"))
}

/// A post with the given like state.
pub fn post(id: u32, likes: u32, is_liked: bool) -> Post {
    Post::new(PostId(id), format!("Author {}", id), "@", "Some content", "1h ago")
        .with_likes(likes, is_liked)
        .expect("valid like state")
}

/// Render one frame and return the buffer.
pub fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| plaza::ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as newline-separated rows.
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
