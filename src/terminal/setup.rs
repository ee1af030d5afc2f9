//! Terminal setup and teardown functions.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Enters alternate screen (preserves original terminal content)
/// - Enables mouse capture for click events when `mouse` is set
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)?;
    if mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call multiple times; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Restore terminal to a usable state after a panic or error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_tui_mode_writes_sequences() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer, true).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_mouse_capture_is_optional() {
        let mut with_mouse = Vec::new();
        enter_tui_mode(&mut with_mouse, true).unwrap();
        let mut without_mouse = Vec::new();
        enter_tui_mode(&mut without_mouse, false).unwrap();
        assert!(with_mouse.len() > without_mouse.len());
    }

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
    }
}
