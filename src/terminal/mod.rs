//! Terminal management module with RAII pattern for automatic cleanup.
//!
//! The `TerminalManager` ensures that terminal state is properly restored
//! when the application exits, whether normally or due to a panic.
//!
//! # Example
//!
//! ```no_run
//! use plaza::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new(true)?;
//!     let terminal = term_manager.terminal();
//!
//!     // ... run your application ...
//!
//!     // Terminal is automatically restored when term_manager is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// RAII guard that restores terminal state on drop.
pub struct TerminalGuard {
    /// Whether cleanup has already been performed
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Manually perform cleanup. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Manages terminal state with automatic cleanup via RAII.
///
/// The panic hook installed by `setup_panic_hook()` covers the paths where
/// `Drop` does not run.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Set up the terminal for TUI operation:
    /// 1. Enables raw mode
    /// 2. Enters alternate screen
    /// 3. Enables mouse capture when `mouse` is set
    /// 4. Clears the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;

        // Created before entering TUI mode so a failure below still restores
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout, mouse)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    /// Get a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
