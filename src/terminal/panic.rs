//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call this early in `main()`, before creating the `TerminalManager`. The
/// hook restores the terminal and then runs the previous hook so the panic
/// message is still printed.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();

        // Reset to default hook to avoid affecting other tests
        let _ = panic::take_hook();
    }
}
