//! Top-level screen routing.

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Feed,
    Profile,
}

/// Which screen the application root renders.
///
/// Owned by [`crate::app::App`]; there is no history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    current: Screen,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        self.current = screen;
    }
}
