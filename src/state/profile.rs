//! Profile screen interaction state.

/// Content tabs on the profile screen. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    Photos,
    Videos,
}

impl ProfileTab {
    /// All tabs in display order.
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Posts, ProfileTab::Photos, ProfileTab::Videos];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Posts => "Posts",
            ProfileTab::Photos => "Photos",
            ProfileTab::Videos => "Videos",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProfileTab::Posts => "▦",
            ProfileTab::Photos => "▣",
            ProfileTab::Videos => "▶",
        }
    }

    /// Next tab to the right, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ProfileTab::Posts => ProfileTab::Photos,
            ProfileTab::Photos => ProfileTab::Videos,
            ProfileTab::Videos => ProfileTab::Posts,
        }
    }

    /// Next tab to the left, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            ProfileTab::Posts => ProfileTab::Videos,
            ProfileTab::Photos => ProfileTab::Posts,
            ProfileTab::Videos => ProfileTab::Photos,
        }
    }
}

/// Viewer's transient state on the profile screen.
///
/// The two fields are independent: changing one never touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileState {
    pub active_tab: ProfileTab,
    pub is_following: bool,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
    }

    /// Flip the follow flag. Follower counts are display data and stay put.
    pub fn toggle_follow(&mut self) {
        self.is_following = !self.is_following;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ProfileState::new();
        assert_eq!(state.active_tab, ProfileTab::Posts);
        assert!(!state.is_following);
    }

    #[test]
    fn test_set_active_tab_idempotent() {
        let mut once = ProfileState::new();
        once.set_active_tab(ProfileTab::Photos);

        let mut twice = ProfileState::new();
        twice.set_active_tab(ProfileTab::Photos);
        twice.set_active_tab(ProfileTab::Photos);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_tab_wins() {
        let mut state = ProfileState::new();
        for tab in ProfileTab::ALL {
            state.set_active_tab(tab);
        }
        assert_eq!(state.active_tab, ProfileTab::Videos);
    }

    #[test]
    fn test_toggle_follow_twice_restores() {
        let mut state = ProfileState::new();
        state.toggle_follow();
        assert!(state.is_following);
        state.toggle_follow();
        assert!(!state.is_following);
    }

    #[test]
    fn test_follow_and_tab_independent() {
        let mut state = ProfileState::new();
        state.set_active_tab(ProfileTab::Videos);
        state.toggle_follow();
        assert_eq!(state.active_tab, ProfileTab::Videos);

        state.set_active_tab(ProfileTab::Photos);
        assert!(state.is_following);
    }

    #[test]
    fn test_tab_cycling() {
        for tab in ProfileTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(ProfileTab::Videos.next(), ProfileTab::Posts);
        assert_eq!(ProfileTab::Posts.prev(), ProfileTab::Videos);
    }
}
