//! Static profile card shown on the profile screen.

use serde::Deserialize;

/// A labelled display statistic ("Followers", "2.5K").
///
/// Values are display strings and are never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileStat {
    pub label: String,
    pub value: String,
}

/// The viewed user's profile details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileCard {
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub location: String,
    #[serde(default)]
    pub stats: Vec<ProfileStat>,
    /// Number of placeholder tiles in the content grid
    #[serde(default = "default_grid_tiles")]
    pub grid_tiles: usize,
}

fn default_grid_tiles() -> usize {
    9
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: String::new(),
            bio: String::new(),
            location: String::new(),
            stats: Vec::new(),
            grid_tiles: default_grid_tiles(),
        }
    }
}
