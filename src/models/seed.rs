//! Static mock data for the feed and profile screens.
//!
//! The built-in seed is embedded at compile time. A replacement document
//! with the same shape can be loaded from disk.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::{Post, PostRecord, ProfileCard};
use crate::error::SeedError;

const BUILTIN_SEED: &str = include_str!("../../assets/seed.json");

#[derive(Debug, Deserialize)]
struct SeedDocument {
    posts: Vec<PostRecord>,
    #[serde(default)]
    stories: Vec<String>,
    #[serde(default)]
    profile: ProfileCard,
    #[serde(default)]
    notifications: u32,
}

/// Validated seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub posts: Vec<Post>,
    /// Avatar glyphs for the story strip
    pub stories: Vec<String>,
    pub profile: ProfileCard,
    /// Count shown on the notification badge
    pub notifications: u32,
}

impl Seed {
    /// The seed compiled into the binary.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Parse and validate a seed document.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let doc: SeedDocument = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(doc.posts.len());
        let mut posts = Vec::with_capacity(doc.posts.len());
        for record in doc.posts {
            if !seen.insert(record.id) {
                return Err(SeedError::DuplicatePostId(record.id));
            }
            posts.push(Post::try_from(record)?);
        }

        Ok(Self {
            posts,
            stories: doc.stories,
            profile: doc.profile,
            notifications: doc.notifications,
        })
    }

    /// Read a seed document from disk.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `path` when given, otherwise the built-in seed.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostId;

    #[test]
    fn test_builtin_seed_parses() {
        let seed = Seed::builtin().unwrap();
        assert_eq!(seed.posts.len(), 3);
        assert_eq!(seed.stories.len(), 5);
        assert_eq!(seed.notifications, 3);
        assert_eq!(seed.profile.name, "Alex Thompson");
        assert_eq!(seed.profile.stats.len(), 3);
        assert_eq!(seed.profile.grid_tiles, 9);
    }

    #[test]
    fn test_builtin_seed_post_values() {
        let seed = Seed::builtin().unwrap();

        let first = &seed.posts[0];
        assert_eq!(first.id, PostId(1));
        assert_eq!(first.author, "Sarah Johnson");
        assert_eq!(first.likes(), 234);
        assert!(!first.is_liked());
        assert!(first.has_image);

        let second = &seed.posts[1];
        assert_eq!(second.likes(), 567);
        assert!(second.is_liked());
        assert!(!second.has_image);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"posts": [
            {"id": 1, "author": "a", "avatar": "a", "content": "a", "time": "1h"},
            {"id": 1, "author": "b", "avatar": "b", "content": "b", "time": "2h"}
        ]}"#;
        let err = Seed::from_json(json).unwrap_err();
        assert!(matches!(err, SeedError::DuplicatePostId(PostId(1))));
    }

    #[test]
    fn test_liked_with_zero_likes_rejected() {
        let json = r#"{"posts": [
            {"id": 3, "author": "a", "avatar": "a", "content": "a", "time": "1h", "is_liked": true}
        ]}"#;
        let err = Seed::from_json(json).unwrap_err();
        assert!(matches!(err, SeedError::LikedWithoutLikes(PostId(3))));
    }

    #[test]
    fn test_unliked_with_max_likes_rejected() {
        let json = r#"{"posts": [
            {"id": 1, "author": "a", "avatar": "a", "content": "a", "time": "1h", "likes": 4294967295}
        ]}"#;
        let err = Seed::from_json(json).unwrap_err();
        assert!(matches!(err, SeedError::LikesOverflow(PostId(1))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Seed::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{"posts": []}"#;
        let seed = Seed::from_json(json).unwrap();
        assert!(seed.posts.is_empty());
        assert!(seed.stories.is_empty());
        assert_eq!(seed.notifications, 0);
        assert_eq!(seed.profile.grid_tiles, 9);
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        assert_eq!(Seed::load(None).unwrap(), Seed::builtin().unwrap());
    }
}
