//! Feed post record.

use std::fmt;

use serde::Deserialize;

use crate::error::SeedError;

/// Unique identifier of a post within the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u32);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the feed.
///
/// `likes` and `is_liked` are private: the only way to change them is
/// [`Post::toggled`], which moves both together so the counter always
/// reflects the toggle history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    /// Glyph drawn in the avatar slot
    pub avatar: String,
    pub content: String,
    /// Relative time label, e.g. "2h ago"
    pub time: String,
    pub comments: u32,
    /// Whether a placeholder image block renders under the content
    pub has_image: bool,
    likes: u32,
    is_liked: bool,
}

impl Post {
    /// Create an unliked post with no likes.
    pub fn new(
        id: PostId,
        author: impl Into<String>,
        avatar: impl Into<String>,
        content: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            avatar: avatar.into(),
            content: content.into(),
            time: time.into(),
            comments: 0,
            has_image: false,
            likes: 0,
            is_liked: false,
        }
    }

    /// Set the initial like state.
    ///
    /// Fails when `is_liked` is set with zero likes, or when an unliked post
    /// already sits at `u32::MAX`. Either post could not be toggled without
    /// the counter leaving its range.
    pub fn with_likes(mut self, likes: u32, is_liked: bool) -> Result<Self, SeedError> {
        if is_liked && likes == 0 {
            return Err(SeedError::LikedWithoutLikes(self.id));
        }
        if !is_liked && likes == u32::MAX {
            return Err(SeedError::LikesOverflow(self.id));
        }
        self.likes = likes;
        self.is_liked = is_liked;
        Ok(self)
    }

    pub fn with_comments(mut self, comments: u32) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    pub fn is_liked(&self) -> bool {
        self.is_liked
    }

    /// Return a copy with the like flag flipped and the counter moved by one.
    pub fn toggled(&self) -> Self {
        let mut post = self.clone();
        // Construction keeps likes >= 1 while liked and < u32::MAX while not
        if post.is_liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes = post.likes.saturating_add(1);
        }
        post.is_liked = !post.is_liked;
        post
    }
}

/// On-disk shape of a post in the seed document.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    pub author: String,
    pub avatar: String,
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    pub time: String,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub has_image: bool,
}

impl TryFrom<PostRecord> for Post {
    type Error = SeedError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        Post::new(
            record.id,
            record.author,
            record.avatar,
            record.content,
            record.time,
        )
        .with_comments(record.comments)
        .with_image(record.has_image)
        .with_likes(record.likes, record.is_liked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(likes: u32, is_liked: bool) -> Post {
        Post::new(PostId(1), "Sarah Johnson", "*", "Hello", "2h ago")
            .with_likes(likes, is_liked)
            .unwrap()
    }

    #[test]
    fn test_new_post_is_unliked() {
        let post = Post::new(PostId(4), "a", "b", "c", "now");
        assert_eq!(post.likes(), 0);
        assert!(!post.is_liked());
        assert!(!post.has_image);
        assert_eq!(post.comments, 0);
    }

    #[test]
    fn test_toggled_like_increments() {
        let post = sample(234, false).toggled();
        assert!(post.is_liked());
        assert_eq!(post.likes(), 235);
    }

    #[test]
    fn test_toggled_unlike_decrements() {
        let post = sample(567, true).toggled();
        assert!(!post.is_liked());
        assert_eq!(post.likes(), 566);
    }

    #[test]
    fn test_toggled_leaves_original_untouched() {
        let post = sample(10, false);
        let _ = post.toggled();
        assert_eq!(post.likes(), 10);
        assert!(!post.is_liked());
    }

    #[test]
    fn test_liked_without_likes_rejected() {
        let err = Post::new(PostId(9), "a", "b", "c", "now")
            .with_likes(0, true)
            .unwrap_err();
        assert!(matches!(err, SeedError::LikedWithoutLikes(PostId(9))));
    }

    #[test]
    fn test_unliked_at_max_likes_rejected() {
        let err = Post::new(PostId(8), "a", "b", "c", "now")
            .with_likes(u32::MAX, false)
            .unwrap_err();
        assert!(matches!(err, SeedError::LikesOverflow(PostId(8))));
    }

    #[test]
    fn test_liked_at_max_likes_toggles_both_ways() {
        let post = sample(u32::MAX, true);
        let unliked = post.toggled();
        assert!(!unliked.is_liked());
        assert_eq!(unliked.likes(), u32::MAX - 1);

        let relinked = unliked.toggled();
        assert!(relinked.is_liked());
        assert_eq!(relinked.likes(), u32::MAX);
    }

    #[test]
    fn test_record_defaults() {
        let json = r#"{"id": 5, "author": "x", "avatar": "y", "content": "z", "time": "1m"}"#;
        let record: PostRecord = serde_json::from_str(json).unwrap();
        let post = Post::try_from(record).unwrap();
        assert_eq!(post.id, PostId(5));
        assert_eq!(post.likes(), 0);
        assert!(!post.is_liked());
        assert!(!post.has_image);
    }

    #[test]
    fn test_post_id_display() {
        assert_eq!(PostId(42).to_string(), "42");
    }
}
