//! Feed post collection and the like-toggle.

use crate::models::{Post, PostId};

/// Produce a new collection with the post matching `id` toggled.
///
/// Order and every other post are preserved. An id that matches nothing
/// yields a value-equal copy of `posts`.
pub fn toggle_like(posts: &[Post], id: PostId) -> Vec<Post> {
    posts
        .iter()
        .map(|post| if post.id == id { post.toggled() } else { post.clone() })
        .collect()
}

/// The ordered post collection owned by the feed screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    posts: Vec<Post>,
}

impl FeedState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Id of the post at `index` in display order.
    pub fn id_at(&self, index: usize) -> Option<PostId> {
        self.posts.get(index).map(|post| post.id)
    }

    /// Toggle the like on the post with `id`.
    ///
    /// Returns `false` when no post matches, leaving the collection as it was.
    pub fn toggle_like(&mut self, id: PostId) -> bool {
        if self.get(id).is_none() {
            tracing::warn!("toggle_like: no post with id {}", id);
            return false;
        }
        self.posts = toggle_like(&self.posts, id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, likes: u32, is_liked: bool) -> Post {
        Post::new(PostId(id), format!("author {}", id), "@", "content", "1h")
            .with_likes(likes, is_liked)
            .unwrap()
    }

    fn seed_posts() -> Vec<Post> {
        vec![post(1, 234, false), post(2, 567, true), post(3, 189, false)]
    }

    #[test]
    fn test_like_then_unlike_round_trip() {
        let posts = seed_posts();

        let liked = toggle_like(&posts, PostId(1));
        assert!(liked[0].is_liked());
        assert_eq!(liked[0].likes(), 235);

        let unliked = toggle_like(&liked, PostId(1));
        assert!(!unliked[0].is_liked());
        assert_eq!(unliked[0].likes(), 234);
        assert_eq!(unliked, posts);
    }

    #[test]
    fn test_unlike_preliked_post() {
        let toggled = toggle_like(&seed_posts(), PostId(2));
        assert!(!toggled[1].is_liked());
        assert_eq!(toggled[1].likes(), 566);
    }

    #[test]
    fn test_other_posts_untouched() {
        let posts = seed_posts();
        let toggled = toggle_like(&posts, PostId(2));

        assert_eq!(toggled[0], posts[0]);
        assert_eq!(toggled[2], posts[2]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let posts = seed_posts();
        assert_eq!(toggle_like(&posts, PostId(99)), posts);
    }

    #[test]
    fn test_order_preserved() {
        let toggled = toggle_like(&seed_posts(), PostId(3));
        let ids: Vec<_> = toggled.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PostId(1), PostId(2), PostId(3)]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(toggle_like(&[], PostId(1)).is_empty());
    }

    #[test]
    fn test_feed_state_toggle_reports_match() {
        let mut feed = FeedState::new(seed_posts());

        assert!(feed.toggle_like(PostId(3)));
        assert_eq!(feed.get(PostId(3)).map(Post::likes), Some(190));

        let before = feed.clone();
        assert!(!feed.toggle_like(PostId(42)));
        assert_eq!(feed, before);
    }

    #[test]
    fn test_id_at() {
        let feed = FeedState::new(seed_posts());
        assert_eq!(feed.id_at(0), Some(PostId(1)));
        assert_eq!(feed.id_at(2), Some(PostId(3)));
        assert_eq!(feed.id_at(3), None);
        assert_eq!(feed.len(), 3);
        assert!(!feed.is_empty());
    }
}
