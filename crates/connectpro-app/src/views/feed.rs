//! # Feed View State
//!
//! Post domain types and the home-feed state machine. The feed is a local
//! append-only sequence: composer submissions prepend, nothing round-trips to
//! a backend, and posts are never deleted in this scope.

use serde::{Deserialize, Serialize};

/// Rendering branch for an attached media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    Image,
    /// Video with optional poster frame
    Video,
}

impl MediaKind {
    /// Classify a browser MIME type. Anything that is not `image/*` or
    /// `video/*` is unsupported and rejected before any state change.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// A media attachment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Which rendering branch to take
    pub kind: MediaKind,
    /// Source URL (remote fixture URL or a transient object URL)
    pub url: String,
    /// Alt text for images
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alt: Option<String>,
    /// Poster frame for videos
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub poster: Option<String>,
}

/// Author snapshot embedded in a post.
///
/// The role is free text rather than the account role enumeration: fixture
/// authors carry titles like "Agency Owner" that are not account roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    /// Author's user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Professional title shown under the name
    pub role: String,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
}

/// A feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post id (time-based for locally created posts)
    pub id: String,
    /// Author snapshot at creation time
    pub author: PostAuthor,
    /// Text body
    pub content: String,
    /// Creation time, ms since epoch
    pub timestamp: u64,
    /// Stored like count
    pub likes: u32,
    /// Stored comment count
    pub comments: u32,
    /// Stored share count
    pub shares: u32,
    /// Attached media, in display order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub media: Vec<MediaItem>,
}

/// A canned comment shown inside a card's comment panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostComment {
    /// Commenter display name
    pub author_name: String,
    /// Commenter avatar URL
    pub avatar: Option<String>,
    /// Comment text
    pub text: String,
    /// Comment time, ms since epoch
    pub timestamp: u64,
}

/// Composer draft: text plus at most one media attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    /// Draft text
    pub text: String,
    /// Attached media, if a file was picked
    pub media: Option<MediaItem>,
}

impl PostDraft {
    /// A draft with neither text nor media cannot be submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.media.is_none()
    }
}

/// Card-local like state, seeded from the post's stored count.
///
/// Deliberately decoupled from the feed's copy of the post: toggling mutates
/// only this counter and never writes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    /// Whether the viewer has liked the post in this session
    pub liked: bool,
    /// Displayed like count
    pub count: u32,
}

impl LikeState {
    /// Seed from a post's stored count, un-liked.
    #[must_use]
    pub fn seeded(count: u32) -> Self {
        Self {
            liked: false,
            count,
        }
    }

    /// Flip the like and adjust the displayed count.
    pub fn toggle(&mut self) {
        if self.liked {
            self.count = self.count.saturating_sub(1);
        } else {
            self.count += 1;
        }
        self.liked = !self.liked;
    }
}

/// Home-feed state: posts ordered newest first.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    /// Posts, newest first
    pub posts: Vec<Post>,
}

impl FeedState {
    /// Seed the feed with fixture posts.
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Number of posts in the feed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the feed is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Submit a composer draft.
    ///
    /// Empty drafts are rejected and the feed is left untouched; the caller
    /// keeps the draft so the composer stays populated. Otherwise a new post
    /// with a time-based id, the current timestamp, and zeroed counts is
    /// prepended.
    pub fn submit_post(&mut self, author: &PostAuthor, draft: &PostDraft, now_ms: u64) -> bool {
        if draft.is_empty() {
            return false;
        }
        let post = Post {
            id: format!("post-{now_ms}"),
            author: author.clone(),
            content: draft.text.trim().to_string(),
            timestamp: now_ms,
            likes: 0,
            comments: 0,
            shares: 0,
            media: draft.media.clone().into_iter().collect(),
        };
        self.posts.insert(0, post);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> PostAuthor {
        PostAuthor {
            id: "user123".to_string(),
            name: "Jane Smith".to_string(),
            role: "Affiliate".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_empty_draft_is_rejected() {
        let mut feed = FeedState::default();
        let draft = PostDraft {
            text: "   \n".to_string(),
            media: None,
        };
        assert!(!feed.submit_post(&author(), &draft, 1_000));
        assert!(feed.is_empty());
        // Caller still holds the draft untouched
        assert_eq!(draft.text, "   \n");
    }

    #[test]
    fn test_submit_prepends_with_zero_counts() {
        let mut feed = FeedState::new(vec![Post {
            id: "post-1".to_string(),
            author: author(),
            content: "older".to_string(),
            timestamp: 500,
            likes: 3,
            comments: 1,
            shares: 0,
            media: Vec::new(),
        }]);

        let draft = PostDraft {
            text: "  fresh take  ".to_string(),
            media: None,
        };
        assert!(feed.submit_post(&author(), &draft, 2_000));
        assert_eq!(feed.len(), 2);

        let newest = &feed.posts[0];
        assert_eq!(newest.content, "fresh take");
        assert_eq!(newest.id, "post-2000");
        assert!(newest.timestamp >= 2_000);
        assert_eq!((newest.likes, newest.comments, newest.shares), (0, 0, 0));
    }

    #[test]
    fn test_media_only_draft_submits() {
        let mut feed = FeedState::default();
        let draft = PostDraft {
            text: String::new(),
            media: Some(MediaItem {
                kind: MediaKind::Image,
                url: "blob:preview".to_string(),
                alt: Some("Post media".to_string()),
                poster: None,
            }),
        };
        assert!(feed.submit_post(&author(), &draft, 3_000));
        assert_eq!(feed.posts[0].media.len(), 1);
        assert_eq!(feed.posts[0].media[0].kind, MediaKind::Image);
    }

    #[test]
    fn test_like_toggle_round_trips() {
        let mut like = LikeState::seeded(24);
        like.toggle();
        assert!(like.liked);
        assert_eq!(like.count, 25);
        like.toggle();
        assert!(!like.liked);
        assert_eq!(like.count, 24);
    }

    #[test]
    fn test_like_toggle_zero_floor() {
        let mut like = LikeState::seeded(0);
        like.toggle();
        like.toggle();
        assert_eq!(like.count, 0);
        // Un-liking a zero-count card never underflows
        let mut odd = LikeState {
            liked: true,
            count: 0,
        };
        odd.toggle();
        assert_eq!(odd.count, 0);
    }

    #[test]
    fn test_mime_classification() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("application/pdf"), None);
        assert_eq!(MediaKind::from_mime(""), None);
    }
}
