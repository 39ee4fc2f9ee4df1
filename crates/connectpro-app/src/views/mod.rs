//! # View State
//!
//! Headless per-page state machines. Each module owns one routed surface's
//! domain types and mutations, kept free of reactive primitives and timers so
//! every operation is testable natively:
//!
//! - [`feed`] - home feed posts, composer drafts, like toggling
//! - [`messages`] - contact list and conversation simulation
//! - [`notifications`] - read-state mutation and display filtering
//! - [`explore`] - trending content and category filtering
//! - [`profile`] - profile types and ownership resolution

pub mod explore;
pub mod feed;
pub mod messages;
pub mod notifications;
pub mod profile;

pub use explore::{Category, ExploreState, SuggestedPerson, Topic, CATEGORIES};
pub use feed::{FeedState, LikeState, MediaItem, MediaKind, Post, PostAuthor, PostComment, PostDraft};
pub use messages::{ChatMessage, Contact, MessagesState};
pub use notifications::{
    Notification, NotificationActor, NotificationFilter, NotificationKind, NotificationsState,
};
pub use profile::{is_own_profile, Profile, ProfileTab, ME};
