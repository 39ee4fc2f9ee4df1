//! Community content service: fixture-backed reads behind simulated fetch
//! latency, so pages render the same loading states they would against a
//! real backend.

use connectpro_app::views::{
    ChatMessage, Contact, Notification, Post, PostComment, Profile, SuggestedPerson, Topic,
};
use connectpro_app::{CommunityData, FixtureCommunity, User};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::now_ms;

/// Simulated latency for fixture content loads.
const FETCH_LATENCY_MS: u32 = 800;

/// Community content service provided in context at the application root.
#[derive(Clone, Copy, Default)]
pub struct CommunityService {
    data: FixtureCommunity,
}

impl CommunityService {
    pub fn new() -> Self {
        Self {
            data: FixtureCommunity::new(),
        }
    }

    /// Home feed seed posts, loaded eagerly.
    pub fn feed_posts(&self) -> Vec<Post> {
        self.data.feed_posts(now_ms())
    }

    /// Canned comments for an expanded comment panel.
    pub fn post_comments(&self) -> Vec<PostComment> {
        self.data.post_comments(now_ms())
    }

    /// Messaging contacts. The messaging page loads eagerly, with no
    /// simulated delay and no loading state.
    pub fn contacts(&self) -> Vec<Contact> {
        self.data.contacts(now_ms())
    }

    /// Conversation fixture for one contact.
    pub fn conversation(&self, contact_id: &str, viewer_id: &str) -> Vec<ChatMessage> {
        self.data.conversation(contact_id, viewer_id, now_ms())
    }

    /// Trending topics for the right rail, loaded eagerly.
    pub fn trending_topics(&self) -> Vec<Topic> {
        self.data.trending_topics()
    }

    /// Notification list, after the simulated fetch delay.
    pub async fn fetch_notifications(&self) -> Vec<Notification> {
        TimeoutFuture::new(FETCH_LATENCY_MS).await;
        self.data.notifications(now_ms())
    }

    /// Discovery content for the explore page, after the simulated delay.
    pub async fn fetch_explore(&self) -> (Vec<Post>, Vec<Topic>, Vec<SuggestedPerson>) {
        TimeoutFuture::new(FETCH_LATENCY_MS).await;
        (
            self.data.trending_posts(now_ms()),
            self.data.trending_topics(),
            self.data.suggested_people(),
        )
    }

    /// A profile and its posts, after the simulated delay.
    pub async fn fetch_profile(&self, param: &str, viewer: Option<&User>) -> (Profile, Vec<Post>) {
        TimeoutFuture::new(FETCH_LATENCY_MS).await;
        (
            self.data.profile(param, viewer),
            self.data.profile_posts(param, viewer, now_ms()),
        )
    }
}

/// Hook for using the community service
pub fn use_community() -> CommunityService {
    use_context::<CommunityService>().expect("CommunityService must be provided in context")
}
