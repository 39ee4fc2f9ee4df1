//! # Profile View State
//!
//! Profile page types and ownership resolution. The route parameter `me` (or
//! the current user's own id) selects the session-backed profile; any other
//! id resolves to fixture content.

use serde::{Deserialize, Serialize};

/// The literal route parameter meaning "current user".
pub const ME: &str = "me";

/// A rendered profile header plus stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile owner's user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Professional title under the name
    pub role: String,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// Cover image URL
    pub cover: String,
    /// Bio paragraph
    pub bio: String,
    /// Location line
    pub location: String,
    /// Company line
    pub company: String,
    /// Website URL
    pub website: String,
    /// Join date, already formatted ("January 2023")
    pub joined: String,
    /// Connection count
    pub connections: u32,
    /// Follower count
    pub followers: u32,
    /// Following count
    pub following: u32,
}

/// Profile content tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    /// The owner's posts
    Posts,
    /// Published articles (empty in this scope)
    Articles,
    /// Recent activity (empty in this scope)
    Activity,
}

impl ProfileTab {
    /// Tabs in display order.
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Posts, ProfileTab::Articles, ProfileTab::Activity];

    /// Tab label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Articles => "Articles",
            Self::Activity => "Activity",
        }
    }
}

/// Whether a profile route parameter refers to the signed-in user.
#[must_use]
pub fn is_own_profile(param: &str, current_id: Option<&str>) -> bool {
    param == ME || current_id == Some(param)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_literal_is_own_profile() {
        assert!(is_own_profile("me", Some("user123")));
        // Even signed out, `me` refers to the viewer
        assert!(is_own_profile("me", None));
    }

    #[test]
    fn test_matching_id_is_own_profile() {
        assert!(is_own_profile("user123", Some("user123")));
        assert!(!is_own_profile("user1", Some("user123")));
        assert!(!is_own_profile("user123", None));
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = ProfileTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Posts", "Articles", "Activity"]);
    }
}
