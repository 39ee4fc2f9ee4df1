//! # Explore View State
//!
//! Trending posts, topics, and suggested people, with keyword category
//! filtering. Category matching is a deliberately coarse case-insensitive
//! substring test of the category keyword against post text, not semantic
//! matching.

use crate::views::feed::Post;
use serde::{Deserialize, Serialize};

/// A discovery category chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Keyword matched against post text
    pub id: &'static str,
    /// Chip label
    pub name: &'static str,
}

/// The fixed category chips, in display order.
pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "performance",
        name: "Performance Marketing",
    },
    Category {
        id: "social",
        name: "Social Media",
    },
    Category {
        id: "affiliate",
        name: "Affiliate Marketing",
    },
    Category {
        id: "agencies",
        name: "Agencies",
    },
    Category {
        id: "influencer",
        name: "Influencer Marketing",
    },
    Category {
        id: "analytics",
        name: "Analytics & Data",
    },
];

/// A trending topic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic id
    pub id: String,
    /// Topic label
    pub name: String,
    /// Number of posts under the topic
    pub post_count: u32,
}

/// A suggested person card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPerson {
    /// Unique user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Professional title
    pub role: String,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// Follower count
    pub followers: u32,
}

/// Explore page state.
#[derive(Debug, Clone, Default)]
pub struct ExploreState {
    /// Trending posts
    pub posts: Vec<Post>,
    /// Trending topics
    pub topics: Vec<Topic>,
    /// Suggested people
    pub people: Vec<SuggestedPerson>,
    /// Active category keyword, if any
    pub selected_category: Option<String>,
}

impl ExploreState {
    /// Seed with fabricated discovery content.
    #[must_use]
    pub fn new(posts: Vec<Post>, topics: Vec<Topic>, people: Vec<SuggestedPerson>) -> Self {
        Self {
            posts,
            topics,
            people,
            selected_category: None,
        }
    }

    /// Select a category, or clear it when it is already active.
    pub fn toggle_category(&mut self, id: &str) {
        if self.selected_category.as_deref() == Some(id) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(id.to_string());
        }
    }

    /// Trending posts visible under the active category filter.
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&Post> {
        match &self.selected_category {
            None => self.posts.iter().collect(),
            Some(keyword) => {
                let needle = keyword.to_lowercase();
                self.posts
                    .iter()
                    .filter(|post| post.content.to_lowercase().contains(&needle))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::feed::PostAuthor;

    fn post(id: &str, content: &str) -> Post {
        Post {
            id: id.to_string(),
            author: PostAuthor {
                id: "user1".to_string(),
                name: "Sarah Johnson".to_string(),
                role: "Traffic Manager".to_string(),
                avatar: None,
            },
            content: content.to_string(),
            timestamp: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            media: Vec::new(),
        }
    }

    fn state() -> ExploreState {
        ExploreState::new(
            vec![
                post("post1", "Case study results #performancemarketing #paidmedia"),
                post("post2", "We're hiring affiliate marketers! #affiliatemarketing"),
                post("post3", "New Influencer partnerships open"),
            ],
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_category_filters_by_keyword_substring() {
        let mut explore = state();
        explore.toggle_category("affiliate");
        let visible = explore.visible_posts();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "post2");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let mut explore = state();
        explore.toggle_category("influencer");
        // "Influencer" in the post text matches the lowercase keyword
        assert_eq!(explore.visible_posts().len(), 1);
    }

    #[test]
    fn test_same_category_toggles_off() {
        let mut explore = state();
        let unfiltered = explore.visible_posts().len();

        explore.toggle_category("performance");
        assert_eq!(explore.visible_posts().len(), 1);

        explore.toggle_category("performance");
        assert!(explore.selected_category.is_none());
        assert_eq!(explore.visible_posts().len(), unfiltered);
    }

    #[test]
    fn test_switching_categories_replaces_filter() {
        let mut explore = state();
        explore.toggle_category("performance");
        explore.toggle_category("affiliate");
        assert_eq!(explore.selected_category.as_deref(), Some("affiliate"));
        assert_eq!(explore.visible_posts().len(), 1);
    }

    #[test]
    fn test_category_table_is_stable() {
        assert_eq!(CATEGORIES.len(), 6);
        assert_eq!(CATEGORIES[0].name, "Performance Marketing");
        assert_eq!(CATEGORIES[5].id, "analytics");
    }
}
