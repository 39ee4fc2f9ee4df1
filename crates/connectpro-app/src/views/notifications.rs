//! # Notifications View State
//!
//! Fixture-fabricated notification list with explicit read-state mutation and
//! an orthogonal display filter. Filtering never implies marking read.

use serde::{Deserialize, Serialize};

/// Notification category, each with its own icon treatment in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Someone liked a post
    Like,
    /// Someone commented on a post
    Comment,
    /// A connection request or acceptance
    Connection,
    /// The user was @-mentioned
    Mention,
    /// A milestone was reached
    Achievement,
    /// A new direct message arrived
    Message,
    /// Someone shared a post
    Share,
    /// A matched job or campaign opportunity
    Opportunity,
}

impl NotificationKind {
    /// Display label used by filter chips.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Like => "Likes",
            Self::Comment => "Comments",
            Self::Connection => "Connections",
            Self::Mention => "Mentions",
            Self::Achievement => "Achievements",
            Self::Message => "Messages",
            Self::Share => "Shares",
            Self::Opportunity => "Opportunities",
        }
    }
}

/// The user that triggered a notification, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationActor {
    /// Display name
    pub name: String,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
}

/// A single notification row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification id
    pub id: String,
    /// Category
    pub kind: NotificationKind,
    /// Primary line
    pub title: String,
    /// Secondary line (quoted post text, job details, ...)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Event time, ms since epoch
    pub timestamp: u64,
    /// Whether the user has seen this notification
    pub read: bool,
    /// Triggering user, when applicable
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub actor: Option<NotificationActor>,
    /// Deep link target, when applicable
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
}

/// Display filter for the notification list.
///
/// Read-state and filter are independent axes: a kind filter shows both read
/// and unread rows of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFilter {
    /// Everything
    All,
    /// Unread rows only
    Unread,
    /// Rows of one category only
    Kind(NotificationKind),
}

impl NotificationFilter {
    /// The filter chips the page renders, in order.
    pub const BAR: [NotificationFilter; 6] = [
        NotificationFilter::All,
        NotificationFilter::Unread,
        NotificationFilter::Kind(NotificationKind::Connection),
        NotificationFilter::Kind(NotificationKind::Like),
        NotificationFilter::Kind(NotificationKind::Comment),
        NotificationFilter::Kind(NotificationKind::Message),
    ];

    /// Chip label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Kind(kind) => kind.label(),
        }
    }

    /// Whether a notification passes this filter.
    #[must_use]
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Kind(kind) => notification.kind == *kind,
        }
    }
}

/// Notifications page state.
#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    /// All notifications, newest first
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Seed with fixture notifications.
    #[must_use]
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Returns false for unknown ids.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every notification read.
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }

    /// The rows visible under a filter, in stored order.
    #[must_use]
    pub fn filtered(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.items.iter().filter(|n| filter.matches(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> NotificationsState {
        NotificationsState::new(vec![
            Notification {
                id: "notif1".to_string(),
                kind: NotificationKind::Like,
                title: "Sarah Johnson liked your post".to_string(),
                description: None,
                timestamp: 1_000,
                read: false,
                actor: None,
                link: None,
            },
            Notification {
                id: "notif2".to_string(),
                kind: NotificationKind::Connection,
                title: "Priya Patel accepted your connection".to_string(),
                description: None,
                timestamp: 2_000,
                read: true,
                actor: None,
                link: None,
            },
            Notification {
                id: "notif3".to_string(),
                kind: NotificationKind::Like,
                title: "Alex Kim liked your comment".to_string(),
                description: None,
                timestamp: 3_000,
                read: false,
                actor: None,
                link: None,
            },
        ])
    }

    #[test]
    fn test_mark_read_flips_one_flag() {
        let mut state = seeded();
        assert!(state.mark_read("notif1"));
        assert_eq!(state.unread_count(), 1);
        assert!(!state.mark_read("missing"));
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn test_mark_all_read_leaves_zero_unread() {
        let mut state = seeded();
        state.mark_all_read();
        assert_eq!(state.unread_count(), 0);
        // Idempotent on an already-read list
        state.mark_all_read();
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn test_filter_axes_are_independent() {
        let mut state = seeded();
        // A kind filter shows read and unread rows alike
        assert_eq!(state.filtered(NotificationFilter::Kind(NotificationKind::Like)).len(), 2);
        assert_eq!(state.filtered(NotificationFilter::Unread).len(), 2);

        // Filtering marked nothing read
        assert_eq!(state.unread_count(), 2);

        // Marking read changes the unread view but not the kind view
        state.mark_read("notif1");
        assert_eq!(state.filtered(NotificationFilter::Kind(NotificationKind::Like)).len(), 2);
        assert_eq!(state.filtered(NotificationFilter::Unread).len(), 1);
        assert_eq!(state.filtered(NotificationFilter::All).len(), 3);
    }

    #[test]
    fn test_filter_bar_labels() {
        let labels: Vec<&str> = NotificationFilter::BAR.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Unread", "Connections", "Likes", "Comments", "Messages"]
        );
    }
}
