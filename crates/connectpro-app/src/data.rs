//! # Community Data Access
//!
//! The capability seam between page controllers and their data. Pages only
//! ever see the [`CommunityData`] trait; the shipped implementation is
//! [`FixtureCommunity`], a deterministic in-memory provider that fabricates
//! the same content every session. Simulated fetch latency is a frontend
//! concern and lives in the web layer, so tests exercise pages against this
//! provider directly with no timer coupling.
//!
//! Fixture ages are expressed as offsets from the caller-supplied `now_ms`,
//! which keeps relative labels ("2 hours ago") stable under test.

use crate::session::User;
use crate::views::explore::{SuggestedPerson, Topic};
use crate::views::feed::{MediaItem, MediaKind, Post, PostAuthor, PostComment};
use crate::views::messages::{ChatMessage, Contact};
use crate::views::notifications::{Notification, NotificationActor, NotificationKind};
use crate::views::profile::{is_own_profile, Profile};

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

/// Skill chips rendered on every profile.
pub const PROFILE_SKILLS: [&str; 6] = [
    "Performance Marketing",
    "Paid Social",
    "Affiliate Marketing",
    "SEO",
    "Analytics",
    "Content Strategy",
];

/// Name and avatar pairs shown in the profile connections preview grid.
pub const CONNECTION_PREVIEW: [(&str, &str); 5] = [
    (
        "Miguel L.",
        "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg",
    ),
    (
        "Priya P.",
        "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
    ),
    (
        "David W.",
        "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg",
    ),
    (
        "Emma T.",
        "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg",
    ),
    (
        "Alex K.",
        "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg",
    ),
];

/// Read access to community content.
///
/// Every method is synchronous and total: fixture content cannot fail by
/// construction. A real backend implementation would surface its own error
/// type at this seam.
pub trait CommunityData {
    /// The home feed's seed posts, newest first.
    fn feed_posts(&self, now_ms: u64) -> Vec<Post>;
    /// The canned comments shown inside an expanded comment panel.
    fn post_comments(&self, now_ms: u64) -> Vec<PostComment>;
    /// The messaging page's contact list.
    fn contacts(&self, now_ms: u64) -> Vec<Contact>;
    /// The fixed conversation fixture for a contact.
    fn conversation(&self, contact_id: &str, viewer_id: &str, now_ms: u64) -> Vec<ChatMessage>;
    /// The notification list, newest first.
    fn notifications(&self, now_ms: u64) -> Vec<Notification>;
    /// Trending posts for the explore page.
    fn trending_posts(&self, now_ms: u64) -> Vec<Post>;
    /// Trending topics for the explore page.
    fn trending_topics(&self) -> Vec<Topic>;
    /// Suggested people for the explore page.
    fn suggested_people(&self) -> Vec<SuggestedPerson>;
    /// Resolve a profile route parameter to a profile.
    fn profile(&self, param: &str, viewer: Option<&User>) -> Profile;
    /// The posts shown on a profile's Posts tab.
    fn profile_posts(&self, param: &str, viewer: Option<&User>, now_ms: u64) -> Vec<Post>;
}

/// The deterministic fixture provider used throughout this scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCommunity;

impl FixtureCommunity {
    /// Create the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn author(id: &str, name: &str, role: &str, avatar: &str) -> PostAuthor {
    PostAuthor {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: Some(avatar.to_string()),
    }
}

fn image(url: &str, alt: &str) -> MediaItem {
    MediaItem {
        kind: MediaKind::Image,
        url: url.to_string(),
        alt: Some(alt.to_string()),
        poster: None,
    }
}

fn sarah() -> PostAuthor {
    author(
        "user1",
        "Sarah Johnson",
        "Traffic Manager",
        "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
    )
}

fn case_study_post(now_ms: u64) -> Post {
    Post {
        id: "post1".to_string(),
        author: sarah(),
        content: "Just published a new case study on our latest campaign that achieved a 250% ROI \
                  for our client in the finance sector. Check it out! #performancemarketing #paidmedia"
            .to_string(),
        timestamp: now_ms.saturating_sub(HOUR_MS),
        likes: 24,
        comments: 5,
        shares: 3,
        media: vec![image(
            "https://images.pexels.com/photos/7947541/pexels-photo-7947541.jpeg",
            "Digital marketing analytics dashboard",
        )],
    }
}

fn hiring_post(now_ms: u64) -> Post {
    Post {
        id: "post2".to_string(),
        author: author(
            "user2",
            "Miguel Lopez",
            "Agency Owner",
            "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg",
        ),
        content: "Looking for experienced affiliate marketers to join our rapidly growing team. \
                  We're expanding our operations in the health and wellness niche. DM me if \
                  interested! #hiring #affiliatemarketing"
            .to_string(),
        timestamp: now_ms.saturating_sub(2 * HOUR_MS),
        likes: 18,
        comments: 12,
        shares: 7,
        media: Vec::new(),
    }
}

fn ad_policy_post(now_ms: u64) -> Post {
    Post {
        id: "post3".to_string(),
        author: author(
            "user3",
            "Priya Patel",
            "Affiliate",
            "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
        ),
        content: "Facebook's new ad policy changes are going to significantly impact how we \
                  target audiences. Here's what you need to know and how to adapt your strategies:"
            .to_string(),
        timestamp: now_ms.saturating_sub(5 * HOUR_MS),
        likes: 56,
        comments: 23,
        shares: 14,
        media: vec![image(
            "https://images.pexels.com/photos/5849592/pexels-photo-5849592.jpeg",
            "Social media marketing on mobile devices",
        )],
    }
}

fn partnership_post(now_ms: u64) -> Post {
    Post {
        id: "post4".to_string(),
        author: author(
            "user4",
            "David Wilson",
            "Influencer",
            "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg",
        ),
        content: "Excited to announce my partnership with @TechBrand for their upcoming product \
                  launch! We've been working on some amazing content that I can't wait to share \
                  with you all. #sponsored #influencermarketing"
            .to_string(),
        timestamp: now_ms.saturating_sub(10 * HOUR_MS),
        likes: 87,
        comments: 16,
        shares: 9,
        media: vec![image(
            "https://images.pexels.com/photos/3182812/pexels-photo-3182812.jpeg",
            "Person working with camera and laptop",
        )],
    }
}

fn actor(name: &str, avatar: &str) -> NotificationActor {
    NotificationActor {
        name: name.to_string(),
        avatar: Some(avatar.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    description: Option<&str>,
    age_ms: u64,
    read: bool,
    actor: Option<NotificationActor>,
    link: &str,
    now_ms: u64,
) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.map(str::to_string),
        timestamp: now_ms.saturating_sub(age_ms),
        read,
        actor,
        link: Some(link.to_string()),
    }
}

fn sarah_profile() -> Profile {
    Profile {
        id: "user1".to_string(),
        name: "Sarah Johnson".to_string(),
        role: "Traffic Manager".to_string(),
        avatar: Some("https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg".to_string()),
        cover: "https://images.pexels.com/photos/7689843/pexels-photo-7689843.jpeg".to_string(),
        bio: "Traffic Manager with 6+ years experience specializing in performance marketing \
              and conversion rate optimization."
            .to_string(),
        location: "New York, NY".to_string(),
        company: "Digital Surge Agency".to_string(),
        website: "https://example.com/sarahjohnson".to_string(),
        joined: "March 2022".to_string(),
        connections: 276,
        followers: 312,
        following: 148,
    }
}

fn own_profile(user: &User) -> Profile {
    Profile {
        id: user.id.clone(),
        name: user.name.clone(),
        role: user.role.label().to_string(),
        avatar: user.avatar.clone(),
        cover: "https://images.pexels.com/photos/3183153/pexels-photo-3183153.jpeg".to_string(),
        bio: user.bio.clone().unwrap_or_else(|| {
            "Performance marketing specialist with expertise in affiliate marketing and paid \
             social campaigns."
                .to_string()
        }),
        location: "San Francisco, CA".to_string(),
        company: "Growth Hackers Inc.".to_string(),
        website: "https://example.com".to_string(),
        joined: "January 2023".to_string(),
        connections: 142,
        followers: 256,
        following: 184,
    }
}

impl CommunityData for FixtureCommunity {
    fn feed_posts(&self, now_ms: u64) -> Vec<Post> {
        vec![
            case_study_post(now_ms),
            hiring_post(now_ms),
            ad_policy_post(now_ms),
        ]
    }

    fn post_comments(&self, now_ms: u64) -> Vec<PostComment> {
        vec![
            PostComment {
                author_name: "Emma Thompson".to_string(),
                avatar: Some(
                    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg".to_string(),
                ),
                text: "Great insights! Would love to hear more about the targeting strategy you used."
                    .to_string(),
                timestamp: now_ms.saturating_sub(3 * HOUR_MS),
            },
            PostComment {
                author_name: "David Wilson".to_string(),
                avatar: Some(
                    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg".to_string(),
                ),
                text: "I've been seeing similar results with our campaigns. Let's connect and \
                       share some notes!"
                    .to_string(),
                timestamp: now_ms.saturating_sub(HOUR_MS),
            },
        ]
    }

    fn contacts(&self, now_ms: u64) -> Vec<Contact> {
        vec![
            Contact {
                id: "contact1".to_string(),
                name: "Sarah Johnson".to_string(),
                avatar: Some(
                    "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg".to_string(),
                ),
                last_message: Some(
                    "Let me know if you need any help with the campaign setup.".to_string(),
                ),
                last_message_time: Some(now_ms.saturating_sub(30 * MINUTE_MS)),
                online: true,
                unread: 2,
            },
            Contact {
                id: "contact2".to_string(),
                name: "Miguel Lopez".to_string(),
                avatar: Some(
                    "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg".to_string(),
                ),
                last_message: Some("The stats for yesterday's campaign look great!".to_string()),
                last_message_time: Some(now_ms.saturating_sub(2 * HOUR_MS)),
                online: false,
                unread: 0,
            },
            Contact {
                id: "contact3".to_string(),
                name: "Priya Patel".to_string(),
                avatar: Some(
                    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg".to_string(),
                ),
                last_message: Some("Can we discuss the new affiliate program tomorrow?".to_string()),
                last_message_time: Some(now_ms.saturating_sub(DAY_MS)),
                online: true,
                unread: 0,
            },
            Contact {
                id: "contact4".to_string(),
                name: "David Wilson".to_string(),
                avatar: Some(
                    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg".to_string(),
                ),
                last_message: Some("Thanks for the introduction to the new platform.".to_string()),
                last_message_time: Some(now_ms.saturating_sub(2 * DAY_MS)),
                online: false,
                unread: 0,
            },
        ]
    }

    fn conversation(&self, contact_id: &str, viewer_id: &str, now_ms: u64) -> Vec<ChatMessage> {
        let message = |id: &str, from_contact: bool, text: &str, age_ms: u64, read: bool| {
            let (sender_id, receiver_id) = if from_contact {
                (contact_id, viewer_id)
            } else {
                (viewer_id, contact_id)
            };
            ChatMessage {
                id: id.to_string(),
                sender_id: sender_id.to_string(),
                receiver_id: receiver_id.to_string(),
                text: text.to_string(),
                timestamp: now_ms.saturating_sub(age_ms),
                read,
            }
        };
        vec![
            message(
                "msg1",
                true,
                "Hey, how are things going with the new campaign?",
                DAY_MS + HOUR_MS,
                true,
            ),
            message(
                "msg2",
                false,
                "It's coming along well! We're seeing good initial results.",
                DAY_MS + 59 * MINUTE_MS,
                true,
            ),
            message(
                "msg3",
                true,
                "That's great to hear! What kind of CTR are you seeing?",
                DAY_MS + 58 * MINUTE_MS,
                true,
            ),
            message(
                "msg4",
                false,
                "Around 3.2% so far, which is about 0.8% higher than our previous benchmark.",
                DAY_MS + 57 * MINUTE_MS,
                true,
            ),
            message(
                "msg5",
                true,
                "Let me know if you need any help with the campaign setup.",
                30 * MINUTE_MS,
                false,
            ),
        ]
    }

    fn notifications(&self, now_ms: u64) -> Vec<Notification> {
        vec![
            notification(
                "notif1",
                NotificationKind::Like,
                "Sarah Johnson liked your post",
                Some(
                    "\"Just published a new case study on our latest campaign that achieved a \
                     250% ROI for our client in the finance sector.\"",
                ),
                30 * MINUTE_MS,
                false,
                Some(actor(
                    "Sarah Johnson",
                    "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
                )),
                "/post/123",
                now_ms,
            ),
            notification(
                "notif2",
                NotificationKind::Comment,
                "Miguel Lopez commented on your post",
                Some(
                    "\"Great insights! Would love to hear more about the targeting strategy you \
                     used.\"",
                ),
                2 * HOUR_MS,
                false,
                Some(actor(
                    "Miguel Lopez",
                    "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg",
                )),
                "/post/123#comments",
                now_ms,
            ),
            notification(
                "notif3",
                NotificationKind::Connection,
                "Priya Patel accepted your connection request",
                None,
                DAY_MS,
                true,
                Some(actor(
                    "Priya Patel",
                    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
                )),
                "/profile/user3",
                now_ms,
            ),
            notification(
                "notif4",
                NotificationKind::Message,
                "New message from David Wilson",
                Some(
                    "\"Hey, I saw your recent campaign and would love to connect about a \
                     potential collaboration.\"",
                ),
                2 * DAY_MS,
                true,
                Some(actor(
                    "David Wilson",
                    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg",
                )),
                "/messages/user4",
                now_ms,
            ),
            notification(
                "notif5",
                NotificationKind::Mention,
                "Emma Thompson mentioned you in a comment",
                Some("\"@JaneSmith would be perfect for this kind of project!\""),
                3 * DAY_MS,
                true,
                Some(actor(
                    "Emma Thompson",
                    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg",
                )),
                "/post/456#comments",
                now_ms,
            ),
            notification(
                "notif6",
                NotificationKind::Achievement,
                "You reached 100+ profile views!",
                Some("Your profile is getting noticed. Keep building your professional brand."),
                4 * DAY_MS,
                true,
                None,
                "/profile/analytics",
                now_ms,
            ),
            notification(
                "notif7",
                NotificationKind::Share,
                "Alex Kim shared your post",
                Some(
                    "\"Check out this insightful analysis of the latest marketing trends by \
                     @JaneSmith\"",
                ),
                5 * DAY_MS,
                true,
                Some(actor(
                    "Alex Kim",
                    "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg",
                )),
                "/post/shared/789",
                now_ms,
            ),
            notification(
                "notif8",
                NotificationKind::Opportunity,
                "New job opportunity that matches your profile",
                Some("Senior Traffic Manager at Digital Growth Agency"),
                6 * DAY_MS,
                true,
                None,
                "/jobs/123",
                now_ms,
            ),
        ]
    }

    fn trending_posts(&self, now_ms: u64) -> Vec<Post> {
        vec![
            case_study_post(now_ms),
            hiring_post(now_ms),
            ad_policy_post(now_ms),
            partnership_post(now_ms),
        ]
    }

    fn trending_topics(&self) -> Vec<Topic> {
        let topic = |id: &str, name: &str, post_count: u32| Topic {
            id: id.to_string(),
            name: name.to_string(),
            post_count,
        };
        vec![
            topic("topic1", "Performance Marketing", 342),
            topic("topic2", "AI in Advertising", 265),
            topic("topic3", "TikTok Strategy", 189),
            topic("topic4", "Affiliate Programs", 156),
            topic("topic5", "Data Privacy", 143),
            topic("topic6", "Conversion Optimization", 124),
        ]
    }

    fn suggested_people(&self) -> Vec<SuggestedPerson> {
        let person = |id: &str, name: &str, role: &str, avatar: &str, followers: u32| {
            SuggestedPerson {
                id: id.to_string(),
                name: name.to_string(),
                role: role.to_string(),
                avatar: Some(avatar.to_string()),
                followers,
            }
        };
        vec![
            person(
                "user5",
                "Emma Thompson",
                "SEO Specialist",
                "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg",
                3245,
            ),
            person(
                "user6",
                "Alex Kim",
                "Digital Marketing Director",
                "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg",
                8732,
            ),
            person(
                "user7",
                "Sophia Rodriguez",
                "Influencer Manager",
                "https://images.pexels.com/photos/1036623/pexels-photo-1036623.jpeg",
                5621,
            ),
        ]
    }

    fn profile(&self, param: &str, viewer: Option<&User>) -> Profile {
        match viewer {
            Some(user) if is_own_profile(param, Some(&user.id)) => own_profile(user),
            _ => sarah_profile(),
        }
    }

    fn profile_posts(&self, param: &str, viewer: Option<&User>, now_ms: u64) -> Vec<Post> {
        match viewer {
            Some(user) if is_own_profile(param, Some(&user.id)) => {
                let me = PostAuthor {
                    id: user.id.clone(),
                    name: user.name.clone(),
                    role: user.role.label().to_string(),
                    avatar: user.avatar.clone(),
                };
                vec![
                    Post {
                        id: "post101".to_string(),
                        author: me.clone(),
                        content: "Just launched our newest campaign for a major e-commerce \
                                  client. Seeing incredible CTRs already! #digitalmarketing \
                                  #success"
                            .to_string(),
                        timestamp: now_ms.saturating_sub(DAY_MS),
                        likes: 37,
                        comments: 8,
                        shares: 5,
                        media: vec![image(
                            "https://images.pexels.com/photos/7654053/pexels-photo-7654053.jpeg",
                            "Digital marketing dashboard with analytics",
                        )],
                    },
                    Post {
                        id: "post102".to_string(),
                        author: me,
                        content: "Attended an amazing workshop on advanced targeting techniques \
                                  today. So many new ideas to implement! Who else is exploring \
                                  custom audience segmentation? Would love to connect."
                            .to_string(),
                        timestamp: now_ms.saturating_sub(2 * DAY_MS),
                        likes: 24,
                        comments: 11,
                        shares: 2,
                        media: Vec::new(),
                    },
                ]
            }
            _ => vec![
                Post {
                    id: "post201".to_string(),
                    author: sarah(),
                    content: case_study_post(now_ms).content,
                    timestamp: now_ms.saturating_sub(HOUR_MS),
                    likes: 24,
                    comments: 5,
                    shares: 3,
                    media: vec![image(
                        "https://images.pexels.com/photos/7947541/pexels-photo-7947541.jpeg",
                        "Digital marketing analytics dashboard",
                    )],
                },
                Post {
                    id: "post202".to_string(),
                    author: sarah(),
                    content: "Excited to be speaking at the Digital Marketing Summit next month! \
                              Will be covering advanced targeting strategies for e-commerce. Who \
                              else will be attending? #dmsummit #speakingevent"
                        .to_string(),
                    timestamp: now_ms.saturating_sub(3 * DAY_MS),
                    likes: 46,
                    comments: 18,
                    shares: 7,
                    media: Vec::new(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserRole;

    const NOW_MS: u64 = 1_700_000_000_000;

    fn provider() -> FixtureCommunity {
        FixtureCommunity::new()
    }

    fn viewer() -> User {
        User {
            id: "user123".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            role: UserRole::Affiliate,
            avatar: None,
            bio: None,
            connections: Some(142),
        }
    }

    #[test]
    fn test_feed_fixture_shape() {
        let posts = provider().feed_posts(NOW_MS);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, "post1");
        assert_eq!(posts[0].author.name, "Sarah Johnson");
        assert_eq!(posts[0].timestamp, NOW_MS - 60 * 60 * 1000);
        assert!(posts[1].media.is_empty());
        assert_eq!(posts[2].likes, 56);
    }

    #[test]
    fn test_trending_extends_feed() {
        let trending = provider().trending_posts(NOW_MS);
        assert_eq!(trending.len(), 4);
        assert_eq!(trending[3].id, "post4");
        assert_eq!(trending[3].author.role, "Influencer");
    }

    #[test]
    fn test_conversation_is_parameterized_by_participants() {
        let messages = provider().conversation("contact2", "user123", NOW_MS);
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].sender_id, "contact2");
        assert_eq!(messages[0].receiver_id, "user123");
        assert_eq!(messages[1].sender_id, "user123");
        // The last fixture message is the contact's unread preview line
        assert!(!messages[4].read);
        assert_eq!(
            messages[4].text,
            "Let me know if you need any help with the campaign setup."
        );
    }

    #[test]
    fn test_contacts_unread_distribution() {
        let contacts = provider().contacts(NOW_MS);
        assert_eq!(contacts.len(), 4);
        assert_eq!(contacts[0].unread, 2);
        assert!(contacts.iter().skip(1).all(|c| c.unread == 0));
    }

    #[test]
    fn test_notifications_fixture_shape() {
        let items = provider().notifications(NOW_MS);
        assert_eq!(items.len(), 8);
        assert_eq!(items.iter().filter(|n| !n.read).count(), 2);
        assert_eq!(items[7].kind, NotificationKind::Opportunity);
        assert!(items[5].actor.is_none());
    }

    #[test]
    fn test_profile_me_resolves_to_viewer() {
        let user = viewer();
        let profile = provider().profile("me", Some(&user));
        assert_eq!(profile.id, "user123");
        assert_eq!(profile.name, "Jane Smith");
        // Fixture defaults fill what the session record lacks
        assert_eq!(profile.location, "San Francisco, CA");
        assert!(profile.bio.starts_with("Performance marketing specialist"));
    }

    #[test]
    fn test_profile_other_id_resolves_to_fixture() {
        let user = viewer();
        let profile = provider().profile("user1", Some(&user));
        assert_eq!(profile.name, "Sarah Johnson");
        assert_eq!(profile.connections, 276);

        // Signed out, every parameter resolves to the fixture
        let anonymous = provider().profile("me", None);
        assert_eq!(anonymous.name, "Sarah Johnson");
    }

    #[test]
    fn test_profile_posts_follow_ownership() {
        let user = viewer();
        let own = provider().profile_posts("me", Some(&user), NOW_MS);
        assert_eq!(own.len(), 2);
        assert_eq!(own[0].author.id, "user123");

        let theirs = provider().profile_posts("user1", Some(&user), NOW_MS);
        assert_eq!(theirs[0].id, "post201");
        assert_eq!(theirs[0].author.name, "Sarah Johnson");
    }
}
