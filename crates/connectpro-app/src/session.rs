//! # Session Core
//!
//! The current-user record, the durable-storage seam, and the four session
//! operations (login, register, logout, update). Persistence is centralized
//! here: frontends provide a [`SessionStore`] backed by whatever durable
//! key-value storage the platform offers, and every mutation flows through
//! [`SessionManager`] so no other component touches storage directly.
//!
//! The manager is deliberately free of timers and reactive state. Frontends
//! own the loading/authenticated flags and any simulated latency; the core
//! stays synchronous so the whole lifecycle is testable with [`MemoryStore`].

use crate::errors::SessionError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use uuid::Uuid;

/// Professional role attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Affiliate marketer
    Affiliate,
    /// Paid-media traffic manager
    #[serde(rename = "Traffic Manager")]
    TrafficManager,
    /// Marketing agency
    Agency,
    /// Company / brand account
    Company,
    /// Influencer
    Influencer,
}

impl UserRole {
    /// All roles, in enumeration order.
    pub const ALL: [UserRole; 5] = [
        UserRole::Affiliate,
        UserRole::TrafficManager,
        UserRole::Agency,
        UserRole::Company,
        UserRole::Influencer,
    ];

    /// Display label for this role.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Affiliate => "Affiliate",
            Self::TrafficManager => "Traffic Manager",
            Self::Agency => "Agency",
            Self::Company => "Company",
            Self::Influencer => "Influencer",
        }
    }

    /// Parse a role from its display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }

    /// The default role for accounts that did not pick one.
    #[must_use]
    pub fn default_role() -> Self {
        Self::Affiliate
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The signed-in user record, mirrored to durable storage on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this session's user
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Professional role
    pub role: UserRole,
    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// Short profile bio
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bio: Option<String>,
    /// Connection count shown on the profile
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub connections: Option<u32>,
}

impl User {
    /// The demo account fabricated by the stubbed login flow.
    ///
    /// The entered email is preserved; everything else is fixed profile
    /// content.
    #[must_use]
    pub fn demo(email: &str) -> Self {
        Self {
            id: "user123".to_string(),
            name: "Jane Smith".to_string(),
            email: email.to_string(),
            role: UserRole::Affiliate,
            avatar: Some(
                "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg".to_string(),
            ),
            bio: Some(
                "Performance marketing specialist with 5+ years of experience in affiliate marketing and paid social."
                    .to_string(),
            ),
            connections: Some(142),
        }
    }
}

/// Input for account registration.
#[derive(Debug, Clone, Default)]
pub struct NewAccount {
    /// Display name; defaults to "New User" when empty
    pub name: String,
    /// Contact email
    pub email: String,
    /// Password (never stored; only checked for presence)
    pub password: String,
    /// Chosen role; defaults to the first enumerated role
    pub role: Option<UserRole>,
}

/// Partial update merged into the current user.
///
/// `Some` fields replace the current value; `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New display name
    pub name: Option<String>,
    /// New contact email
    pub email: Option<String>,
    /// New role
    pub role: Option<UserRole>,
    /// New avatar URL
    pub avatar: Option<String>,
    /// New bio
    pub bio: Option<String>,
    /// New connection count
    pub connections: Option<u32>,
}

impl UserUpdate {
    /// Apply this update to a user, returning the merged record.
    #[must_use]
    pub fn merge_into(self, user: &User) -> User {
        User {
            id: user.id.clone(),
            name: self.name.unwrap_or_else(|| user.name.clone()),
            email: self.email.unwrap_or_else(|| user.email.clone()),
            role: self.role.unwrap_or(user.role),
            avatar: self.avatar.or_else(|| user.avatar.clone()),
            bio: self.bio.or_else(|| user.bio.clone()),
            connections: self.connections.or(user.connections),
        }
    }
}

/// Durable key-value slot for the serialized session record.
///
/// Implementations are dumb adapters: parsing, validation, and corrupt-record
/// recovery all live in [`SessionManager`].
pub trait SessionStore {
    /// Read the raw persisted record, if any.
    fn read(&self) -> Option<String>;
    /// Overwrite the persisted record.
    fn write(&self, raw: &str);
    /// Remove the persisted record. Must be a no-op when nothing is stored.
    fn clear(&self);
}

/// In-memory [`SessionStore`] for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw record.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, raw: &str) {
        *self.slot.borrow_mut() = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// The four session operations plus startup rehydration.
///
/// Owns all reads and writes of the durable record. Login and registration
/// return the fabricated user; the caller decides what reactive state to
/// derive from it.
pub struct SessionManager<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    /// Wrap a storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rehydrate the persisted session, if one exists.
    ///
    /// A record that fails to parse is logged, discarded, and treated as
    /// "no session"; the user never sees the failure.
    pub fn restore(&self) -> Option<User> {
        let raw = self.store.read()?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("discarding corrupt session record: {err}");
                self.store.clear();
                None
            }
        }
    }

    /// Authenticate and fabricate the demo user record.
    ///
    /// Empty credentials are rejected; anything else succeeds. The record is
    /// persisted before it is returned.
    pub fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }
        let user = User::demo(email.trim());
        self.persist(&user);
        Ok(user)
    }

    /// Create an account and sign it in.
    ///
    /// Synthesizes a unique id, defaults the name to "New User" and the role
    /// to the first enumerated value, and starts the connection count at 0.
    pub fn register(&self, account: NewAccount) -> Result<User, SessionError> {
        if account.email.trim().is_empty() || account.password.is_empty() {
            return Err(SessionError::RegistrationFailed);
        }
        let name = account.name.trim();
        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            name: if name.is_empty() {
                "New User".to_string()
            } else {
                name.to_string()
            },
            email: account.email.trim().to_string(),
            role: account.role.unwrap_or_else(UserRole::default_role),
            avatar: None,
            bio: None,
            connections: Some(0),
        };
        self.persist(&user);
        Ok(user)
    }

    /// Clear the persisted record. Idempotent.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Merge an update into the current user and re-persist.
    pub fn update(&self, user: &User, update: UserUpdate) -> User {
        let merged = update.merge_into(user);
        self.persist(&merged);
        merged
    }

    fn persist(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.store.write(&raw),
            Err(err) => log::error!("failed to serialize session record: {err}"),
        }
    }
}

/// What the route guard renders for the current session state.
///
/// `Loading` always wins: while an authentication call is pending, neither
/// the login page nor the shell may render. Once settled, the presence of a
/// user is the only input, regardless of the requested path. The only
/// transitions are `Loading` settling once and `SignedIn` dropping to
/// `SignedOut` on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// An authentication call is in flight; render a placeholder.
    Loading,
    /// No session; redirect to the login page.
    SignedOut,
    /// Session present; render the application shell.
    SignedIn,
}

impl GuardState {
    /// Resolve the guard from the session's loading flag and user presence.
    #[must_use]
    pub fn resolve(loading: bool, signed_in: bool) -> Self {
        if loading {
            Self::Loading
        } else if signed_in {
            Self::SignedIn
        } else {
            Self::SignedOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager<MemoryStore> {
        SessionManager::new(MemoryStore::new())
    }

    #[test]
    fn test_guard_loading_masks_both_outcomes() {
        assert_eq!(GuardState::resolve(true, false), GuardState::Loading);
        assert_eq!(GuardState::resolve(true, true), GuardState::Loading);
        assert_eq!(GuardState::resolve(false, false), GuardState::SignedOut);
        assert_eq!(GuardState::resolve(false, true), GuardState::SignedIn);
    }

    #[test]
    fn test_guard_follows_the_session_lifecycle() {
        let manager = manager();

        // Fresh start: nothing to restore, every path lands on login
        assert_eq!(
            GuardState::resolve(false, manager.restore().is_some()),
            GuardState::SignedOut
        );

        // Signed in: the shell renders, never the login page
        manager.login("jane@example.com", "hunter2").unwrap();
        assert_eq!(
            GuardState::resolve(false, manager.restore().is_some()),
            GuardState::SignedIn
        );

        // Logout drops straight back to the login redirect
        manager.logout();
        assert_eq!(
            GuardState::resolve(false, manager.restore().is_some()),
            GuardState::SignedOut
        );
    }

    #[test]
    fn test_login_persists_retrievable_record() {
        let manager = manager();
        let user = manager.login("jane@example.com", "hunter2").unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.role, UserRole::Affiliate);

        let restored = manager.restore().unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_login_rejects_empty_credentials() {
        let manager = manager();
        assert_eq!(
            manager.login("", "hunter2"),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(
            manager.login("jane@example.com", ""),
            Err(SessionError::InvalidCredentials)
        );
        assert!(manager.restore().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let manager = manager();
        manager.login("jane@example.com", "hunter2").unwrap();
        manager.logout();
        assert!(manager.restore().is_none());
        // Second logout with nothing stored behaves identically
        manager.logout();
        assert!(manager.restore().is_none());
    }

    #[test]
    fn test_corrupt_record_discarded() {
        let store = MemoryStore::with_raw("{not json");
        let manager = SessionManager::new(store);
        assert!(manager.restore().is_none());
        // The corrupt record is gone, not just ignored
        assert!(manager.restore().is_none());
    }

    #[test]
    fn test_register_defaults() {
        let manager = manager();
        let user = manager
            .register(NewAccount {
                name: "   ".to_string(),
                email: "new@example.com".to_string(),
                password: "pw".to_string(),
                role: None,
            })
            .unwrap();
        assert_eq!(user.name, "New User");
        assert_eq!(user.role, UserRole::Affiliate);
        assert_eq!(user.connections, Some(0));
        assert!(user.id.starts_with("user-"));
    }

    #[test]
    fn test_register_unique_ids() {
        let manager = manager();
        let account = NewAccount {
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
            role: Some(UserRole::Agency),
        };
        let first = manager.register(account.clone()).unwrap();
        let second = manager.register(account).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.role, UserRole::Agency);
    }

    #[test]
    fn test_register_rejects_missing_fields() {
        let manager = manager();
        let result = manager.register(NewAccount {
            name: "A".to_string(),
            email: String::new(),
            password: "pw".to_string(),
            role: None,
        });
        assert_eq!(result, Err(SessionError::RegistrationFailed));
    }

    #[test]
    fn test_update_merges_and_persists() {
        let manager = manager();
        let user = manager.login("jane@example.com", "hunter2").unwrap();
        let updated = manager.update(
            &user,
            UserUpdate {
                bio: Some("Updated bio".to_string()),
                connections: Some(143),
                ..UserUpdate::default()
            },
        );
        assert_eq!(updated.bio.as_deref(), Some("Updated bio"));
        assert_eq!(updated.connections, Some(143));
        assert_eq!(updated.name, user.name);

        let restored = manager.restore().unwrap();
        assert_eq!(restored, updated);
    }

    #[test]
    fn test_role_labels_round_trip() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::from_label(role.label()), Some(role));
        }
        assert_eq!(UserRole::from_label("Growth Wizard"), None);
    }

    #[test]
    fn test_role_serde_uses_display_labels() {
        let json = serde_json::to_string(&UserRole::TrafficManager).unwrap();
        assert_eq!(json, "\"Traffic Manager\"");
        let parsed: UserRole = serde_json::from_str("\"Traffic Manager\"").unwrap();
        assert_eq!(parsed, UserRole::TrafficManager);
    }

    #[test]
    fn test_record_omits_absent_optionals() {
        let user = User {
            id: "user-1".to_string(),
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            role: UserRole::Company,
            avatar: None,
            bio: None,
            connections: None,
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert!(!raw.contains("avatar"));
        assert!(!raw.contains("bio"));
        let parsed: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, user);
    }
}
