//! ConnectPro App - Portable Application Core
//!
//! This crate is the headless core of the ConnectPro networking client for
//! marketing professionals. It holds everything the product does that is
//! not rendering: session lifecycle and persistence, feed and messaging
//! state transitions, notification bookkeeping, explore filtering, the
//! campaign pricing simulator's wire contract, and the fixture content the
//! client ships with.
//!
//! # Architecture
//!
//! The crate is UI-toolkit free so the same logic can back any frontend:
//! - `session` owns authentication state behind a [`SessionStore`] seam
//! - `data` exposes community content behind the [`CommunityData`] seam
//! - `views` holds per-page state machines with plain mutation methods
//! - `simulator` owns the one real network contract, minus the transport
//! - `format` renders currency and relative-time labels
//!
//! The companion `connectpro-web` crate mounts these onto Leptos signals
//! and supplies browser-backed implementations of the two seams.
//!
//! # Example
//!
//! ```ignore
//! use connectpro_app::session::{MemoryStore, SessionManager};
//!
//! let mut sessions = SessionManager::new(MemoryStore::new());
//! let user = sessions.login("jane@example.com", "hunter2")?;
//! assert_eq!(user.name, "Jane Smith");
//!
//! // A later start of the app rehydrates the same record
//! assert!(sessions.restore().is_some());
//! ```

pub mod data;
pub mod errors;
pub mod format;
pub mod session;
pub mod simulator;
pub mod views;

// Re-export primary types
pub use data::{CommunityData, FixtureCommunity};
pub use errors::{SessionError, SimulationError};
pub use session::{
    GuardState, MemoryStore, NewAccount, SessionManager, SessionStore, User, UserRole, UserUpdate,
};
pub use simulator::{
    recommend, MarketConfig, PricePrediction, PricingModel, PricingRecommendation, SimulationCache,
    SimulatorForm,
};
pub use views::{
    ExploreState, FeedState, LikeState, MessagesState, NotificationFilter, NotificationsState,
    Post, PostDraft,
};
