//! Session service: the signed-in user as reactive state, persisted through
//! the session manager into `localStorage`.

use connectpro_app::{NewAccount, SessionError, SessionManager, SessionStore, User, UserUpdate};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// `localStorage` key holding the serialized user record.
const SESSION_KEY: &str = "user";

/// Simulated latency for the stubbed login and registration calls.
const AUTH_LATENCY_MS: u32 = 1000;

/// [`SessionStore`] backed by `window.localStorage`.
///
/// Storage can be unavailable (private browsing, sandboxed frames); reads
/// then restore nothing and writes are logged and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserStore {
    fn read(&self) -> Option<String> {
        local_storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn write(&self, raw: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(SESSION_KEY, raw) {
                    log::warn!("failed to persist session record: {err:?}");
                }
            }
            None => log::warn!("localStorage unavailable, session will not survive reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

/// Session service provided in context at the application root.
///
/// Construction rehydrates any persisted session synchronously, so the first
/// router pass already knows whether the user is signed in.
#[derive(Clone, Copy)]
pub struct SessionService {
    manager: StoredValue<SessionManager<BrowserStore>>,
    user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
}

impl SessionService {
    pub fn new() -> Self {
        let manager = SessionManager::new(BrowserStore);
        let restored = manager.restore();
        if let Some(user) = &restored {
            log::info!("restored session for {}", user.email);
        }
        Self {
            manager: StoredValue::new(manager),
            user: RwSignal::new(restored),
            loading: RwSignal::new(false),
        }
    }

    /// The signed-in user, `None` when signed out.
    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    /// Whether an authentication call is in flight.
    pub fn loading(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    /// Stubbed login with simulated latency.
    pub async fn login(&self, email: String, password: String) -> Result<User, SessionError> {
        self.loading.set(true);
        TimeoutFuture::new(AUTH_LATENCY_MS).await;
        let result = self.manager.with_value(|m| m.login(&email, &password));
        if let Ok(user) = &result {
            log::info!("signed in as {}", user.email);
            self.user.set(Some(user.clone()));
        }
        self.loading.set(false);
        result
    }

    /// Stubbed registration with simulated latency.
    pub async fn register(&self, account: NewAccount) -> Result<User, SessionError> {
        self.loading.set(true);
        TimeoutFuture::new(AUTH_LATENCY_MS).await;
        let result = self.manager.with_value(|m| m.register(account));
        if let Ok(user) = &result {
            log::info!("registered account for {}", user.email);
            self.user.set(Some(user.clone()));
        }
        self.loading.set(false);
        result
    }

    /// Sign out and clear the persisted record.
    pub fn logout(&self) {
        self.manager.with_value(|m| m.logout());
        self.user.set(None);
        log::info!("signed out");
    }

    /// Merge a profile update into the signed-in user and re-persist.
    #[allow(dead_code)]
    pub fn update_user(&self, update: UserUpdate) {
        let Some(current) = self.user.get_untracked() else {
            return;
        };
        let merged = self.manager.with_value(|m| m.update(&current, update));
        self.user.set(Some(merged));
    }
}

/// Hook for using the session service
pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionService must be provided in context")
}
