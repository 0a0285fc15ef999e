//! Session store
//!
//! Holds the token pair and the serialized user profile under three fixed keys
//! of a [`SessionStorage`] backend. Every write is followed by a snapshot
//! published on a `watch` channel, so consumers (navigation, dashboard,
//! breadcrumb, the console prompt) see login and logout consistently instead
//! of each re-reading raw storage.
//!
//! Reads never fail: a cached user that cannot be parsed is logged and treated
//! as "no session".

use crate::error::{AmsError, Result};
use crate::types::{Role, UserProfile};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// String key/value backend, the analogue of browser `sessionStorage`.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: String);
    fn remove_item(&self, key: &str);
}

/// Process-scoped in-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: String) {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value);
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
    }
}

/// Tokens returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    /// Empty when the server did not issue one
    pub refresh_token: String,
}

impl SessionTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.unwrap_or_default(),
        }
    }
}

/// Snapshot published to subscribers after every change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}

impl SessionState {
    /// Role of the cached user, `Guest` without one.
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Guest, |u| u.role)
    }
}

/// Application session context.
///
/// Shared via `Arc` between the gateway client (which reads the access token)
/// and every view that needs authorization data.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    tx: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Create a store over an existing backend; the initial snapshot is read
    /// from whatever the backend already holds.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let initial = read_state(storage.as_ref());
        let (tx, _rx) = watch::channel(initial);
        Self { storage, tx }
    }

    /// Create a store backed by fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Persist tokens and user, then notify subscribers.
    ///
    /// All keys are written before the notification goes out. Passing no user
    /// removes any profile left from an earlier session.
    pub fn set_session(&self, tokens: SessionTokens, user: Option<&UserProfile>) -> Result<()> {
        let serialized_user = user
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| AmsError::Session(format!("Failed to serialize user: {}", e)))?;

        self.storage
            .set_item(ACCESS_TOKEN_KEY, tokens.access_token);
        self.storage
            .set_item(REFRESH_TOKEN_KEY, tokens.refresh_token);
        match serialized_user {
            Some(json) => self.storage.set_item(USER_KEY, json),
            None => self.storage.remove_item(USER_KEY),
        }

        let state = self.publish();
        info!(role = %state.role(), "Session established");
        Ok(())
    }

    /// Access token, if one is stored and non-empty.
    pub fn access_token(&self) -> Option<String> {
        self.storage
            .get_item(ACCESS_TOKEN_KEY)
            .filter(|t| !t.is_empty())
    }

    /// Refresh token, if one is stored and non-empty.
    pub fn refresh_token(&self) -> Option<String> {
        self.storage
            .get_item(REFRESH_TOKEN_KEY)
            .filter(|t| !t.is_empty())
    }

    /// Cached user profile, or `None` when absent or unreadable.
    pub fn user(&self) -> Option<UserProfile> {
        read_user(self.storage.as_ref())
    }

    /// Current role, `Guest` without a readable user.
    pub fn role(&self) -> Role {
        self.user().map_or(Role::Guest, |u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Remove all three keys and notify subscribers.
    pub fn clear(&self) {
        self.storage.remove_item(ACCESS_TOKEN_KEY);
        self.storage.remove_item(REFRESH_TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
        self.publish();
        info!("Session cleared");
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Observe every login/logout.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    fn publish(&self) -> SessionState {
        let state = read_state(self.storage.as_ref());
        debug!(authenticated = state.authenticated, "Publishing session state");
        self.tx.send_replace(state.clone());
        state
    }
}

fn read_user(storage: &dyn SessionStorage) -> Option<UserProfile> {
    let raw = storage.get_item(USER_KEY)?;
    match serde_json::from_str::<UserProfile>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!(error = %e, "Error parsing stored user data");
            None
        }
    }
}

fn read_state(storage: &dyn SessionStorage) -> SessionState {
    SessionState {
        authenticated: storage
            .get_item(ACCESS_TOKEN_KEY)
            .is_some_and(|t| !t.is_empty()),
        user: read_user(storage),
    }
}
