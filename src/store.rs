//! Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session is
//! mirrored to `localStorage` so a reload keeps the user signed in.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, warn};

use crm_core::Session;

/// `localStorage` key for the persisted session
pub const SESSION_KEY: &str = "han-crm-session";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AuthState {
    /// `None` until login, cleared at logout
    pub session: Option<Session>,
}

impl AuthState {
    /// State restored from the previous visit
    pub fn restore() -> Self {
        Self { session: load_session() }
    }
}

/// Type alias for the store
pub type AuthStore = Store<AuthState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the session and persist it
pub fn store_set_session(store: &AuthStore, session: Session) {
    save_session(Some(&session));
    store.session().set(Some(session));
}

/// Drop the session from memory and storage
pub fn store_clear_session(store: &AuthStore) {
    save_session(None);
    store.session().set(None);
}

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

fn load_session() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(error = %err, "discarding unreadable stored session");
            None
        }
    }
}

fn save_session(session: Option<&Session>) {
    let Some(storage) = storage() else {
        warn!("localStorage unavailable, session not persisted");
        return;
    };
    let result = match session.map(serde_json::to_string) {
        Some(Ok(raw)) => storage.set_item(SESSION_KEY, &raw),
        Some(Err(err)) => {
            warn!(error = %err, "session not serializable");
            return;
        }
        None => storage.remove_item(SESSION_KEY),
    };
    if result.is_err() {
        warn!("writing session to localStorage failed");
    } else {
        debug!(signed_in = session.is_some(), "session persisted");
    }
}
