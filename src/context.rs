//! Application Context
//!
//! Session access and API client construction, provided via the Leptos
//! Context API.

use leptos::prelude::*;

use crm_core::api::ApiClient;
use crm_core::permissions::{visible_nav, NavItem};
use crm_core::{AppConfig, PermissionSet, ResourceGate, Session};

use crate::store::{store_clear_session, store_set_session, AuthStateStoreFields, AuthStore};

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: AuthStore,
    config: StoredValue<AppConfig>,
}

impl AuthContext {
    pub fn new(store: AuthStore, config: AppConfig) -> Self {
        Self { store, config: StoredValue::new(config) }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn session(&self) -> Option<Session> {
        self.store.session().get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.session().with(Option::is_some)
    }

    /// Client carrying the current bearer token (untracked)
    pub fn client(&self) -> ApiClient {
        let token = self.store.session().with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        let base = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(base).with_token(token)
    }

    /// Anonymous client for public pages
    pub fn public_client(&self) -> ApiClient {
        ApiClient::new(self.config.with_value(|c| c.api_base_url.clone()))
    }

    pub fn permissions(&self) -> PermissionSet {
        self.store
            .session()
            .with(|s| s.as_ref().map(Session::permissions).unwrap_or_default())
    }

    pub fn has_permission(&self, token: &str) -> bool {
        self.store
            .session()
            .with(|s| s.as_ref().is_some_and(|s| s.has_permission(token)))
    }

    pub fn gate(&self, resource: &str) -> ResourceGate {
        ResourceGate::new(&self.permissions(), resource)
    }

    pub fn navigation(&self) -> Vec<NavItem> {
        visible_nav(&self.permissions())
    }

    pub fn sign_in(&self, session: Session) {
        store_set_session(&self.store, session);
    }

    pub fn sign_out(&self) {
        store_clear_session(&self.store);
    }
}

/// Get the auth context provided by `App`
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
