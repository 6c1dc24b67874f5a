//! Auth context handed to the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`AuthContext`] and provides it alongside the reactive
//! `RwSignal<AuthState>` the store publishes into. Pages call the methods
//! here; they never reach the store or the cache themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::transport::FetchTransport;
use crate::net::types::{Credentials, RegisterRequest};
use crate::routing::{Navigator, NavState, RouterNavigator};
use crate::session::{LocalStorageCache, Session, SessionStore, UserData};
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::toasts::{ToastNotifier, ToastState};

#[derive(Clone)]
pub struct AuthContext {
    store: Arc<SessionStore>,
    api: Arc<ApiClient>,
    navigator: Arc<dyn Navigator>,
}

impl AuthContext {
    pub fn new(store: Arc<SessionStore>, api: Arc<ApiClient>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, api, navigator }
    }

    /// Browser wiring: localStorage cache, fetch transport, toast notices and
    /// router redirects. The store publishes every state change into `auth`.
    pub fn browser(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, nav: RwSignal<NavState>) -> Self {
        let store = Arc::new(SessionStore::new(Arc::new(LocalStorageCache::default())));
        let navigator: Arc<dyn Navigator> = Arc::new(RouterNavigator::new(nav));
        let api = Arc::new(ApiClient::new(
            ApiConfig::resolve(),
            Arc::new(FetchTransport),
            store.clone(),
            Arc::new(ToastNotifier::new(toasts)),
            navigator.clone(),
        ));
        store.set_listener(move |state| {
            let _ = auth.try_set(state.clone());
        });
        Self::new(store, api, navigator)
    }

    /// Leave the loading phase from the durable cache. Idempotent.
    pub fn hydrate(&self) -> AuthPhase {
        self.store.hydrate()
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.store.session()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.state().loading
    }

    /// Derived from the session; never stored separately.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// # Errors
    ///
    /// Backend or session-level [`ApiError`]; the session is unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let credentials = Credentials { email: email.trim().to_owned(), password: password.to_owned() };
        self.store.login(self.api.as_ref(), &credentials).await
    }

    /// # Errors
    ///
    /// Backend or session-level [`ApiError`]; the session is unchanged.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        self.store.register(self.api.as_ref(), request).await
    }

    /// # Errors
    ///
    /// Backend or session-level [`ApiError`]; the session is unchanged.
    pub async fn complete_google_login(&self, query: &str) -> Result<Session, ApiError> {
        self.store.complete_oauth(self.api.as_ref(), query).await
    }

    /// Drop the session and send the router to login.
    pub fn logout(&self) {
        self.navigator.redirect(self.store.logout());
    }

    /// # Errors
    ///
    /// [`ApiError::NoActiveSession`], [`ApiError::ConcurrentMutation`] or the
    /// backend error.
    pub async fn update_profile(&self, partial: UserData) -> Result<Session, ApiError> {
        self.store.update_profile(self.api.as_ref(), partial).await
    }

    /// # Errors
    ///
    /// Same as [`AuthContext::update_profile`].
    pub async fn refresh_profile(&self) -> Result<Session, ApiError> {
        self.store.refresh_profile(self.api.as_ref()).await
    }

    /// Gateway for non-session endpoints (events, orders, passwords).
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
