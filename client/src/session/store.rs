//! Session store: sole owner of the session and its durable cache.
//!
//! ARCHITECTURE
//! ============
//! `Loading` is the initial phase and is left exactly once, by `hydrate`.
//! After that, every mutation (login, registration, OAuth callback, profile
//! update) holds a [`MutationGuard`]; a second mutation started while one is
//! in flight fails fast with [`ApiError::ConcurrentMutation`] rather than
//! racing it to the cache. Logout and expiry never wait for the slot: they
//! apply immediately and bump the session epoch, and a mutation that started
//! under an older epoch is discarded with [`ApiError::NoActiveSession`] when
//! its request returns.
//!
//! Each state change is written to the cache before listeners are told, so a
//! reload at any point reconstructs what the UI last showed.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::cache::DurableCache;
use super::model::{Session, UserData};
use crate::error::ApiError;
use crate::net::http::SessionHandle;
use crate::net::types::{AuthResponse, Credentials, RegisterRequest};
use crate::routing::AuthRedirect;
use crate::state::auth::{AuthPhase, AuthState};

/// Backend operations the store delegates to. Implemented by the API client.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    /// Exchange the OAuth provider's callback query string for an identity.
    async fn oauth_callback(&self, query: &str) -> Result<AuthResponse, ApiError>;
    async fn fetch_profile(&self) -> Result<UserData, ApiError>;
    /// Send `partial` and return the profile fields the backend echoes back.
    async fn update_profile(&self, partial: &UserData) -> Result<UserData, ApiError>;
}

type Listener = Box<dyn Fn(&AuthState) + Send + Sync>;

#[derive(Debug, Default)]
struct StoreInner {
    session: Option<Session>,
    hydrated: bool,
    mutating: bool,
    /// Bumped by every logout and expiry.
    epoch: u64,
}

pub struct SessionStore {
    cache: Arc<dyn DurableCache>,
    inner: Mutex<StoreInner>,
    listener: Mutex<Option<Listener>>,
}

/// Exclusive right to mutate the session; released on drop.
pub struct MutationGuard<'a> {
    store: &'a SessionStore,
    epoch: u64,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.store.lock().mutating = false;
    }
}

impl SessionStore {
    pub fn new(cache: Arc<dyn DurableCache>) -> Self {
        Self { cache, inner: Mutex::new(StoreInner::default()), listener: Mutex::new(None) }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register the single state listener and replay the current state to it.
    pub fn set_listener(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) {
        *self.listener.lock().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(listener));
        self.publish();
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        let inner = self.lock();
        AuthState { session: inner.session.clone(), loading: !inner.hydrated }
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    /// Read the durable cache once and leave `Loading`.
    ///
    /// An invalid record is deleted and the store starts unauthenticated.
    /// Later calls return the current phase without touching the cache.
    pub fn hydrate(&self) -> AuthPhase {
        if self.lock().hydrated {
            return self.snapshot().phase();
        }

        let restored = self.cache.read().and_then(|raw| match Session::from_cache_record(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("discarding cached session: {e}");
                self.cache.clear();
                None
            }
        });

        {
            let mut inner = self.lock();
            inner.session = restored;
            inner.hydrated = true;
        }
        self.publish();
        let phase = self.snapshot().phase();
        leptos::logging::log!("session hydrated: {phase:?}");
        phase
    }

    /// Claim the mutation slot.
    ///
    /// # Errors
    ///
    /// [`ApiError::ConcurrentMutation`] while hydration has not run or another
    /// mutation holds the slot.
    pub fn begin_mutation(&self) -> Result<MutationGuard<'_>, ApiError> {
        let mut inner = self.lock();
        if !inner.hydrated || inner.mutating {
            return Err(ApiError::ConcurrentMutation);
        }
        inner.mutating = true;
        Ok(MutationGuard { store: self, epoch: inner.epoch })
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// The backend error, [`ApiError::Decode`] for a response without token,
    /// or [`ApiError::ConcurrentMutation`]. Existing state is left untouched.
    pub async fn login(&self, api: &dyn AuthApi, credentials: &Credentials) -> Result<Session, ApiError> {
        let guard = self.begin_mutation()?;
        let response = api.login(credentials).await?;
        self.establish(&guard, response)
    }

    /// Create an account and sign in with the returned identity.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub async fn register(&self, api: &dyn AuthApi, request: &RegisterRequest) -> Result<Session, ApiError> {
        let guard = self.begin_mutation()?;
        let response = api.register(request).await?;
        self.establish(&guard, response)
    }

    /// Finish an OAuth sign-in from the provider callback query.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub async fn complete_oauth(&self, api: &dyn AuthApi, query: &str) -> Result<Session, ApiError> {
        let guard = self.begin_mutation()?;
        let response = api.oauth_callback(query).await?;
        self.establish(&guard, response)
    }

    /// Clear the session and the cache, whatever the prior state. A mutation
    /// still in flight will not write its result back.
    pub fn logout(&self) -> AuthRedirect {
        {
            let mut inner = self.lock();
            inner.session = None;
            inner.epoch += 1;
            self.cache.clear();
        }
        self.publish();
        leptos::logging::log!("session cleared by logout");
        AuthRedirect::Login
    }

    /// Send `partial` to the backend, then merge it (and the echoed fields)
    /// into the session.
    ///
    /// # Errors
    ///
    /// [`ApiError::NoActiveSession`], [`ApiError::ConcurrentMutation`], or the
    /// backend error.
    pub async fn update_profile(&self, api: &dyn AuthApi, partial: UserData) -> Result<Session, ApiError> {
        if self.session().is_none() {
            return Err(ApiError::NoActiveSession);
        }
        let guard = self.begin_mutation()?;
        let echoed = api.update_profile(&partial).await?;
        self.merge_profile(&guard, partial, echoed)
    }

    /// Pull the backend profile into the session.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::update_profile`].
    pub async fn refresh_profile(&self, api: &dyn AuthApi) -> Result<Session, ApiError> {
        if self.session().is_none() {
            return Err(ApiError::NoActiveSession);
        }
        let guard = self.begin_mutation()?;
        let fetched = api.fetch_profile().await?;
        self.merge_profile(&guard, UserData::new(), fetched)
    }

    fn establish(&self, guard: &MutationGuard<'_>, response: AuthResponse) -> Result<Session, ApiError> {
        let token = response
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::Decode("auth response carries no token".to_owned()))?;
        let session = Session::new(token, response.user);
        {
            let mut inner = self.lock();
            if inner.epoch != guard.epoch {
                leptos::logging::warn!("sign-in result discarded: session cleared while in flight");
                return Err(ApiError::NoActiveSession);
            }
            inner.session = Some(session.clone());
            self.persist(&session);
        }
        self.publish();
        leptos::logging::log!("session established");
        Ok(session)
    }

    fn merge_profile(
        &self,
        guard: &MutationGuard<'_>,
        partial: UserData,
        echoed: UserData,
    ) -> Result<Session, ApiError> {
        let session = {
            let mut inner = self.lock();
            // Expired or logged out while the request was in flight.
            if inner.epoch != guard.epoch {
                return Err(ApiError::NoActiveSession);
            }
            let Some(session) = inner.session.as_mut() else {
                return Err(ApiError::NoActiveSession);
            };
            session.merge_profile(partial);
            session.merge_profile(echoed);
            let session = session.clone();
            self.persist(&session);
            session
        };
        self.publish();
        Ok(session)
    }

    fn persist(&self, session: &Session) {
        match session.to_cache_record() {
            Ok(raw) => {
                if let Err(e) = self.cache.write(&raw) {
                    leptos::logging::warn!("session not persisted: {e}");
                }
            }
            Err(e) => leptos::logging::warn!("session not serializable: {e}"),
        }
    }

    fn publish(&self) {
        let state = self.snapshot();
        if let Some(listener) = self.listener.lock().unwrap_or_else(PoisonError::into_inner).as_ref() {
            listener(&state);
        }
    }
}

impl SessionHandle for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.lock()
            .session
            .as_ref()
            .filter(|s| s.is_valid())
            .map(|s| s.token.clone())
    }

    fn expire(&self) -> bool {
        let had_session = {
            let mut inner = self.lock();
            let had_session = inner.session.take().is_some();
            if had_session {
                inner.epoch += 1;
                self.cache.clear();
            }
            had_session
        };
        if had_session {
            self.publish();
            leptos::logging::warn!("session expired by backend");
        }
        had_session
    }
}
