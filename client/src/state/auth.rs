//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Published by the session store after every transition and held in an
//! `RwSignal` so route guards and identity-aware components re-render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::Session;
use crate::state::registration::Role;

/// Where the session lifecycle currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Startup, before the durable cache has been read.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Read-only view of the session store.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Derived from the session; never stored separately.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.session.as_ref().is_some_and(Session::is_valid)
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Loading
        } else if self.is_authenticated() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().and_then(Session::role)
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(Session::display_name)
            .map(str::to_owned)
    }
}
