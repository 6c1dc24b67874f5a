//! Explicit navigation signals raised by auth transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP gateway and the session store never touch the router. They
//! report an [`AuthRedirect`] through a [`Navigator`]; the root `App`
//! observes [`NavState`] and performs the navigation with `use_navigate`.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use leptos::prelude::*;

/// Login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Navigation the router must perform after an auth transition.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthRedirect {
    Login,
}

impl AuthRedirect {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
        }
    }
}

/// Read access to the current location plus a channel for redirects.
pub trait Navigator: Send + Sync {
    /// Path component of the current location (e.g. `/profile`).
    fn current_path(&self) -> String;
    fn redirect(&self, to: AuthRedirect);
}

/// True when `path` is the login entry point, ignoring a trailing slash.
#[must_use]
pub fn is_login_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == LOGIN_PATH
}

/// Pending redirect requests, observed by `App`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Bumped once per requested login redirect.
    pub login_redirect_seq: u64,
}

impl NavState {
    pub fn request(&mut self, to: AuthRedirect) {
        match to {
            AuthRedirect::Login => self.login_redirect_seq += 1,
        }
    }
}

/// [`Navigator`] backed by the reactive [`NavState`] and the browser location.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    nav: RwSignal<NavState>,
}

impl RouterNavigator {
    pub fn new(nav: RwSignal<NavState>) -> Self {
        Self { nav }
    }
}

impl Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn redirect(&self, to: AuthRedirect) {
        self.nav.update(|s| s.request(to));
    }
}
