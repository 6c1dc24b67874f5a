//! # client
//!
//! Leptos + WASM frontend for the Evently event platform: event discovery,
//! account registration, login, profile and ordering screens over a remote
//! REST backend.
//!
//! The crate is built twice. `hydrate` produces the browser bundle that owns
//! the session (localStorage cache, fetch transport); `ssr` produces the shell
//! rendered by the `evently` host, where the session stays in its loading
//! state until the browser hydrates.
//!
//! Layering, bottom-up: `session` (store + durable cache) → `net` (HTTP
//! gateway and endpoints) → `auth` (context handed to the component tree) →
//! `pages` / `components`.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod notify;
pub mod pages;
pub mod routing;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
