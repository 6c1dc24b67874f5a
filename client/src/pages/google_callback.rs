//! Landing route for the Google OAuth redirect.
//!
//! The provider's query string is forwarded unchanged to the backend
//! callback; the returned identity becomes the session.

#[cfg(test)]
#[path = "google_callback_test.rs"]
mod google_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::AuthContext;
use crate::state::auth::AuthState;
use crate::util::mount::MountGuard;

/// The provider reports a refused consent as `error=...` without a code.
pub fn provider_denied(query: &str) -> bool {
    let query = query.trim_start_matches('?');
    let has = |key: &str| query.split('&').any(|pair| pair.split('=').next() == Some(key));
    has("error") && !has("code")
}

/// The callback runs once, after the session has left the loading phase;
/// before that the store refuses every mutation.
pub(crate) fn callback_ready(state: &AuthState, requested: bool) -> bool {
    !requested && !state.loading
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum CallbackStatus {
    Working,
    Failed(String),
}

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();
    let location = use_location();
    let navigate = use_navigate();
    let mount = MountGuard::new();
    let status = RwSignal::new(CallbackStatus::Working);
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if !callback_ready(&auth.get(), requested.get()) {
            return;
        }
        requested.set(true);
        let query = location.search.get_untracked();
        if provider_denied(&query) {
            status.set(CallbackStatus::Failed("Inicio de sesión con Google cancelado.".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            let mount = mount.clone();
            leptos::task::spawn_local(async move {
                let result = ctx.complete_google_login(&query).await;
                if !mount.is_alive() {
                    return;
                }
                match result {
                    Ok(_) => navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() }),
                    Err(e) => status.set(CallbackStatus::Failed(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ctx, &navigate, &mount);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                {move || match status.get() {
                    CallbackStatus::Working => view! { <p class="auth-status">"Validando tu cuenta de Google..."</p> }.into_any(),
                    CallbackStatus::Failed(message) => {
                        view! {
                            <p class="form-notice" role="alert">{message}</p>
                            <a class="auth-button" href="/login">"Volver a iniciar sesión"</a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
