//! Login page: email + password, or Google sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login publishes an authenticated state; the effect below
//! then leaves the page. A 401 here is a credentials error, never an expiry.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthContext;
use crate::components::field_error::{FieldError, FormNotice};
use crate::pages::form::FieldFeedback;
use crate::state::auth::AuthState;
use crate::state::registration::{FormError, validate_email};
use crate::util::mount::MountGuard;

/// Trimmed email and raw password, or the first invalid field.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), FormError> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(FormError::new("password", "Ingresa tu contraseña."));
    }
    Ok((email, password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let mount = MountGuard::new();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<FieldFeedback>);
    let google_url = ctx.api().google_login_url();

    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(e) => {
                feedback.set(Some(e.into()));
                return;
            }
        };
        feedback.set(None);
        busy.set(true);

        let ctx = ctx.clone();
        let mount = mount.clone();
        leptos::task::spawn_local(async move {
            let result = ctx.login(&email_value, &password_value).await;
            if !mount.is_alive() {
                return;
            }
            if let Err(e) = result {
                feedback.set(FieldFeedback::from_api(&e, &["email", "password"]));
                password.set(String::new());
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Iniciar sesión"</h1>
                <FormNotice feedback/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Correo electrónico"</span>
                        <input
                            type="email"
                            autocomplete="email"
                            placeholder="tu@correo.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError feedback field="email"/>
                    </label>
                    <label class="form-field">
                        <span>"Contraseña"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <FieldError feedback field="password"/>
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
                <a class="auth-link" href="/forgot-password">"¿Olvidaste tu contraseña?"</a>
                <div class="auth-divider"></div>
                <a class="auth-button auth-button--google" href=google_url>
                    "Continuar con Google"
                </a>
                <p class="auth-footer">
                    "¿No tienes cuenta? "
                    <a href="/register">"Regístrate"</a>
                </p>
            </div>
        </div>
    }
}
