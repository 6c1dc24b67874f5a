//! Forgot-password page: asks the backend to email a reset link.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::field_error::{FieldError, FormNotice};
use crate::net::types::MessageResponse;
use crate::pages::form::FieldFeedback;
use crate::state::registration::validate_email;
use crate::util::mount::MountGuard;

const RESET_SENT: &str = "Si el correo está registrado, recibirás un enlace para restablecer tu contraseña.";

/// Confirmation shown after a successful request.
pub(crate) fn confirmation_message(response: &MessageResponse) -> String {
    response
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(RESET_SENT)
        .to_owned()
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let mount = MountGuard::new();

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(None::<String>);
    let feedback = RwSignal::new(None::<FieldFeedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = match validate_email(&email.get_untracked()) {
            Ok(email_value) => email_value,
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
            let result = ctx.api().request_password_reset(&email_value).await;
            if !mount.is_alive() {
                return;
            }
            match result {
                Ok(response) => sent.set(Some(confirmation_message(&response))),
                Err(e) => feedback.set(FieldFeedback::from_api(&e, &["email"])),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Recuperar contraseña"</h1>
                <Show
                    when=move || sent.get().is_none()
                    fallback=move || view! { <p class="form-success">{sent.get().unwrap_or_default()}</p> }
                >
                    <FormNotice feedback/>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <label class="form-field">
                            <span>"Correo electrónico"</span>
                            <input
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <FieldError feedback field="email"/>
                        </label>
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Enviar enlace"
                        </button>
                    </form>
                </Show>
                <a class="auth-link" href="/login">"Volver a iniciar sesión"</a>
            </div>
        </div>
    }
}
