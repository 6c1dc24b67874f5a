//! Change-password page for the signed-in user.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthContext;
use crate::components::field_error::{FieldError, FormNotice};
use crate::net::types::ChangePasswordRequest;
use crate::notify::{Notice, Notifier};
use crate::pages::form::FieldFeedback;
use crate::state::auth::AuthState;
use crate::state::registration::{FormError, validate_new_password};
use crate::state::toasts::{ToastNotifier, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::mount::MountGuard;

pub(crate) const PASSWORD_FIELDS: [&str; 3] = ["current_password", "new_password", "new_password_confirmation"];

/// Build the request, or the first invalid input.
pub(crate) fn validate_change_password(
    current: &str,
    new_password: &str,
    confirmation: &str,
) -> Result<ChangePasswordRequest, FormError> {
    if current.is_empty() {
        return Err(FormError::new("current_password", "Ingresa tu contraseña actual."));
    }
    validate_new_password(new_password, confirmation, "new_password", "new_password_confirmation")?;
    if new_password == current {
        return Err(FormError::new("new_password", "La nueva contraseña debe ser distinta de la actual."));
    }
    Ok(ChangePasswordRequest {
        current_password: current.to_owned(),
        new_password: new_password.to_owned(),
        new_password_confirmation: confirmation.to_owned(),
    })
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mount = MountGuard::new();
    install_unauth_redirect(auth, use_navigate());

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<FieldFeedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_change_password(
            &current.get_untracked(),
            &new_password.get_untracked(),
            &confirmation.get_untracked(),
        ) {
            Ok(request) => request,
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
            let result = ctx.api().change_password(&request).await;
            if !mount.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(_) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirmation.set(String::new());
                    ToastNotifier::new(toasts).notify(Notice::success("Contraseña actualizada."));
                }
                Err(e) => feedback.set(FieldFeedback::from_api(&e, &PASSWORD_FIELDS)),
            }
        });
    };

    let password_input = move |label: &'static str, field: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type="password"
                    name=field
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <FieldError feedback field/>
            </label>
        }
    };

    view! {
        <div class="page change-password-page">
            <h1>"Cambiar contraseña"</h1>
            <FormNotice feedback/>
            <form class="auth-form" on:submit=on_submit>
                {password_input("Contraseña actual", "current_password", current)}
                {password_input("Nueva contraseña", "new_password", new_password)}
                {password_input("Confirmar nueva contraseña", "new_password_confirmation", confirmation)}
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Actualizar contraseña"
                </button>
            </form>
        </div>
    }
}
