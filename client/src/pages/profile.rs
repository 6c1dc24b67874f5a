//! Profile page: shows the session's user fields and edits them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Once authenticated, the backend profile is pulled into
//! the session a single time per visit; edits send only changed fields and
//! the store merges the echo.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthContext;
use crate::components::field_error::{FieldError, FormNotice};
use crate::notify::{Notice, Notifier};
use crate::pages::form::FieldFeedback;
use crate::session::{Session, UserData};
use crate::state::auth::AuthState;
use crate::state::registration::{FormError, Role, RoleField};
use crate::state::toasts::{ToastNotifier, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::mount::MountGuard;

/// Editable profile inputs for `role`: the name plus that role's fields.
pub(crate) fn editable_fields(role: Option<Role>) -> Vec<&'static str> {
    let mut fields = vec!["name"];
    if let Some(role) = role {
        fields.extend(RoleField::for_role(role).map(RoleField::name));
    }
    fields
}

/// Trimmed values that differ from the session, ready to send.
///
/// # Errors
///
/// A [`FormError`] when the name is blank.
pub(crate) fn profile_changes(session: &Session, edits: &[(&'static str, String)]) -> Result<UserData, FormError> {
    let mut changes = UserData::new();
    for (field, value) in edits {
        let value = value.trim();
        if *field == "name" && value.is_empty() {
            return Err(FormError::new("name", "Ingresa tu nombre."));
        }
        if session.field(field).unwrap_or_default() != value {
            changes.insert((*field).to_owned(), serde_json::Value::String(value.to_owned()));
        }
    }
    Ok(changes)
}

/// Input values for the session's editable fields. Fields the user has
/// already typed into keep their current value.
pub(crate) fn seed_edits(
    session: &Session,
    current: &[(&'static str, String)],
    touched: &[&'static str],
) -> Vec<(&'static str, String)> {
    editable_fields(session.role())
        .into_iter()
        .map(|field| {
            let typed = touched
                .contains(&field)
                .then(|| current.iter().find(|(f, _)| *f == field))
                .flatten();
            match typed {
                Some((_, value)) => (field, value.clone()),
                None => (field, session.field(field).unwrap_or_default().to_owned()),
            }
        })
        .collect()
}

fn field_label(field: &str) -> &'static str {
    match field {
        "name" => "Nombre",
        "dni" => RoleField::Dni.label(),
        "phone" => RoleField::Phone.label(),
        "organization_name" => RoleField::OrganizationName.label(),
        "contact_phone" => RoleField::ContactPhone.label(),
        _ => "",
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mount = MountGuard::new();
    install_unauth_redirect(auth, use_navigate());

    let edits = RwSignal::new(Vec::<(&'static str, String)>::new());
    let touched = RwSignal::new(Vec::<&'static str>::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<FieldFeedback>);

    // Reseed untouched inputs whenever the session changes.
    Effect::new(move || {
        let Some(session) = auth.get().session.filter(Session::is_valid) else {
            return;
        };
        let seeded = edits.with_untracked(|current| touched.with_untracked(|t| seed_edits(&session, current, t)));
        edits.set(seeded);
    });

    let refreshed = RwSignal::new(false);
    {
        let ctx = ctx.clone();
        let mount = mount.clone();
        Effect::new(move || {
            if refreshed.get() || !auth.get().is_authenticated() {
                return;
            }
            refreshed.set(true);
            #[cfg(feature = "hydrate")]
            {
                let ctx = ctx.clone();
                let mount = mount.clone();
                leptos::task::spawn_local(async move {
                    if let Err(e) = ctx.refresh_profile().await {
                        if mount.is_alive() {
                            feedback.set(FieldFeedback::from_api(&e, &[]));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&ctx, &mount);
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(session) = ctx.session() else {
            return;
        };
        let changes = match edits.with_untracked(|e| profile_changes(&session, e)) {
            Ok(changes) => changes,
            Err(e) => {
                feedback.set(Some(e.into()));
                return;
            }
        };
        if changes.is_empty() {
            feedback.set(Some(FieldFeedback::general("No hay cambios para guardar.")));
            return;
        }
        feedback.set(None);
        busy.set(true);

        let ctx = ctx.clone();
        let mount = mount.clone();
        let fields = edits.with_untracked(|e| e.iter().map(|(f, _)| *f).collect::<Vec<_>>());
        leptos::task::spawn_local(async move {
            let result = ctx.update_profile(changes).await;
            if !mount.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(_) => {
                    touched.set(Vec::new());
                    ToastNotifier::new(toasts).notify(Notice::success("Perfil actualizado."));
                }
                Err(e) => feedback.set(FieldFeedback::from_api(&e, &fields)),
            }
        });
    };

    let email = move || auth.get().session.and_then(|s| s.field("email").map(str::to_owned)).unwrap_or_default();
    let role_label = move || auth.get().role().map(Role::label).unwrap_or("—");

    view! {
        <div class="page profile-page">
            <h1>"Mi perfil"</h1>
            <dl class="profile-page__summary">
                <dt>"Correo"</dt>
                <dd>{email}</dd>
                <dt>"Tipo de cuenta"</dt>
                <dd>{role_label}</dd>
            </dl>
            <FormNotice feedback/>
            <form class="profile-form" on:submit=on_submit>
                {move || {
                    edits
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, (field, value))| {
                            view! {
                                <label class="form-field">
                                    <span>{field_label(field)}</span>
                                    <input
                                        type="text"
                                        name=field
                                        prop:value=value
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            touched.update(|t| {
                                                if !t.contains(&field) {
                                                    t.push(field);
                                                }
                                            });
                                            edits.update(|e| {
                                                if let Some(slot) = e.get_mut(index) {
                                                    slot.1 = value;
                                                }
                                            });
                                        }
                                    />
                                    <FieldError feedback field=field/>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Guardando..." } else { "Guardar cambios" }}
                </button>
            </form>
            <a class="auth-link" href="/change-password">"Cambiar contraseña"</a>
        </div>
    }
}
