//! Registration page with role-conditioned profile fields.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthContext;
use crate::components::field_error::{FieldError, FormNotice};
use crate::components::role_fields::RoleFields;
use crate::pages::form::FieldFeedback;
use crate::state::auth::AuthState;
use crate::state::registration::RegistrationForm;
use crate::util::mount::MountGuard;

/// Backend validation keys this form can pin inline, in form order.
pub(crate) const REGISTER_FIELDS: [&str; 9] = [
    "name",
    "email",
    "password",
    "password_confirmation",
    "role",
    "dni",
    "phone",
    "organization_name",
    "contact_phone",
];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let mount = MountGuard::new();

    let form = RwSignal::new(RegistrationForm::default());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<FieldFeedback>);

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
        let request = match form.with_untracked(RegistrationForm::validate) {
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
            let result = ctx.register(&request).await;
            if !mount.is_alive() {
                return;
            }
            if let Err(e) = result {
                feedback.set(FieldFeedback::from_api(&e, &REGISTER_FIELDS));
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Crear cuenta"</h1>
                <FormNotice feedback/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Nombre completo"</span>
                        <input
                            type="text"
                            autocomplete="name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError feedback field="name"/>
                    </label>
                    <label class="form-field">
                        <span>"Correo electrónico"</span>
                        <input
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <FieldError feedback field="email"/>
                    </label>
                    <label class="form-field">
                        <span>"Contraseña"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError feedback field="password"/>
                    </label>
                    <label class="form-field">
                        <span>"Confirmar contraseña"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().password_confirmation
                            on:input=move |ev| form.update(|f| f.password_confirmation = event_target_value(&ev))
                        />
                        <FieldError feedback field="password_confirmation"/>
                    </label>
                    <RoleFields form feedback/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creando cuenta..." } else { "Registrarme" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "¿Ya tienes cuenta? "
                    <a href="/login">"Inicia sesión"</a>
                </p>
            </div>
        </div>
    }
}
