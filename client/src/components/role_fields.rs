//! Role selector plus the inputs of the selected role.
//!
//! DESIGN
//! ======
//! The rendered inputs come from `RoleField::for_role`, so the markup can
//! only ever show fields belonging to the current variant.

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::pages::form::FieldFeedback;
use crate::state::registration::{RegistrationForm, Role, RoleField};

#[component]
pub fn RoleFields(form: RwSignal<RegistrationForm>, feedback: RwSignal<Option<FieldFeedback>>) -> impl IntoView {
    let role_option = move |role: Role| {
        view! {
            <label class="role-fields__option">
                <input
                    type="radio"
                    name="role"
                    value=role.as_str()
                    prop:checked=move || form.get().role() == Some(role)
                    on:change=move |_| form.update(|f| f.select_role(role))
                />
                {role.label()}
            </label>
        }
    };

    view! {
        <fieldset class="role-fields">
            <legend>"Tipo de cuenta"</legend>
            <div class="role-fields__options">
                {role_option(Role::Participant)}
                {role_option(Role::Organizer)}
            </div>
            <FieldError feedback field="role"/>
            {move || {
                form.get()
                    .role()
                    .map(|role| {
                        RoleField::for_role(role)
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <label class="form-field">
                                        <span>{field.label()}</span>
                                        <input
                                            type="text"
                                            name=field.name()
                                            prop:value=move || form.get().role_field(field).to_owned()
                                            on:input=move |ev| {
                                                form.update(|f| f.set_role_field(field, event_target_value(&ev)));
                                            }
                                        />
                                        <FieldError feedback field=field.name()/>
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
            }}
        </fieldset>
    }
}
