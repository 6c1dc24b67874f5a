//! Inline feedback slots for page forms.

use leptos::prelude::*;

use crate::pages::form::{FieldFeedback, message_for};

/// Message under one input, shown while the feedback targets `field`.
#[component]
pub fn FieldError(feedback: RwSignal<Option<FieldFeedback>>, field: &'static str) -> impl IntoView {
    move || message_for(feedback.get().as_ref(), field).map(|m| view! { <span class="field-error">{m}</span> })
}

/// Message above a form for feedback not tied to an input.
#[component]
pub fn FormNotice(feedback: RwSignal<Option<FieldFeedback>>) -> impl IntoView {
    move || {
        feedback
            .get()
            .filter(|f| f.field.is_none())
            .map(|f| view! { <p class="form-notice" role="alert">{f.message}</p> })
    }
}
