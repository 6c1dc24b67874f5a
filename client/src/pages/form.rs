//! Inline form feedback shared by the page forms.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP gateway already toasted every response failure. Pages only pin a
//! message next to the field it concerns, or show session-level rejections
//! that never reached the gateway.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::ApiError;
use crate::notify::notice_for;
use crate::state::registration::FormError;

/// A message shown next to one input, or above the form when `field` is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldFeedback {
    pub field: Option<String>,
    pub message: String,
}

impl FieldFeedback {
    pub fn general(message: impl Into<String>) -> Self {
        Self { field: None, message: message.into() }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: Some(field.into()), message: message.into() }
    }

    #[must_use]
    pub fn is_for(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// Feedback for a failed submission, if the page should show any.
    ///
    /// Validation errors land on the first of `fields` the backend named;
    /// errors the gateway did not announce are shown as a general message.
    #[must_use]
    pub fn from_api(error: &ApiError, fields: &[&str]) -> Option<Self> {
        if let Some(field) = fields.iter().find(|f| error.field_message(f).is_some()) {
            let message = error.field_message(field).unwrap_or_default();
            return Some(Self::for_field(*field, message));
        }
        if notice_for(error).is_some() {
            return None;
        }
        let message = error.user_message();
        (!message.is_empty()).then(|| Self::general(message))
    }
}

impl From<FormError> for FieldFeedback {
    fn from(error: FormError) -> Self {
        Self::for_field(error.field, error.message)
    }
}

/// Message for `field` from the current feedback, for rendering under an input.
#[must_use]
pub fn message_for(feedback: Option<&FieldFeedback>, field: &str) -> Option<String> {
    feedback.filter(|f| f.is_for(field)).map(|f| f.message.clone())
}
