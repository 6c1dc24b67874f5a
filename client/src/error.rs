//! Error taxonomy shared by the session store, HTTP gateway and pages.
//!
//! DESIGN
//! ======
//! One enum covers both transport-level classification (network, 4xx, 5xx)
//! and session-level rejections (no session, concurrent mutation). The HTTP
//! gateway is the only place that turns these into user notifications; pages
//! read the same value for inline display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Field-level validation messages in the order the backend sent them.
pub type FieldErrors = Vec<(String, Vec<String>)>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (DNS, CORS, offline, aborted fetch).
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the credentials (401 outside an active session).
    #[error("authentication rejected: {message}")]
    Auth { message: String },

    /// A 401 destroyed the active session; the router must go to login.
    #[error("session expired")]
    SessionExpired,

    /// 422 with structured field errors.
    #[error("validation failed: {message}")]
    Validation { message: String, fields: FieldErrors },

    /// 5xx from the backend.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A session-scoped operation was attempted without a session.
    #[error("no active session")]
    NoActiveSession,

    /// Another session mutation is still in flight.
    #[error("another session update is still in progress")]
    ConcurrentMutation,

    /// The cached session record failed validation during hydration.
    #[error("cached session record is malformed: {0}")]
    MalformedCache(String),
}

impl ApiError {
    /// HTTP status behind this error, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { .. } | Self::SessionExpired => Some(401),
            Self::Validation { .. } => Some(422),
            Self::Server { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// First validation message recorded for `field`, if any.
    #[must_use]
    pub fn field_message(&self, field: &str) -> Option<&str> {
        let Self::Validation { fields, .. } = self else {
            return None;
        };
        fields
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, messages)| messages.first())
            .map(String::as_str)
    }

    /// Short text suitable for an inline form message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => crate::notify::CONNECTION_ERROR.to_owned(),
            Self::Auth { message }
            | Self::Validation { message, .. }
            | Self::Server { message, .. }
            | Self::Http { message, .. } => message.clone(),
            Self::SessionExpired => crate::notify::SESSION_EXPIRED.to_owned(),
            Self::Decode(_) => crate::notify::UNEXPECTED_RESPONSE.to_owned(),
            Self::NoActiveSession => "Debes iniciar sesión para continuar.".to_owned(),
            Self::ConcurrentMutation => "Espera a que termine la operación en curso.".to_owned(),
            Self::MalformedCache(_) => String::new(),
        }
    }
}
