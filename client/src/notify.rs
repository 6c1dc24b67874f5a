//! User-facing notifications raised by the HTTP gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway decides *what* to tell the user; rendering belongs to the
//! toast collaborator (`state::toasts` + `components::toast_host`). Keeping
//! the mapping here lets pages stay silent about errors already announced.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::error::ApiError;

pub const CONNECTION_ERROR: &str = "No se pudo conectar con el servidor. Verifica tu conexión.";
pub const SESSION_EXPIRED: &str = "Tu sesión ha expirado. Inicia sesión nuevamente.";
pub const SERVER_ERROR: &str = "Error del servidor. Intenta nuevamente más tarde.";
pub const VALIDATION_ERROR: &str = "Los datos enviados no son válidos.";
pub const GENERIC_ERROR: &str = "Ocurrió un error al procesar la solicitud.";
pub const INVALID_CREDENTIALS: &str = "Credenciales incorrectas.";
pub const UNEXPECTED_RESPONSE: &str = "Respuesta inesperada del servidor.";

/// Severity, mapped to toast styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS modifier used by the toast host.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Warning => "toast--warning",
            Self::Error => "toast--error",
        }
    }
}

/// A single message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }
}

/// Sink for notices; implemented by the toast state and by test recorders.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notice the gateway shows for a classified failure.
///
/// Returns `None` for errors that never come from a response (session-level
/// rejections, cache recovery); those are left to the caller.
#[must_use]
pub fn notice_for(error: &ApiError) -> Option<Notice> {
    let notice = match error {
        ApiError::Network(_) => Notice::error(CONNECTION_ERROR),
        ApiError::SessionExpired => Notice::new(NoticeLevel::Warning, SESSION_EXPIRED),
        ApiError::Server { .. } => Notice::error(SERVER_ERROR),
        ApiError::Decode(_) => Notice::error(UNEXPECTED_RESPONSE),
        ApiError::Auth { message } | ApiError::Validation { message, .. } | ApiError::Http { message, .. } => {
            Notice::error(message.clone())
        }
        ApiError::NoActiveSession | ApiError::ConcurrentMutation | ApiError::MalformedCache(_) => return None,
    };
    Some(notice)
}
