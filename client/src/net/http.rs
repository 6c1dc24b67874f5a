//! HTTP gateway: the single path every backend call takes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the session store never talk to a transport directly. The
//! gateway attaches the bearer token, classifies failures, raises exactly
//! one notification per failed response, and always hands the error back to
//! the caller.
//!
//! ERROR HANDLING
//! ==============
//! A 401 off the login page while a session exists destroys the session and
//! emits one [`AuthRedirect::Login`] through the navigator; the caller sees
//! [`ApiError::SessionExpired`]. Any further 401 finds no session to expire
//! and is reported as a plain [`ApiError::Auth`] without another redirect.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::types::ErrorBody;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::notify::{self, Notifier, notice_for};
use crate::routing::{AuthRedirect, Navigator, is_login_path};

/// The gateway's view of the session store.
pub trait SessionHandle: Send + Sync {
    /// Bearer token of the active session, if any.
    fn bearer_token(&self) -> Option<String>;

    /// Destroy the active session; `true` if there was one.
    fn expire(&self) -> bool;
}

/// Classify a non-success response. Pure: no session or UI side effects.
#[must_use]
pub fn classify(status: u16, raw_body: &str) -> ApiError {
    let body = ErrorBody::parse(raw_body);
    let backend_message = body.message().map(str::to_owned);
    match status {
        401 => ApiError::Auth { message: backend_message.unwrap_or_else(|| notify::INVALID_CREDENTIALS.to_owned()) },
        422 => {
            let fields = body.field_errors();
            let message = fields
                .iter()
                .find_map(|(_, messages)| messages.first().cloned())
                .or(backend_message)
                .unwrap_or_else(|| notify::VALIDATION_ERROR.to_owned());
            ApiError::Validation { message, fields }
        }
        s if s >= 500 => ApiError::Server {
            status: s,
            message: backend_message.unwrap_or_else(|| notify::SERVER_ERROR.to_owned()),
        },
        s => ApiError::Http { status: s, message: backend_message.unwrap_or_else(|| notify::GENERIC_ERROR.to_owned()) },
    }
}

/// Authorized JSON client over a [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionHandle>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionHandle>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { config, transport, session, notifier, navigator }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET` and decode.
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`]; already notified.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send::<(), R>(Method::Get, path, None).await
    }

    /// `POST` a JSON body and decode.
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`]; already notified.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.send(Method::Post, path, Some(body)).await
    }

    /// `PUT` a JSON body and decode.
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`]; already notified.
    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.send(Method::Put, path, Some(body)).await
    }

    /// Send one request and classify the outcome.
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`]; the matching notification has been raised.
    pub async fn send<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let request = self.prepare(method, path, body)?;
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                leptos::logging::warn!("{} {path} failed: {e}", method.as_str());
                return Err(self.report(ApiError::Network(e.0)));
            }
        };
        self.accept(method, path, response)
    }

    fn prepare<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<HttpRequest, ApiError> {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.session.bearer_token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        let body = match body {
            Some(body) => {
                headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
                Some(serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?)
            }
            None => None,
        };
        Ok(HttpRequest { method, url: self.config.endpoint(path), headers, body })
    }

    fn accept<R: DeserializeOwned>(&self, method: Method, path: &str, response: HttpResponse) -> Result<R, ApiError> {
        if response.is_success() {
            let raw = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
            return serde_json::from_str(raw).map_err(|e| {
                leptos::logging::warn!("{} {path}: undecodable body: {e}", method.as_str());
                self.report(ApiError::Decode(e.to_string()))
            });
        }

        let error = match classify(response.status, &response.body) {
            ApiError::Auth { .. } if !self.on_login_page() && self.session.expire() => {
                self.navigator.redirect(AuthRedirect::Login);
                ApiError::SessionExpired
            }
            other => other,
        };
        leptos::logging::warn!("{} {path} -> {}: {error}", method.as_str(), response.status);
        Err(self.report(error))
    }

    fn on_login_page(&self) -> bool {
        is_login_path(&self.navigator.current_path())
    }

    /// Raise the notification for `error` and hand it back.
    fn report(&self, error: ApiError) -> ApiError {
        if let Some(notice) = notice_for(&error) {
            self.notifier.notify(notice);
        }
        error
    }
}
