//! Backend endpoints, expressed over the [`ApiClient`] gateway.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns the gateway's `Result`. Failures have already been
//! announced to the user, so callers only adjust local UI (busy flags,
//! inline field errors) and never raise a second notification.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::http::ApiClient;
use super::types::{
    AuthResponse, ChangePasswordRequest, CreateOrderRequest, Credentials, Event, Listing, MessageResponse, Order,
    PasswordResetRequest, RegisterRequest, Single, profile_fields,
};
use crate::error::ApiError;
use crate::session::{AuthApi, UserData};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const GOOGLE_LOGIN_ENDPOINT: &str = "/auth/google";
pub const GOOGLE_CALLBACK_ENDPOINT: &str = "/auth/google/callback";
pub const RESET_PASSWORD_ENDPOINT: &str = "/auth/reset-password";
pub const CHANGE_PASSWORD_ENDPOINT: &str = "/change-password";
pub const PROFILE_ENDPOINT: &str = "/user/profile";
pub const EVENTS_ENDPOINT: &str = "/events";
pub const ORDERS_ENDPOINT: &str = "/orders";

fn event_endpoint(event_id: &str) -> String {
    format!("{EVENTS_ENDPOINT}/{event_id}")
}

/// Callback path with the provider query forwarded verbatim.
fn google_callback_endpoint(query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        GOOGLE_CALLBACK_ENDPOINT.to_owned()
    } else {
        format!("{GOOGLE_CALLBACK_ENDPOINT}?{query}")
    }
}

impl ApiClient {
    /// Absolute URL the browser visits to start Google sign-in.
    #[must_use]
    pub fn google_login_url(&self) -> String {
        self.config().endpoint(GOOGLE_LOGIN_ENDPOINT)
    }

    /// Ask the backend to email a password-reset link.
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`].
    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let body = PasswordResetRequest { email: email.to_owned() };
        self.post(RESET_PASSWORD_ENDPOINT, &body).await
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`].
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<MessageResponse, ApiError> {
        self.post(CHANGE_PASSWORD_ENDPOINT, request).await
    }

    /// Public event listing.
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`].
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let listing: Listing<Event> = self.get(EVENTS_ENDPOINT).await?;
        Ok(listing.into_vec())
    }

    /// # Errors
    ///
    /// Any classified [`ApiError`].
    pub async fn get_event(&self, event_id: &str) -> Result<Event, ApiError> {
        let event: Single<Event> = self.get(&event_endpoint(event_id)).await?;
        Ok(event.into_inner())
    }

    /// Orders visible to the signed-in user (all orders for organizers).
    ///
    /// # Errors
    ///
    /// Any classified [`ApiError`].
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let listing: Listing<Order> = self.get(ORDERS_ENDPOINT).await?;
        Ok(listing.into_vec())
    }

    /// # Errors
    ///
    /// Any classified [`ApiError`].
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError> {
        let order: Single<Order> = self.post(ORDERS_ENDPOINT, request).await?;
        Ok(order.into_inner())
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post(LOGIN_ENDPOINT, credentials).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post(REGISTER_ENDPOINT, request).await
    }

    async fn oauth_callback(&self, query: &str) -> Result<AuthResponse, ApiError> {
        self.get(&google_callback_endpoint(query)).await
    }

    async fn fetch_profile(&self) -> Result<UserData, ApiError> {
        let body: serde_json::Value = self.get(PROFILE_ENDPOINT).await?;
        Ok(profile_fields(body))
    }

    async fn update_profile(&self, partial: &UserData) -> Result<UserData, ApiError> {
        let body: serde_json::Value = self.put(PROFILE_ENDPOINT, partial).await?;
        Ok(profile_fields(body))
    }
}
