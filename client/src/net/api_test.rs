use super::*;
use crate::net::transport::Method;
use crate::test_helpers::{Harness, TEST_API_URL, participant_session};

// =============================================================
// Endpoint helpers
// =============================================================

#[test]
fn google_callback_endpoint_forwards_query() {
    assert_eq!(google_callback_endpoint("?code=1&state=2"), "/auth/google/callback?code=1&state=2");
    assert_eq!(google_callback_endpoint("code=1"), "/auth/google/callback?code=1");
    assert_eq!(google_callback_endpoint(""), "/auth/google/callback");
    assert_eq!(google_callback_endpoint("?"), "/auth/google/callback");
}

#[test]
fn event_endpoint_appends_id() {
    assert_eq!(event_endpoint("42"), "/events/42");
}

#[test]
fn google_login_url_is_absolute() {
    let h = Harness::new();
    assert_eq!(h.api.google_login_url(), format!("{TEST_API_URL}/auth/google"));
}

// =============================================================
// Requests
// =============================================================

#[tokio::test]
async fn login_posts_credentials() {
    let h = Harness::new();
    h.transport.reply(200, r#"{"token":"t","user":{}}"#);
    let creds = Credentials { email: "a@b.co".to_owned(), password: "x".to_owned() };

    let response = AuthApi::login(&*h.api, &creds).await.unwrap();

    assert_eq!(response.token.as_deref(), Some("t"));
    let request = h.transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, format!("{TEST_API_URL}/auth/login"));
    assert_eq!(request.body.as_deref(), Some(r#"{"email":"a@b.co","password":"x"}"#));
}

#[tokio::test]
async fn list_events_accepts_wrapped_listing() {
    let h = Harness::new();
    h.transport.reply(200, r#"{"data":[{"id":1,"title":"Concierto"},{"id":2,"title":"Feria"}]}"#);

    let events = h.api.list_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[1].title, "Feria");
    assert_eq!(h.transport.last_request().method, Method::Get);
}

#[tokio::test]
async fn get_event_hits_detail_path() {
    let h = Harness::new();
    h.transport.reply(200, r#"{"id":"e7","title":"Expo"}"#);

    let event = h.api.get_event("e7").await.unwrap();

    assert_eq!(event.id, "e7");
    assert_eq!(h.transport.last_request().url, format!("{TEST_API_URL}/events/e7"));
}

#[tokio::test]
async fn create_order_sends_authorized_body() {
    let h = Harness::signed_in(&participant_session());
    h.transport.reply(201, r#"{"data":{"id":10,"event_id":3,"quantity":2,"total":"50.00"}}"#);

    let order = h
        .api
        .create_order(&CreateOrderRequest { event_id: "3".to_owned(), quantity: 2 })
        .await
        .unwrap();

    assert_eq!(order.id, "10");
    assert_eq!(order.total, Some(50.0));
    let request = h.transport.last_request();
    assert_eq!(request.url, format!("{TEST_API_URL}/orders"));
    assert_eq!(request.header("Authorization"), Some("Bearer tok-123"));
    assert_eq!(request.body.as_deref(), Some(r#"{"event_id":"3","quantity":2}"#));
}

#[tokio::test]
async fn request_password_reset_posts_email() {
    let h = Harness::new();
    h.transport.reply(200, r#"{"message":"Enlace enviado"}"#);

    let response = h.api.request_password_reset("ana@example.com").await.unwrap();

    assert_eq!(response.message.as_deref(), Some("Enlace enviado"));
    assert_eq!(h.transport.last_request().body.as_deref(), Some(r#"{"email":"ana@example.com"}"#));
}

#[tokio::test]
async fn change_password_posts_to_change_endpoint() {
    let h = Harness::signed_in(&participant_session());
    h.transport.reply(200, "{}");
    let request = ChangePasswordRequest {
        current_password: "viejo1234".to_owned(),
        new_password: "nuevo1234".to_owned(),
        new_password_confirmation: "nuevo1234".to_owned(),
    };

    h.api.change_password(&request).await.unwrap();

    assert_eq!(h.transport.last_request().url, format!("{TEST_API_URL}/change-password"));
}

#[tokio::test]
async fn update_profile_uses_put() {
    let h = Harness::signed_in(&participant_session());
    h.transport.reply(200, r#"{"name":"Ana"}"#);

    let echoed = AuthApi::update_profile(&*h.api, &UserData::new()).await.unwrap();

    assert_eq!(echoed.len(), 1);
    let request = h.transport.last_request();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.url, format!("{TEST_API_URL}/user/profile"));
}
