use super::*;
use crate::routing::AuthRedirect;
use crate::session::DurableCache;
use crate::test_helpers::{Harness, participant_session};

#[tokio::test]
async fn login_then_state_is_authenticated() {
    let h = Harness::new();
    let auth = h.context();
    h.transport.reply(200, r#"{"token":"t-1","user":{"name":"Ana","role":"participant"}}"#);

    auth.login("  ana@example.com ", "secreto123").await.unwrap();

    assert!(auth.is_authenticated());
    assert!(!auth.loading());
    assert_eq!(auth.state().display_name().as_deref(), Some("Ana"));
    assert_eq!(
        h.transport.last_request().body.as_deref(),
        Some(r#"{"email":"ana@example.com","password":"secreto123"}"#)
    );
}

#[test]
fn loading_until_hydrated() {
    let h = Harness::unhydrated();
    let auth = h.context();
    assert!(auth.loading());
    assert!(!auth.is_authenticated());
    assert_eq!(auth.hydrate(), AuthPhase::Unauthenticated);
    assert!(!auth.loading());
}

#[test]
fn logout_redirects_to_login() {
    let h = Harness::signed_in(&participant_session());
    let auth = h.context();

    auth.logout();

    assert!(!auth.is_authenticated());
    assert!(h.cache.read().is_none());
    assert_eq!(h.navigator.redirects(), vec![AuthRedirect::Login]);
}

#[tokio::test]
async fn google_login_completes_from_callback_query() {
    let h = Harness::new();
    let auth = h.context();
    h.transport.reply(200, r#"{"token":"g","user":{"email":"ana@gmail.com"}}"#);

    let session = auth.complete_google_login("?code=abc").await.unwrap();

    assert_eq!(session.display_name(), Some("ana@gmail.com"));
    assert!(auth.session().is_some());
}

#[tokio::test]
async fn profile_update_requires_session() {
    let h = Harness::new();
    let auth = h.context();
    assert_eq!(auth.update_profile(UserData::new()).await.unwrap_err(), ApiError::NoActiveSession);
    assert_eq!(auth.refresh_profile().await.unwrap_err(), ApiError::NoActiveSession);
}
