use super::*;
use crate::error::ApiError;
use crate::test_helpers::Harness;

#[test]
fn provider_denied_detects_error_without_code() {
    assert!(provider_denied("?error=access_denied&state=x"));
}

#[test]
fn provider_denied_false_when_code_present() {
    assert!(!provider_denied("code=abc&state=x"));
    assert!(!provider_denied(""));
}

#[test]
fn provider_denied_matches_whole_keys_only() {
    assert!(!provider_denied("error_hint=x&code=1"));
    assert!(!provider_denied("error_hint=x"));
}

#[test]
fn callback_waits_for_hydration() {
    let h = Harness::unhydrated();
    let auth = h.context();
    assert!(!callback_ready(&auth.state(), false));

    auth.hydrate();

    assert!(callback_ready(&auth.state(), false));
    assert!(!callback_ready(&auth.state(), true));
}

#[tokio::test]
async fn google_login_succeeds_once_hydrated() {
    let h = Harness::unhydrated();
    let auth = h.context();
    h.transport.reply(200, r#"{"token":"g","user":{"email":"ana@gmail.com"}}"#);

    assert_eq!(auth.complete_google_login("?code=abc").await.unwrap_err(), ApiError::ConcurrentMutation);
    assert!(h.transport.requests().is_empty());

    auth.hydrate();
    let session = auth.complete_google_login("?code=abc").await.unwrap();

    assert_eq!(session.token, "g");
    assert!(auth.is_authenticated());
}
