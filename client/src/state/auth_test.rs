use super::*;
use crate::session::UserData;

fn session_with(fields: &[(&str, &str)]) -> Session {
    let mut data = UserData::new();
    for (key, value) in fields {
        data.insert((*key).to_owned(), serde_json::Value::String((*value).to_owned()));
    }
    Session::new("tok", data)
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.phase(), AuthPhase::Loading);
}

// =============================================================
// derived flags
// =============================================================

#[test]
fn loaded_with_valid_session_is_authenticated() {
    let state = AuthState { session: Some(session_with(&[])), loading: false };
    assert!(state.is_authenticated());
    assert_eq!(state.phase(), AuthPhase::Authenticated);
}

#[test]
fn loading_hides_authentication() {
    let state = AuthState { session: Some(session_with(&[])), loading: true };
    assert!(!state.is_authenticated());
}

#[test]
fn invalid_session_is_unauthenticated() {
    let mut session = session_with(&[]);
    session.is_logged_in = false;
    let state = AuthState { session: Some(session), loading: false };
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
}

#[test]
fn role_and_display_name_come_from_session() {
    let state = AuthState { session: Some(session_with(&[("role", "participant"), ("name", "Ana")])), loading: false };
    assert_eq!(state.role(), Some(Role::Participant));
    assert_eq!(state.display_name().as_deref(), Some("Ana"));
}
