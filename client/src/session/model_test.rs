use super::*;
use serde_json::json;

fn user(value: serde_json::Value) -> UserData {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

// =============================================================
// validity
// =============================================================

#[test]
fn new_session_is_valid() {
    let session = Session::new("tok", UserData::new());
    assert!(session.is_logged_in);
    assert!(session.is_valid());
}

#[test]
fn token_without_logged_in_flag_is_not_valid() {
    let session = Session { is_logged_in: false, token: "tok".to_owned(), user_data: UserData::new() };
    assert!(!session.is_valid());
}

#[test]
fn blank_token_is_not_valid() {
    let session = Session::new("   ", UserData::new());
    assert!(!session.is_valid());
}

// =============================================================
// merge_profile
// =============================================================

#[test]
fn merge_overwrites_given_fields_and_keeps_the_rest() {
    let mut session = Session::new("tok", user(json!({ "name": "Ana", "phone": "111", "role": "participant" })));
    session.merge_profile(user(json!({ "phone": "222", "city": "Lima" })));
    assert_eq!(session.field("name"), Some("Ana"));
    assert_eq!(session.field("phone"), Some("222"));
    assert_eq!(session.field("city"), Some("Lima"));
    assert_eq!(session.field("role"), Some("participant"));
}

#[test]
fn role_is_parsed_from_user_data() {
    let session = Session::new("tok", user(json!({ "role": "organizer" })));
    assert_eq!(session.role(), Some(Role::Organizer));
}

#[test]
fn display_name_falls_back_to_email() {
    let session = Session::new("tok", user(json!({ "name": " ", "email": "ana@example.com" })));
    assert_eq!(session.display_name(), Some("ana@example.com"));
}

// =============================================================
// cache record
// =============================================================

#[test]
fn cache_record_uses_camel_case_keys() {
    let raw = Session::new("tok", UserData::new()).to_cache_record().unwrap();
    assert_eq!(raw, r#"{"isLoggedIn":true,"token":"tok","userData":{}}"#);
}

#[test]
fn cache_record_round_trip_is_byte_identical() {
    let session = Session::new("tok", user(json!({ "role": "organizer", "name": "Ana", "age": 31, "tags": ["a"] })));
    let raw = session.to_cache_record().unwrap();
    let restored = Session::from_cache_record(&raw).unwrap();
    assert_eq!(restored, session);
    assert_eq!(restored.to_cache_record().unwrap(), raw);
}

#[test]
fn record_missing_token_is_malformed() {
    let err = Session::from_cache_record(r#"{"isLoggedIn":true,"userData":{}}"#).unwrap_err();
    assert!(matches!(err, ApiError::MalformedCache(_)));
}

#[test]
fn record_with_invalid_json_is_malformed() {
    let err = Session::from_cache_record("{not json").unwrap_err();
    assert!(matches!(err, ApiError::MalformedCache(_)));
}

#[test]
fn record_logged_out_is_malformed() {
    let err = Session::from_cache_record(r#"{"isLoggedIn":false,"token":"tok","userData":{}}"#).unwrap_err();
    assert!(matches!(err, ApiError::MalformedCache(_)));
}
