use serde_json::json;

use super::*;

fn session() -> Session {
    let mut user = UserData::new();
    user.insert("name".to_owned(), json!("Ana"));
    user.insert("role".to_owned(), json!("participant"));
    user.insert("phone".to_owned(), json!("999 111 222"));
    Session::new("tok", user)
}

#[test]
fn editable_fields_follow_role() {
    assert_eq!(editable_fields(Some(Role::Participant)), vec!["name", "dni", "phone"]);
    assert_eq!(editable_fields(Some(Role::Organizer)), vec!["name", "organization_name", "contact_phone"]);
    assert_eq!(editable_fields(None), vec!["name"]);
}

#[test]
fn profile_changes_keeps_only_modified_fields() {
    let edits = vec![("name", " Ana ".to_owned()), ("dni", "12345678".to_owned()), ("phone", "999 111 222".to_owned())];
    let changes = profile_changes(&session(), &edits).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes.get("dni"), Some(&json!("12345678")));
}

#[test]
fn profile_changes_rejects_blank_name() {
    let edits = vec![("name", "   ".to_owned())];
    assert_eq!(profile_changes(&session(), &edits).unwrap_err().field, "name");
}

#[test]
fn profile_changes_empty_when_nothing_changed() {
    let edits = vec![("name", "Ana".to_owned()), ("phone", "999 111 222".to_owned())];
    assert!(profile_changes(&session(), &edits).unwrap().is_empty());
}

#[test]
fn seed_edits_fills_from_session() {
    let seeded = seed_edits(&session(), &[], &[]);
    assert_eq!(
        seeded,
        vec![("name", "Ana".to_owned()), ("dni", String::new()), ("phone", "999 111 222".to_owned())]
    );
}

#[test]
fn seed_edits_keeps_typed_values_when_profile_refreshes() {
    let typed = vec![("name", "Ana María".to_owned()), ("dni", String::new()), ("phone", "999 111 222".to_owned())];
    let mut refreshed = session();
    refreshed.merge_profile(UserData::from_iter([
        ("name".to_owned(), json!("Ana B.")),
        ("dni".to_owned(), json!("12345678")),
    ]));

    let seeded = seed_edits(&refreshed, &typed, &["name"]);

    assert_eq!(seeded[0], ("name", "Ana María".to_owned()));
    assert_eq!(seeded[1], ("dni", "12345678".to_owned()));
}
