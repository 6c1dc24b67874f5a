use super::*;

#[test]
fn requires_current_password() {
    assert_eq!(validate_change_password("", "nuevo1234", "nuevo1234").unwrap_err().field, "current_password");
}

#[test]
fn short_new_password_is_rejected() {
    assert_eq!(validate_change_password("viejo1234", "corta", "corta").unwrap_err().field, "new_password");
}

#[test]
fn mismatched_confirmation_is_pinned_to_confirmation() {
    let error = validate_change_password("viejo1234", "nuevo1234", "nuevo12345").unwrap_err();
    assert_eq!(error.field, "new_password_confirmation");
}

#[test]
fn reusing_current_password_is_rejected() {
    assert_eq!(validate_change_password("igual1234", "igual1234", "igual1234").unwrap_err().field, "new_password");
}

#[test]
fn valid_input_builds_request() {
    let request = validate_change_password("viejo1234", "nuevo1234", "nuevo1234").unwrap();
    assert_eq!(request.new_password_confirmation, "nuevo1234");
    assert!(PASSWORD_FIELDS.contains(&"current_password"));
}
