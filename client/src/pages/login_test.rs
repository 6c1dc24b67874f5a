use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  ana@example.com ", " secreto "),
        Ok(("ana@example.com".to_owned(), " secreto ".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_bad_email_first() {
    assert_eq!(validate_login_input("ana", "").unwrap_err().field, "email");
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("ana@example.com", "").unwrap_err().field, "password");
}
