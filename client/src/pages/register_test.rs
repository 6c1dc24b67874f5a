use super::*;
use crate::error::ApiError;
use crate::state::registration::RoleProfile;

fn validation(fields: &[(&str, &str)]) -> ApiError {
    ApiError::Validation {
        message: fields[0].1.to_owned(),
        fields: fields.iter().map(|(f, m)| ((*f).to_owned(), vec![(*m).to_owned()])).collect(),
    }
}

#[test]
fn duplicate_email_is_pinned_to_email_input() {
    let error = validation(&[("email", "ya registrado")]);
    let feedback = FieldFeedback::from_api(&error, &REGISTER_FIELDS).unwrap();
    assert!(feedback.is_for("email"));
    assert_eq!(feedback.message, "ya registrado");
}

#[test]
fn earliest_form_field_wins_when_backend_reports_several() {
    let error = validation(&[("contact_phone", "inválido"), ("name", "requerido")]);
    let feedback = FieldFeedback::from_api(&error, &REGISTER_FIELDS).unwrap();
    assert!(feedback.is_for("name"));
}

#[test]
fn role_fields_are_addressable_inline() {
    for field in ["dni", "phone", "organization_name", "contact_phone"] {
        assert!(REGISTER_FIELDS.contains(&field));
    }
    assert_eq!(
        serde_json::to_value(RoleProfile::empty(crate::state::registration::Role::Organizer)).unwrap()["role"],
        "organizer"
    );
}
