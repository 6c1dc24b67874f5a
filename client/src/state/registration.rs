//! Registration form model with role-conditioned fields.
//!
//! DESIGN
//! ======
//! The role-specific part of the form is a tagged variant rather than a flat
//! record with optional fields for both roles. Switching roles replaces the
//! variant with an empty one, so values typed for the other role never leak
//! into a submission, not even after switching back.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use serde::{Deserialize, Serialize};

use crate::net::types::RegisterRequest;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Participant,
    Organizer,
}

impl Role {
    /// Parse the wire tag, accepting the Spanish labels older accounts carry.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "participant" | "participante" => Some(Self::Participant),
            "organizer" | "organizador" => Some(Self::Organizer),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Participant => "participant",
            Self::Organizer => "organizer",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Participant => "Participante",
            Self::Organizer => "Organizador",
        }
    }
}

/// Role-specific profile fields. Serialized flat with a `role` tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Participant { dni: String, phone: String },
    Organizer { organization_name: String, contact_phone: String },
}

impl RoleProfile {
    /// Empty fields for `role`.
    #[must_use]
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Participant => Self::Participant { dni: String::new(), phone: String::new() },
            Role::Organizer => Self::Organizer { organization_name: String::new(), contact_phone: String::new() },
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Participant { .. } => Role::Participant,
            Self::Organizer { .. } => Role::Organizer,
        }
    }

    /// Set one role field; fields of the other role are ignored.
    pub fn set(&mut self, field: RoleField, value: String) {
        match (self, field) {
            (Self::Participant { dni, .. }, RoleField::Dni) => *dni = value,
            (Self::Participant { phone, .. }, RoleField::Phone) => *phone = value,
            (Self::Organizer { organization_name, .. }, RoleField::OrganizationName) => *organization_name = value,
            (Self::Organizer { contact_phone, .. }, RoleField::ContactPhone) => *contact_phone = value,
            _ => {}
        }
    }

    #[must_use]
    pub fn get(&self, field: RoleField) -> Option<&str> {
        match (self, field) {
            (Self::Participant { dni, .. }, RoleField::Dni) => Some(dni.as_str()),
            (Self::Participant { phone, .. }, RoleField::Phone) => Some(phone.as_str()),
            (Self::Organizer { organization_name, .. }, RoleField::OrganizationName) => {
                Some(organization_name.as_str())
            }
            (Self::Organizer { contact_phone, .. }, RoleField::ContactPhone) => Some(contact_phone.as_str()),
            _ => None,
        }
    }

    /// Trimmed copy, or the first missing/invalid field.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] naming the offending role field.
    pub fn validated(&self) -> Result<Self, FormError> {
        match self {
            Self::Participant { dni, phone } => {
                let dni = dni.trim();
                if dni.is_empty() || !dni.chars().all(|c| c.is_ascii_digit()) {
                    return Err(FormError::new(RoleField::Dni.name(), "Ingresa un DNI válido (solo números)."));
                }
                let phone = valid_phone(phone).ok_or(FormError::new(RoleField::Phone.name(), "Ingresa tu teléfono."))?;
                Ok(Self::Participant { dni: dni.to_owned(), phone })
            }
            Self::Organizer { organization_name, contact_phone } => {
                let organization_name = organization_name.trim();
                if organization_name.is_empty() {
                    return Err(FormError::new(
                        RoleField::OrganizationName.name(),
                        "Ingresa el nombre de la organización.",
                    ));
                }
                let contact_phone = valid_phone(contact_phone)
                    .ok_or(FormError::new(RoleField::ContactPhone.name(), "Ingresa un teléfono de contacto."))?;
                Ok(Self::Organizer { organization_name: organization_name.to_owned(), contact_phone })
            }
        }
    }
}

/// Input names of the role-specific fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleField {
    Dni,
    Phone,
    OrganizationName,
    ContactPhone,
}

impl RoleField {
    /// Wire/field name, matching backend validation keys.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dni => "dni",
            Self::Phone => "phone",
            Self::OrganizationName => "organization_name",
            Self::ContactPhone => "contact_phone",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dni => "DNI",
            Self::Phone => "Teléfono",
            Self::OrganizationName => "Organización",
            Self::ContactPhone => "Teléfono de contacto",
        }
    }

    /// Fields shown for `role`.
    #[must_use]
    pub fn for_role(role: Role) -> [Self; 2] {
        match role {
            Role::Participant => [Self::Dni, Self::Phone],
            Role::Organizer => [Self::OrganizationName, Self::ContactPhone],
        }
    }
}

/// First client-side validation failure, keyed like backend field errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FormError {
    #[must_use]
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Registration inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub profile: Option<RoleProfile>,
}

impl RegistrationForm {
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(RoleProfile::role)
    }

    /// Select `role`. Switching resets the role-specific fields; reselecting
    /// the current role keeps them.
    pub fn select_role(&mut self, role: Role) {
        if self.role() != Some(role) {
            self.profile = Some(RoleProfile::empty(role));
        }
    }

    pub fn set_role_field(&mut self, field: RoleField, value: String) {
        if let Some(profile) = self.profile.as_mut() {
            profile.set(field, value);
        }
    }

    #[must_use]
    pub fn role_field(&self, field: RoleField) -> &str {
        self.profile.as_ref().and_then(|p| p.get(field)).unwrap_or("")
    }

    /// Validate all inputs and build the wire request.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] in form order.
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::new("name", "Ingresa tu nombre."));
        }
        let email = validate_email(&self.email)?;
        validate_new_password(&self.password, &self.password_confirmation, "password", "password_confirmation")?;
        let profile = self
            .profile
            .as_ref()
            .ok_or(FormError::new("role", "Selecciona un tipo de cuenta."))?
            .validated()?;
        Ok(RegisterRequest {
            name: name.to_owned(),
            email,
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            profile,
        })
    }
}

/// Trimmed email with a minimal shape check.
///
/// # Errors
///
/// Returns a [`FormError`] on the `email` field.
pub fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'));
    if well_formed {
        Ok(email.to_owned())
    } else {
        Err(FormError::new("email", "Ingresa un correo válido."))
    }
}

/// Length and confirmation checks for a new password.
///
/// # Errors
///
/// Returns a [`FormError`] on `field` or on `confirmation_field`.
pub fn validate_new_password(
    password: &str,
    confirmation: &str,
    field: &'static str,
    confirmation_field: &'static str,
) -> Result<(), FormError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::new(field, "La contraseña debe tener al menos 8 caracteres."));
    }
    if password != confirmation {
        return Err(FormError::new(confirmation_field, "Las contraseñas no coinciden."));
    }
    Ok(())
}

fn valid_phone(raw: &str) -> Option<String> {
    let phone = raw.trim();
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    let allowed = phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'));
    (digits >= 6 && allowed).then(|| phone.to_owned())
}
