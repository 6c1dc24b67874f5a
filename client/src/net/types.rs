//! Request/response DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Response types decode leniently: identifiers arrive as numbers or strings,
//! money as numbers or decimal strings, and optional presentation fields may
//! be absent. Request types serialize exactly the fields the backend reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::session::UserData;
use crate::state::registration::RoleProfile;

/// Email + password login body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account registration body; role fields are flattened beside the tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

/// Identity returned by login, registration and the OAuth callback.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default, alias = "access_token")]
    pub token: Option<String>,
    #[serde(default, alias = "userData", alias = "data")]
    pub user: UserData,
}

/// Error body shape: `{ message?, errors?: { field: [message] } }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ErrorBody {
    /// Parse an error body; anything unparseable yields an empty body.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Non-blank top-level message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    /// Field errors in arrival order; a bare string counts as one message.
    #[must_use]
    pub fn field_errors(&self) -> Vec<(String, Vec<String>)> {
        let Some(errors) = &self.errors else {
            return Vec::new();
        };
        errors
            .iter()
            .map(|(field, value)| {
                let messages = match value {
                    serde_json::Value::String(s) => vec![s.clone()],
                    serde_json::Value::Array(items) => {
                        items.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect()
                    }
                    _ => Vec::new(),
                };
                (field.clone(), messages)
            })
            .collect()
    }
}

/// Password-reset request for an account email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

/// Acknowledgement body carrying an optional human-readable message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// A public event listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Start date/time as sent by the backend (ISO 8601).
    #[serde(default, alias = "start_date")]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub price: Option<f64>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Tickets still available, when the backend tracks them.
    #[serde(default)]
    pub available: Option<u32>,
}

impl Event {
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.available == Some(0)
    }
}

/// A ticket order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub event_id: String,
    pub quantity: u32,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub event_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateOrderRequest {
    pub event_id: String,
    pub quantity: u32,
}

/// Collection responses arrive bare or wrapped in `{ "data": [...] }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Single-resource responses arrive bare or wrapped in `{ "data": {...} }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Single<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Single<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Bare(item) | Self::Wrapped { data: item } => item,
        }
    }
}

/// Profile fields from a profile response: `{ user: {...} }`, `{ data: {...} }`
/// or the bare object. A top-level status `message` is not a profile field.
#[must_use]
pub fn profile_fields(body: serde_json::Value) -> UserData {
    let serde_json::Value::Object(mut map) = body else {
        return UserData::new();
    };
    for wrapper in ["user", "data"] {
        if matches!(map.get(wrapper), Some(serde_json::Value::Object(_))) {
            if let Some(serde_json::Value::Object(inner)) = map.remove(wrapper) {
                return inner;
            }
        }
    }
    map.shift_remove("message");
    map
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid amount {s:?}"))),
        Some(_) => Err(D::Error::custom("expected number or numeric string")),
    }
}
