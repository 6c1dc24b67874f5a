//! The persisted session record.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::registration::Role;

/// Profile fields returned by the backend, kept in arrival order.
pub type UserData = serde_json::Map<String, serde_json::Value>;

/// Current authenticated identity and bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_logged_in: bool,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user_data: UserData,
}

impl Session {
    /// A freshly authenticated session.
    #[must_use]
    pub fn new(token: impl Into<String>, user_data: UserData) -> Self {
        Self { is_logged_in: true, token: token.into(), user_data }
    }

    /// Authenticated iff flagged logged in and carrying a non-blank token.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_logged_in && !self.token.trim().is_empty()
    }

    /// Overwrite the given fields, keep everything else.
    pub fn merge_profile(&mut self, partial: UserData) {
        for (key, value) in partial {
            self.user_data.insert(key, value);
        }
    }

    /// String profile field, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.user_data.get(key).and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.field("role").and_then(Role::parse)
    }

    /// Name to show in navigation; falls back to the email.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.field("name")
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.field("email"))
    }

    /// Serialize for the durable cache.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if a profile value cannot be serialized.
    pub fn to_cache_record(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Parse and validate a cached record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedCache`] when the JSON is invalid or the
    /// record fails [`Session::is_valid`].
    pub fn from_cache_record(raw: &str) -> Result<Self, ApiError> {
        let session: Self = serde_json::from_str(raw).map_err(|e| ApiError::MalformedCache(e.to_string()))?;
        if !session.is_valid() {
            return Err(ApiError::MalformedCache("record is not an authenticated session".to_owned()));
        }
        Ok(session)
    }
}
