//! Backend base URL resolution.
//!
//! Every request goes through one configurable root. Resolution order:
//! 1. `<meta name="evently-api-url">` rendered by the host (browser only),
//! 2. `EVENTLY_API_URL` at compile time,
//! 3. [`DEFAULT_API_URL`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the meta tag the host renders into the shell.
pub const API_URL_META: &str = "evently-api-url";
/// Local backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a raw base URL, falling back to the default when
    /// the value is blank.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let base_url = normalize_base_url(raw).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Self { base_url }
    }

    /// Resolve the base URL for the current build and environment.
    #[must_use]
    pub fn resolve() -> Self {
        if let Some(url) = read_meta_base_url().as_deref().and_then(normalize_base_url) {
            return Self { base_url: url };
        }
        Self::new(option_env!("EVENTLY_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Trim whitespace and trailing slashes; `None` for blank input.
#[must_use]
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn read_meta_base_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_URL_META}\"]");
        let element = document.query_selector(&selector).ok().flatten()?;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
