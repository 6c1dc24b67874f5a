//! Durable key/value slot holding the serialized session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session store writes here. The browser build persists to
//! `localStorage`; SSR and tests use [`MemoryCache`].

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::sync::Mutex;

/// localStorage key for the session record.
pub const SESSION_CACHE_KEY: &str = "evently_session";

/// A single-record persistent slot.
pub trait DurableCache: Send + Sync {
    fn read(&self) -> Option<String>;

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns a description of the storage failure (quota, private mode).
    fn write(&self, raw: &str) -> Result<(), String>;

    fn clear(&self);
}

/// Browser `localStorage` under a fixed key.
#[derive(Clone, Debug)]
pub struct LocalStorageCache {
    key: String,
}

impl LocalStorageCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageCache {
    fn default() -> Self {
        Self::new(SESSION_CACHE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl DurableCache for LocalStorageCache {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, raw: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_owned())?;
            storage
                .set_item(&self.key, raw)
                .map_err(|e| format!("localStorage write failed: {e:?}"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
            Ok(())
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-process slot for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slot: Mutex<Option<String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache pre-seeded with `raw`, as if written by an earlier page load.
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(raw.into())) }
    }
}

impl DurableCache for MemoryCache {
    fn read(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn write(&self, raw: &str) -> Result<(), String> {
        *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(raw.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }
}
