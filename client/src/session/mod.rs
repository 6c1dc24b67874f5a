//! Client-local session: the record, its durable cache, and the store that
//! owns both.
//!
//! DESIGN
//! ======
//! `model` holds the serializable record and its validity rule, `cache`
//! abstracts the durable key/value slot (localStorage in the browser, memory
//! elsewhere), and `store` serializes every mutation and persists after each.

pub mod cache;
pub mod model;
pub mod store;

pub use cache::{DurableCache, LocalStorageCache, MemoryCache, SESSION_CACHE_KEY};
pub use model::{Session, UserData};
pub use store::{AuthApi, MutationGuard, SessionStore};
