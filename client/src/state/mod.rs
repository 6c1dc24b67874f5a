//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toasts`, `registration`) so individual
//! components can depend on small focused models. Reactive wrappers
//! (`RwSignal<...>`) are created in `App` and provided via context.

pub mod auth;
pub mod registration;
pub mod toasts;
