//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts) and form pieces while
//! reading shared state from Leptos context providers.

pub mod event_card;
pub mod field_error;
pub mod nav_bar;
pub mod role_fields;
pub mod toast_host;
