//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Input validation lives in pure functions beside each page.

pub mod change_password;
pub mod event_detail;
pub mod events;
pub mod form;
pub mod google_callback;
pub mod login;
pub mod orders;
pub mod profile;
pub mod register;
pub mod reset_password;
