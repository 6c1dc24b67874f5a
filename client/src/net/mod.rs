//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs raw exchanges, `http` is the authorized gateway that
//! classifies failures, `api` names the endpoints, and `types` defines the
//! wire schema.

pub mod api;
pub mod http;
pub mod transport;
pub mod types;
