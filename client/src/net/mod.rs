//! Networking modules for the external Sats Jar REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` holds the login and health operations
//! built on it, `types` defines the wire schema, and `error` the failure
//! taxonomy surfaced to the login forms.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
