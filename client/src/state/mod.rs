//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`, `login`) so the login forms
//! and landing pages depend on small focused models provided via context.

pub mod login;
pub mod session;
pub mod toast;
