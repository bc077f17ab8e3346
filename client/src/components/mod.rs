//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the login surfaces and app chrome while reading/writing
//! shared state from Leptos context providers.

pub mod api_status;
pub mod child_login_form;
pub mod parent_login_form;
pub mod toast_host;
