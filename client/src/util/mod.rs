//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate orchestration and browser concerns from page and
//! component rendering to improve reuse and testability.

pub mod auth;
pub mod login_flow;
