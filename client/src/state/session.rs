//! Session store for the signed-in parent or child.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided at the app root. Login forms
//! write it through [`SessionStore`]; landing pages read it and redirect to
//! `/login` when it is empty.
//!
//! Lifecycle: starts empty, replaced wholesale on each successful login
//! (last login wins), cleared on logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Session, User};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Replace any prior session.
    pub fn login(&mut self, token: String, user: User) {
        self.session = Some(Session { token, user });
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// Write access to the current session.
pub trait SessionStore {
    fn login(&self, token: String, user: User);
    fn logout(&self);
    fn current(&self) -> Option<Session>;
}

impl SessionStore for RwSignal<SessionState> {
    fn login(&self, token: String, user: User) {
        self.update(|state| state.login(token, user));
    }

    fn logout(&self) {
        self.update(SessionState::logout);
    }

    fn current(&self) -> Option<Session> {
        self.with_untracked(|state| state.session.clone())
    }
}
