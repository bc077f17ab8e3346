//! Login submission flow shared by the parent and child forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms gather credentials and hold the busy guard; this module runs the
//! attempt and applies its side effects through the collaborator traits:
//! the session store, the notification sink and a [`Navigator`].
//!
//! ORDERING
//! ========
//! All side effects happen after the HTTP round trip completes. On success
//! the session is committed, then navigation fires, then the toast. On
//! failure only a toast is emitted and the session is left untouched.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use leptos_router::NavigateOptions;

use crate::config::ApiConfig;
use crate::net::api::attempt_login;
use crate::net::error::LoginError;
use crate::net::transport::HttpTransport;
use crate::net::types::{LoginCredentials, LoginKind, User};
use crate::state::session::SessionStore;
use crate::state::toast::{NotificationSink, Toast};

pub const PARENT_LANDING_ROUTE: &str = "/";
pub const CHILD_LANDING_ROUTE: &str = "/payment/lightning";
pub const LOGIN_ROUTE: &str = "/login";

/// Side-effect-only route transition.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Adapts the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Collaborators a login attempt reports to.
pub struct LoginEffects<'a> {
    pub sessions: &'a dyn SessionStore,
    pub notifications: &'a dyn NotificationSink,
    pub navigator: &'a dyn Navigator,
}

#[must_use]
pub fn landing_route(kind: LoginKind) -> &'static str {
    match kind {
        LoginKind::Parent => PARENT_LANDING_ROUTE,
        LoginKind::Child => CHILD_LANDING_ROUTE,
    }
}

/// Run one login attempt and apply its outcome.
///
/// The outcome is also returned so callers can react further, but every
/// failure has already been surfaced as a toast by the time this returns.
///
/// # Errors
///
/// Returns the [`LoginError`] that was reported to the user.
pub async fn submit_login<T>(
    transport: &T,
    api: &ApiConfig,
    effects: &LoginEffects<'_>,
    credentials: LoginCredentials,
) -> Result<(), LoginError>
where
    T: HttpTransport + ?Sized,
{
    let kind = credentials.kind();
    match attempt_login(transport, api, &credentials).await {
        Ok(session) => {
            let toast = success_toast(kind, &session.user);
            effects.sessions.login(session.token, session.user);
            effects.navigator.navigate(landing_route(kind));
            effects.notifications.notify(toast);
            Ok(())
        }
        Err(err) => {
            log::warn!("{} login failed: {err}", kind.label());
            effects.notifications.notify(failure_toast(kind, &err));
            Err(err)
        }
    }
}

/// Clear the session and return to the login page.
pub fn sign_out(sessions: &dyn SessionStore, navigator: &dyn Navigator) {
    sessions.logout();
    navigator.navigate(LOGIN_ROUTE);
}

// =============================================================================
// TOAST COPY
// =============================================================================

#[must_use]
pub fn success_toast(kind: LoginKind, user: &User) -> Toast {
    match kind {
        LoginKind::Parent => Toast::success(
            "Login Successful",
            format!("Welcome back, {}!", user.display_name().unwrap_or("User")),
        ),
        LoginKind::Child => Toast::success(
            "Yay! You're in!",
            format!("Welcome back, {}! Ready to save?", user.display_name().unwrap_or("Saver")),
        ),
    }
}

#[must_use]
pub fn failure_toast(kind: LoginKind, err: &LoginError) -> Toast {
    if matches!(err, LoginError::Validation) {
        return validation_toast(kind);
    }
    let message = err.user_message();
    match kind {
        LoginKind::Parent => Toast::error(
            "Login Failed",
            message.unwrap_or_else(|| "Invalid phone number or PIN".to_owned()),
        ),
        LoginKind::Child => Toast::error(
            "Oops! Something went wrong",
            message.unwrap_or_else(|| "Your Jar ID or PIN might be incorrect. Try again!".to_owned()),
        ),
    }
}

fn validation_toast(kind: LoginKind) -> Toast {
    match kind {
        LoginKind::Parent => Toast::error("Missing Fields", "Please enter both your phone number and PIN."),
        LoginKind::Child => Toast::error("Oops!", "Please fill in both Jar ID and PIN"),
    }
}
