//! Login and health-check operations against the Sats Jar API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `attempt_login` turns one submitted form into exactly one POST and a
//! typed outcome. It never touches session or notification state; the login
//! flow in `util::login_flow` applies those side effects afterwards.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (empty fields, transport, status, body shape) comes back as
//! a [`LoginError`] value. Nothing panics and nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde_json::Value;

use super::error::{LoginError, RequestFailure};
use super::transport::{HttpReply, HttpTransport, TransportError};
use super::types::{LoginCredentials, Session, User};
use crate::config::ApiConfig;

pub const HEALTH_PATH: &str = "/health";

fn login_failed_message(status: u16) -> String {
    format!("Login failed with status: {status}")
}

/// Submit credentials and interpret the reply.
///
/// Blank fields short-circuit before any request is issued.
///
/// # Errors
///
/// Returns [`LoginError::Validation`] for empty fields,
/// [`LoginError::RequestFailed`] for transport errors, non-2xx statuses and
/// undecodable 2xx bodies, and [`LoginError::MalformedResponse`] when a 2xx
/// body lacks `token` or `user`.
pub async fn attempt_login<T>(transport: &T, api: &ApiConfig, credentials: &LoginCredentials) -> Result<Session, LoginError>
where
    T: HttpTransport + ?Sized,
{
    credentials.validate()?;

    let kind = credentials.kind();
    let url = api.endpoint(kind.login_path());
    let body = serde_json::to_value(credentials).map_err(|e| TransportError::Encode(e.to_string()))?;

    log::debug!("attempting {} login at {url}", kind.label());
    let reply = transport.post_json(&url, &body).await.map_err(|e| {
        log::warn!("{} login request failed: {e}", kind.label());
        LoginError::from(e)
    })?;
    log::debug!("{} login response status: {}", kind.label(), reply.status);

    let session = interpret_login_reply(&reply)?;
    log::debug!("{} login established session {}", kind.label(), session.token_preview());
    Ok(session)
}

#[derive(Deserialize)]
struct LoginResponseBody {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<Value>,
}

/// Classify a login reply. The body is parsed as JSON regardless of status.
pub(crate) fn interpret_login_reply(reply: &HttpReply) -> Result<Session, LoginError> {
    let parsed = serde_json::from_str::<Value>(&reply.body);

    if !reply.is_success() {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(error_field)
            .unwrap_or_else(|| login_failed_message(reply.status));
        return Err(RequestFailure::Status { status: reply.status, message }.into());
    }

    let value = parsed.map_err(|e| RequestFailure::Decode(e.to_string()))?;
    if !value.is_object() {
        return Err(LoginError::MalformedResponse);
    }
    let body: LoginResponseBody = serde_json::from_value(value).map_err(|_| LoginError::MalformedResponse)?;

    let token = body
        .token
        .filter(|token| !token.is_empty())
        .ok_or(LoginError::MalformedResponse)?;
    let user = match body.user {
        Some(user @ Value::Object(_)) => {
            serde_json::from_value::<User>(user).map_err(|_| LoginError::MalformedResponse)?
        }
        _ => return Err(LoginError::MalformedResponse),
    };

    Ok(Session { token, user })
}

fn error_field(body: &Value) -> Option<String> {
    body.get("error")?
        .as_str()
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

// =============================================================================
// HEALTH PROBE
// =============================================================================

/// Advisory connectivity state shown on the parent login view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Checking,
    Connected,
    /// The API answered with a non-2xx status.
    Failed { status: u16, status_text: String },
    /// The request itself failed.
    Error(String),
}

impl ApiStatus {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Checking => "Checking API connection...".to_owned(),
            Self::Connected => "API connected successfully".to_owned(),
            Self::Failed { status, status_text } => format!("API connection failed: {status} {status_text}")
                .trim_end()
                .to_owned(),
            Self::Error(detail) => format!("API connection error: {detail}"),
        }
    }
}

/// GET `/health` once. Success is decided by status code alone.
pub async fn probe_health<T>(transport: &T, api: &ApiConfig) -> ApiStatus
where
    T: HttpTransport + ?Sized,
{
    let url = api.endpoint(HEALTH_PATH);
    match transport.get(&url).await {
        Ok(reply) if reply.is_success() => ApiStatus::Connected,
        Ok(reply) => {
            log::warn!("API health check returned {}", reply.status);
            ApiStatus::Failed { status: reply.status, status_text: reply.status_text }
        }
        Err(e) => {
            log::warn!("API health check failed: {e}");
            ApiStatus::Error(e.to_string())
        }
    }
}
