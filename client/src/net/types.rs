//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Request bodies use the API's camelCase field names. The `user` record is
//! open-ended: only `name` is interpreted, everything else is carried through
//! untouched so landing pages can read additional fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::LoginError;

/// Which login surface submitted the credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginKind {
    Parent,
    Child,
}

impl LoginKind {
    /// Endpoint path relative to the API origin.
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Parent => "/auth/login",
            Self::Child => "/auth/child-login",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
        }
    }
}

/// Parent credentials: registered phone number and PIN.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentLoginRequest {
    pub phone_number: String,
    pub pin: String,
}

/// Child credentials: jar identifier and the child's PIN.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildLoginRequest {
    pub jar_id: String,
    pub child_pin: String,
}

/// One submitted login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LoginCredentials {
    Parent(ParentLoginRequest),
    Child(ChildLoginRequest),
}

impl LoginCredentials {
    #[must_use]
    pub fn parent(phone_number: impl Into<String>, pin: impl Into<String>) -> Self {
        Self::Parent(ParentLoginRequest { phone_number: phone_number.into(), pin: pin.into() })
    }

    #[must_use]
    pub fn child(jar_id: impl Into<String>, child_pin: impl Into<String>) -> Self {
        Self::Child(ChildLoginRequest { jar_id: jar_id.into(), child_pin: child_pin.into() })
    }

    #[must_use]
    pub fn kind(&self) -> LoginKind {
        match self {
            Self::Parent(_) => LoginKind::Parent,
            Self::Child(_) => LoginKind::Child,
        }
    }

    /// Presence check only. Whitespace-only values count as missing; no
    /// format validation is applied.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Validation`] when either field is empty.
    pub fn validate(&self) -> Result<(), LoginError> {
        let (first, second) = match self {
            Self::Parent(req) => (&req.phone_number, &req.pin),
            Self::Child(req) => (&req.jar_id, &req.child_pin),
        };
        if first.is_empty() || second.is_empty() {
            return Err(LoginError::Validation);
        }
        Ok(())
    }
}

/// User record returned alongside the session token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Non-string values (numbers, objects, `null`) read as no name.
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Non-blank display name, if the API sent one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

/// Token + user pair established by a successful login.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Short token prefix safe for logs.
    #[must_use]
    pub fn token_preview(&self) -> String {
        let prefix: String = self.token.chars().take(8).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token_preview())
            .field("user", &self.user)
            .finish()
    }
}
