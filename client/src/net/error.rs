//! Login failure taxonomy.

use super::transport::TransportError;

/// Why a login attempt did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// A required field was empty; no request was sent.
    #[error("missing fields")]
    Validation,

    /// Transport failure, non-2xx status, or undecodable body.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailure),

    /// 2xx status but the body lacked a token or user record.
    #[error("Invalid response: missing token or user data")]
    MalformedResponse,
}

impl LoginError {
    /// Text specific enough to show the user as-is. `None` means the form
    /// should fall back to its generic credentials message.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::RequestFailed(RequestFailure::Status { message, .. }) => Some(message.clone()),
            Self::MalformedResponse => Some(self.to_string()),
            Self::Validation | Self::RequestFailed(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 2xx status with a body that was not JSON.
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

impl From<TransportError> for LoginError {
    fn from(err: TransportError) -> Self {
        Self::RequestFailed(RequestFailure::Transport(err))
    }
}
