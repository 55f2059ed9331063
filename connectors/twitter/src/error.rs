//! Twitter client error types.

use teensy_oauth::OAuthError;
use thiserror::Error;

/// Twitter client errors.
///
/// Every failure reaches the caller as one of these variants; nothing is
/// retried or recovered locally.
#[derive(Error, Debug)]
pub enum TwitterError {
    /// The request never produced an HTTP response (DNS, TLS, timeout, reset).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Twitter answered with a non-2xx status.
    #[error("Request failed with code: {status} and body {body}")]
    Api { status: u16, body: String },

    /// A 2xx body did not match the expected schema or timestamp format.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be signed.
    #[error("OAuth error: {0}")]
    Signing(#[from] OAuthError),

    /// The client could not be constructed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TwitterError {
    /// HTTP status of an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an API error.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for Twitter operations.
pub type TwitterResult<T> = Result<T, TwitterError>;
