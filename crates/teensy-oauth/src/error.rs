//! OAuth error types.

/// OAuth errors.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Invalid credential configuration.
    #[error("Invalid OAuth configuration: {0}")]
    InvalidConfig(String),

    /// URL parsing failed.
    #[error("URL parsing failed: {0}")]
    UrlError(#[from] url::ParseError),

    /// Signature could not be computed.
    #[error("OAuth 1.0a signature error: {0}")]
    SignatureError(String),
}

/// Result type for OAuth operations.
pub type OAuthResult<T> = Result<T, OAuthError>;
