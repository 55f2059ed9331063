//! Teensy OAuth - OAuth 1.0a request signing
//!
//! Twitter's v1.1 REST API authenticates user-context requests with OAuth 1.0a
//! signatures. This crate owns the credentials and produces the
//! `Authorization` header for an outbound request; it knows nothing about
//! the API being called.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use teensy_oauth::{OAuth1Signer, OAuthConfig, RequestSigner, SignableRequest};
//!
//! let signer = OAuth1Signer::new(OAuthConfig::new(
//!     "consumer_key",
//!     "consumer_secret",
//!     "access_token",
//!     "access_token_secret",
//! ));
//!
//! let form = vec![("status".to_string(), "Hello, World!".to_string())];
//! let header = signer.authorization(&SignableRequest::post(
//!     "https://api.twitter.com/1.1/statuses/update.json",
//!     &form,
//! ))?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod oauth1;
mod signer;

pub use config::OAuthConfig;
pub use error::{OAuthError, OAuthResult};
pub use oauth1::OAuth1Signer;
pub use signer::{RequestSigner, SignableRequest};

/// Signature method advertised in every signed request.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// OAuth protocol version advertised in every signed request.
pub const OAUTH_VERSION: &str = "1.0";
