//! Teensy Twitter
//!
//! A minimal client for four Twitter REST API v1.1 endpoints:
//!
//! | Operation | Request |
//! |---|---|
//! | [`TwitterClient::update_status`] | `POST /1.1/statuses/update.json` |
//! | [`TwitterClient::new_direct_message`] | `POST /1.1/direct_messages/new.json` |
//! | [`TwitterClient::user_timeline_statuses`] | `GET /1.1/statuses/user_timeline.json` |
//! | [`TwitterClient::home_timeline_statuses`] | `GET /1.1/statuses/home_timeline.json` |
//!
//! Every request is signed by an injected [`RequestSigner`]; the default is
//! OAuth 1.0a HMAC-SHA1 from [`teensy_oauth`].
//!
//! ```rust,ignore
//! use teensy_twitter::{OAuthConfig, TwitterClient};
//!
//! let client = TwitterClient::new(OAuthConfig::new(
//!     "consumer_key",
//!     "consumer_secret",
//!     "access_token",
//!     "access_token_secret",
//! ))?;
//!
//! for tweet in client.user_timeline_statuses().await? {
//!     println!("{}", tweet.text());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod decode;
mod error;
mod oauth;
mod types;

pub use client::TwitterClient;
pub use config::TwitterConfig;
pub use decode::{CREATED_AT_FORMAT, decode_timeline, decode_timeline_reader};
pub use error::{TwitterError, TwitterResult};
pub use teensy_oauth::{OAuth1Signer, OAuthConfig, RequestSigner, SignableRequest};
pub use types::{Tweet, TwitterUser};
