//! Twitter API v1.1 tweet and user objects.
//!
//! Only the fields below are mapped; anything else in the payload is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tweet as returned by the timeline endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet ID
    id: u64,

    /// Tweet text content
    text: String,

    /// Creation time, always UTC on the wire
    #[serde(with = "crate::decode::created_at")]
    created_at: DateTime<Utc>,

    /// Author of the tweet
    #[serde(rename = "user")]
    author: TwitterUser,
}

impl Tweet {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn author(&self) -> &TwitterUser {
        &self.author
    }
}

/// The author embedded in a [`Tweet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterUser {
    /// Display name
    name: String,

    /// Handle, without the leading `@`
    screen_name: String,
}

impl TwitterUser {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn screen_name(&self) -> &str {
        &self.screen_name
    }
}
