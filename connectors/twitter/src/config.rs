//! Twitter client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use teensy_oauth::OAuthConfig;

/// Configuration for the Twitter client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// OAuth 1.0a credentials
    #[serde(flatten)]
    pub credentials: OAuthConfig,

    /// Base URL for the REST API (default: https://api.twitter.com)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Transport timeout; none is imposed when absent
    #[serde(default, with = "duration_secs")]
    pub timeout: Option<Duration>,
}

fn default_api_url() -> String {
    "https://api.twitter.com".into()
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

impl TwitterConfig {
    /// Configuration with default endpoint and no timeout.
    #[must_use]
    pub fn new(credentials: OAuthConfig) -> Self {
        Self {
            credentials,
            api_url: default_api_url(),
            timeout: None,
        }
    }

    /// Point the client at a different API host.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set a transport timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
