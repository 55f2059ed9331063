//! Twitter REST API client.

use std::fmt;
use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, header::AUTHORIZATION};
use teensy_oauth::{OAuth1Signer, OAuthConfig, RequestSigner};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    config::TwitterConfig,
    decode::decode_timeline,
    error::{TwitterError, TwitterResult},
    oauth::Authorizer,
    types::Tweet,
};

const UPDATE_STATUS: &str = "/1.1/statuses/update.json";
const NEW_DIRECT_MESSAGE: &str = "/1.1/direct_messages/new.json";
const USER_TIMELINE: &str = "/1.1/statuses/user_timeline.json";
const HOME_TIMELINE: &str = "/1.1/statuses/home_timeline.json";

/// Twitter REST API client.
///
/// Cheap to clone; clones share the connection pool and the signer. Calls
/// are independent and may run concurrently.
#[derive(Clone)]
pub struct TwitterClient {
    client: Client,
    base_url: String,
    authorizer: Authorizer,
}

impl fmt::Debug for TwitterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TwitterClient {
    /// Create a client for `https://api.twitter.com` from the four credentials.
    pub fn new(credentials: OAuthConfig) -> TwitterResult<Self> {
        Self::from_config(&TwitterConfig::new(credentials))
    }

    /// Create a client from configuration, signing with OAuth 1.0a.
    pub fn from_config(config: &TwitterConfig) -> TwitterResult<Self> {
        config
            .credentials
            .validate()
            .map_err(|e| TwitterError::Config(e.to_string()))?;

        let mut builder =
            Client::builder().user_agent(format!("teensy-twitter/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TwitterError::Config(format!("Failed to build HTTP client: {e}")))?;

        let signer = OAuth1Signer::new(config.credentials.clone());
        Self::with_signer(client, &config.api_url, Arc::new(signer))
    }

    /// Create a client from its parts.
    ///
    /// `base_url` is the scheme and host the endpoint paths are appended to.
    pub fn with_signer(
        client: Client,
        base_url: &str,
        signer: Arc<dyn RequestSigner>,
    ) -> TwitterResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| TwitterError::Config(format!("Invalid API URL {base_url:?}: {e}")))?;
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(TwitterError::Config(format!(
                "API URL {base_url:?} must not have a query or fragment"
            )));
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            authorizer: Authorizer::new(signer),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post a new status.
    #[instrument(skip_all, fields(method = "POST", endpoint = UPDATE_STATUS))]
    pub async fn update_status(&self, status: &str) -> TwitterResult<()> {
        let form = vec![("status".to_string(), status.to_string())];
        self.post_form(UPDATE_STATUS, &form).await
    }

    /// Send a direct message to `screen_name`.
    #[instrument(skip(self, text), fields(method = "POST", endpoint = NEW_DIRECT_MESSAGE))]
    pub async fn new_direct_message(&self, screen_name: &str, text: &str) -> TwitterResult<()> {
        let form = vec![
            ("screen_name".to_string(), screen_name.to_string()),
            ("text".to_string(), text.to_string()),
        ];
        self.post_form(NEW_DIRECT_MESSAGE, &form).await
    }

    /// Get statuses from the authenticated user's timeline.
    #[instrument(skip(self), fields(method = "GET", endpoint = USER_TIMELINE))]
    pub async fn user_timeline_statuses(&self) -> TwitterResult<Vec<Tweet>> {
        self.get_tweets(USER_TIMELINE).await
    }

    /// Get statuses from the authenticated user's home timeline.
    #[instrument(skip(self), fields(method = "GET", endpoint = HOME_TIMELINE))]
    pub async fn home_timeline_statuses(&self) -> TwitterResult<Vec<Tweet>> {
        self.get_tweets(HOME_TIMELINE).await
    }

    async fn get_tweets(&self, endpoint: &str) -> TwitterResult<Vec<Tweet>> {
        let url = self.url(endpoint);
        let auth = self.authorizer.authorize(&Method::GET, &url, &[])?;

        let response = self.send(self.client.get(&url).header(AUTHORIZATION, auth)).await?;
        let bytes = response.bytes().await?;

        debug!(len = bytes.len(), "Decoding timeline");
        Ok(decode_timeline(&bytes)?)
    }

    async fn post_form(&self, endpoint: &str, form: &[(String, String)]) -> TwitterResult<()> {
        let url = self.url(endpoint);
        let auth = self.authorizer.authorize(&Method::POST, &url, form)?;

        self.send(
            self.client
                .post(&url)
                .header(AUTHORIZATION, auth)
                .form(form),
        )
        .await?;
        Ok(())
    }

    /// Dispatch a signed request, turning any non-2xx status into [`TwitterError::Api`].
    async fn send(&self, request: RequestBuilder) -> TwitterResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Twitter API responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        warn!(status = status.as_u16(), "Twitter API request failed");
        Err(TwitterError::Api {
            status: status.as_u16(),
            body,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
