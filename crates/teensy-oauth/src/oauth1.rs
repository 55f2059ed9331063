//! OAuth 1.0a HMAC-SHA1 signing.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD as BASE64, URL_SAFE_NO_PAD},
};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use rand::RngCore;
use sha1::Sha1;
use url::{Position, Url};

use crate::{
    OAUTH_VERSION, OAuthConfig, OAuthError, OAuthResult, RequestSigner, SIGNATURE_METHOD,
    SignableRequest,
};

/// Everything outside the RFC 3986 unreserved set: ALPHA / DIGIT / "-" / "." / "_" / "~"
const OAUTH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// OAuth 1.0a signer holding a fixed credential set.
#[derive(Debug, Clone)]
pub struct OAuth1Signer {
    config: OAuthConfig,
}

impl OAuth1Signer {
    /// Create a signer from credentials.
    #[must_use]
    pub const fn new(config: OAuthConfig) -> Self {
        Self { config }
    }

    /// Build the `Authorization` header with a caller-supplied nonce and timestamp.
    ///
    /// [`RequestSigner::authorization`] calls this with a fresh random nonce and
    /// the current Unix time.
    pub fn sign_with(
        &self,
        request: &SignableRequest<'_>,
        nonce: &str,
        timestamp: u64,
    ) -> OAuthResult<String> {
        let mut oauth_params = self.oauth_params(nonce, timestamp);

        let base_string = signature_base_string(request, &oauth_params)?;
        let signature = self.hmac_sha1(&base_string)?;
        oauth_params.push(("oauth_signature".to_string(), signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {header}"))
    }

    fn oauth_params(&self, nonce: &str, timestamp: u64) -> Vec<(String, String)> {
        vec![
            (
                "oauth_consumer_key".to_string(),
                self.config.consumer_key.clone(),
            ),
            ("oauth_nonce".to_string(), nonce.to_string()),
            (
                "oauth_signature_method".to_string(),
                SIGNATURE_METHOD.to_string(),
            ),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.config.access_token.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ]
    }

    fn hmac_sha1(&self, data: &str) -> OAuthResult<String> {
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.config.consumer_secret),
            percent_encode(&self.config.access_token_secret)
        );

        let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes())
            .map_err(|e| OAuthError::SignatureError(e.to_string()))?;
        mac.update(data.as_bytes());

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

impl RequestSigner for OAuth1Signer {
    fn authorization(&self, request: &SignableRequest<'_>) -> OAuthResult<String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| OAuthError::SignatureError(format!("Failed to get timestamp: {e}")))?
            .as_secs();

        self.sign_with(request, &generate_nonce(), timestamp)
    }
}

/// Build the RFC 5849 signature base string.
fn signature_base_string(
    request: &SignableRequest<'_>,
    oauth_params: &[(String, String)],
) -> OAuthResult<String> {
    let parsed = Url::parse(request.url)?;
    let base_url = &parsed[..Position::AfterPath];

    let mut params: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    params.extend(
        parsed
            .query_pairs()
            .map(|(k, v)| (percent_encode(&k), percent_encode(&v))),
    );
    params.extend(
        request
            .form
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v))),
    );
    params.sort();

    let param_string = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}&{}&{}",
        request.method.to_uppercase(),
        percent_encode(base_url),
        percent_encode(&param_string)
    ))
}

/// Percent-encode a string according to RFC 3986.
fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// Generate a random nonce.
fn generate_nonce() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
