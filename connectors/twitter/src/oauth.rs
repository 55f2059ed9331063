//! Bridge between outbound requests and the injected OAuth signer.

use std::sync::Arc;

use reqwest::{Method, header::HeaderValue};
use teensy_oauth::{OAuthError, RequestSigner, SignableRequest};

use crate::error::TwitterResult;

/// Produces `Authorization` headers through a shared [`RequestSigner`].
#[derive(Clone)]
pub(crate) struct Authorizer {
    signer: Arc<dyn RequestSigner>,
}

impl Authorizer {
    pub(crate) fn new(signer: Arc<dyn RequestSigner>) -> Self {
        Self { signer }
    }

    /// Sign a request about to be sent to `url`.
    ///
    /// `form` must be exactly the fields that go into the request body.
    pub(crate) fn authorize(
        &self,
        method: &Method,
        url: &str,
        form: &[(String, String)],
    ) -> TwitterResult<HeaderValue> {
        let request = SignableRequest {
            method: method.as_str(),
            url,
            form,
        };
        let header = self.signer.authorization(&request)?;

        let mut value = HeaderValue::from_str(&header)
            .map_err(|e| OAuthError::SignatureError(format!("Invalid Authorization header: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}
