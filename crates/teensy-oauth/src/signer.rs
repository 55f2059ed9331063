//! The signing capability consumed by API clients.

use crate::OAuthResult;

/// Description of an outbound request, as much as a signature needs.
///
/// Query parameters stay in `url`; form fields are only present for
/// `application/x-www-form-urlencoded` bodies.
#[derive(Debug, Clone, Copy)]
pub struct SignableRequest<'a> {
    /// HTTP method, case-insensitive.
    pub method: &'a str,
    /// Full request URL, including any query string.
    pub url: &'a str,
    /// Form-encoded body fields.
    pub form: &'a [(String, String)],
}

impl<'a> SignableRequest<'a> {
    /// A bodiless GET request.
    #[must_use]
    pub const fn get(url: &'a str) -> Self {
        Self {
            method: "GET",
            url,
            form: &[],
        }
    }

    /// A POST request with a form-encoded body.
    #[must_use]
    pub const fn post(url: &'a str, form: &'a [(String, String)]) -> Self {
        Self {
            method: "POST",
            url,
            form,
        }
    }
}

/// Something that can authorize a request.
///
/// Implementations return the complete value of the `Authorization` header.
pub trait RequestSigner: Send + Sync {
    /// Produce the `Authorization` header value for `request`.
    fn authorization(&self, request: &SignableRequest<'_>) -> OAuthResult<String>;
}

impl<S: RequestSigner + ?Sized> RequestSigner for std::sync::Arc<S> {
    fn authorization(&self, request: &SignableRequest<'_>) -> OAuthResult<String> {
        (**self).authorization(request)
    }
}
