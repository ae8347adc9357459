//! The domain layer: a product base URL bound to a client.

use std::sync::Arc;

use crate::clients::{HttpError, HttpRequest, HttpResponse, RestClient};

/// A Twilio product domain, e.g. `https://api.twilio.com`.
///
/// A domain owns no state besides its base URL; it resolves relative URIs
/// against it and forwards requests to the [`RestClient`].
#[derive(Debug)]
pub struct Domain {
    client: Arc<RestClient>,
    base_url: String,
}

impl Domain {
    /// Creates a domain for `base_url`.
    #[must_use]
    pub fn new(client: Arc<RestClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the client requests are forwarded to.
    #[must_use]
    pub const fn client(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Resolves a URI against the base URL.
    ///
    /// Absolute `http(s)://` URLs are returned verbatim; anything else is
    /// joined to the base URL with exactly one `/` between them.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let domain = Domain::new(client, "https://api.twilio.com/");
    /// assert_eq!(
    ///     domain.absolute_url("/2010-04-01/Accounts.json"),
    ///     "https://api.twilio.com/2010-04-01/Accounts.json"
    /// );
    /// ```
    #[must_use]
    pub fn absolute_url(&self, uri: &str) -> String {
        if is_absolute(uri) {
            return uri.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_matches('/'),
            uri.trim_matches('/')
        )
    }

    /// Resolves the request URI and forwards the request to the client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub fn request(&self, mut request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.url = self.absolute_url(&request.url);
        self.client.request(request)
    }
}

/// Returns `true` for `http://` and `https://` URLs.
pub(crate) fn is_absolute(uri: &str) -> bool {
    uri.starts_with("https://") || uri.starts_with("http://")
}
