//! HTTP request types for the Twilio API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! starts out with a URI relative to a [`Version`](crate::rest::Version) and is
//! rewritten to an absolute URL as it passes through the version and domain
//! layers on its way to the transport.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::clients::errors::InvalidHttpRequestError;
use crate::values::{Param, ParamValue, ParameterSet};

/// HTTP methods used by the Twilio REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method may carry a form body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// HTTP basic auth credentials.
///
/// The password is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// The username (account SID or API key SID).
    pub username: String,
    /// The password (auth token or API key secret).
    pub password: String,
}

impl BasicAuth {
    /// Creates basic auth credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

/// An HTTP request to be sent through an [`HttpClient`](super::HttpClient).
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/Accounts/AC123/Queues.json")
///     .data("FriendlyName", "support")
///     .data("MaxSize", 100)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.data.len(), 2);
/// assert!(!request.allow_redirects);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The URI or absolute URL for this request.
    pub url: String,
    /// Query string parameters.
    pub params: ParameterSet,
    /// Form body parameters.
    pub data: ParameterSet,
    /// Additional headers to include in the request.
    pub headers: HashMap<String, String>,
    /// Basic auth credentials. Filled from the client configuration when `None`.
    pub auth: Option<BasicAuth>,
    /// Request timeout. Left to the transport when `None`.
    pub timeout: Option<Duration>,
    /// Whether the transport may follow redirects (default: `false`).
    pub allow_redirects: bool,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `uri` - The URI (relative to the version) or an absolute URL
    #[must_use]
    pub fn builder(method: HttpMethod, uri: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, uri)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the URI is empty
    /// - form data is set on a GET or DELETE request
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyUri);
        }

        if !self.data.is_empty() && !self.method.allows_body() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    url: String,
    params: ParameterSet,
    data: ParameterSet,
    headers: HashMap<String, String>,
    auth: Option<BasicAuth>,
    timeout: Option<Duration>,
    allow_redirects: bool,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, uri: impl Into<String>) -> Self {
        Self {
            method,
            url: uri.into(),
            params: ParameterSet::new(),
            data: ParameterSet::new(),
            headers: HashMap::new(),
            auth: None,
            timeout: None,
            allow_redirects: false,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Sets all form body parameters at once.
    #[must_use]
    pub fn form(mut self, data: ParameterSet) -> Self {
        self.data = data;
        self
    }

    /// Adds a single form body parameter.
    #[must_use]
    pub fn data(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.data.insert(key, value);
        self
    }

    /// Adds a form body parameter unless it is unset.
    #[must_use]
    pub fn data_param<T: Into<ParamValue>>(
        mut self,
        key: impl Into<String>,
        value: Param<T>,
    ) -> Self {
        self.data = self.data.with(key, value);
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Overrides the basic auth credentials.
    #[must_use]
    pub fn auth(mut self, auth: BasicAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Allows the transport to follow redirects.
    #[must_use]
    pub const fn allow_redirects(mut self, allow: bool) -> Self {
        self.allow_redirects = allow;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            method: self.method,
            url: self.url,
            params: self.params,
            data: self.data,
            headers: self.headers,
            auth: self.auth,
            timeout: self.timeout,
            allow_redirects: self.allow_redirects,
        };
        request.verify()?;
        Ok(request)
    }
}
