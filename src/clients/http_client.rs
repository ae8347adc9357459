//! HTTP transport for Twilio API communication.
//!
//! This module defines the [`HttpClient`] transport trait consumed by
//! [`RestClient`](super::RestClient) and its default implementation,
//! [`ReqwestHttpClient`], built on reqwest's blocking client.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The transport boundary.
///
/// Implementations send exactly one request per call and must return the
/// response for *any* status code. Non-2xx statuses are classified by the
/// caller, never turned into errors here.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// #[derive(Debug)]
/// struct AlwaysNoContent;
///
/// impl HttpClient for AlwaysNoContent {
///     fn request(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(204, ""))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync + Debug {
    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be sent or the
    /// response could not be read.
    fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Blocking reqwest transport.
///
/// Query parameters go on the URL, form data is sent as
/// `application/x-www-form-urlencoded`. Redirects are followed only when the
/// request sets `allow_redirects`.
///
/// # Thread Safety
///
/// `ReqwestHttpClient` is `Send + Sync`; reqwest clients pool connections
/// internally and are safe to share.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    /// Client that follows redirects.
    following: reqwest::blocking::Client,
    /// Client that never follows redirects.
    direct: reqwest::blocking::Client,
}

// Verify ReqwestHttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestHttpClient>();
};

impl ReqwestHttpClient {
    /// Creates a new transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new() -> Result<Self, HttpError> {
        let following = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .build()?;
        let direct = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { following, direct })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl HttpClient for ReqwestHttpClient {
    fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let client = if request.allow_redirects {
            &self.following
        } else {
            &self.direct
        };

        let mut req_builder = match request.method {
            HttpMethod::Get => client.get(&request.url),
            HttpMethod::Post => client.post(&request.url),
            HttpMethod::Put => client.put(&request.url),
            HttpMethod::Delete => client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params.to_pairs());
        }

        if !request.data.is_empty() {
            req_builder = req_builder.form(&request.data.to_pairs());
        }

        if let Some(auth) = &request.auth {
            req_builder = req_builder.basic_auth(&auth.username, Some(&auth.password));
        }

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let res = req_builder.send()?;

        let status_code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let content = res.text()?;

        tracing::trace!(
            method = %request.method,
            url = %request.url,
            status_code,
            "Received response"
        );

        Ok(HttpResponse {
            status_code,
            content,
            headers,
        })
    }
}
