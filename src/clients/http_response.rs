//! HTTP response types for the Twilio API client.
//!
//! This module provides the [`HttpResponse`] type returned by every
//! [`HttpClient`](super::HttpClient). The body is kept as raw text; JSON
//! decoding happens only once the status has been classified.

use std::collections::HashMap;

/// An HTTP response as returned by the transport.
///
/// Header names are stored lowercased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use twilio_api::HttpResponse;
///
/// let response = HttpResponse::new(204, "")
///     .with_header("Twilio-Request-Id", "RQ123");
///
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("RQ123"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status_code: u16,
    /// The raw response body.
    pub content: String,
    /// Response headers keyed by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
}

impl HttpResponse {
    /// Creates a response with no headers.
    #[must_use]
    pub fn new(status_code: u16, content: impl Into<String>) -> Self {
        Self {
            status_code,
            content: content.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header value.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status_code >= 200 && self.status_code <= 299
    }

    /// Returns the first value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Twilio-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in support requests.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("twilio-request-id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_covers_2xx_only() {
        assert!(HttpResponse::new(200, "{}").is_ok());
        assert!(HttpResponse::new(204, "").is_ok());
        assert!(!HttpResponse::new(301, "").is_ok());
        assert!(!HttpResponse::new(404, "").is_ok());
        assert!(!HttpResponse::new(500, "").is_ok());
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let response = HttpResponse::new(200, "{}")
            .with_header("Content-Type", "application/json")
            .with_header("X-Multi", "a")
            .with_header("x-multi", "b");

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(response.headers["x-multi"], vec!["a", "b"]);
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_request_id_missing() {
        assert_eq!(HttpResponse::new(200, "{}").request_id(), None);
    }
}
