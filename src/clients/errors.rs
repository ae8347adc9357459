//! Transport-level error types.
//!
//! These errors describe failures to *send* a request or receive a response.
//! A response with a non-2xx status is not an error at this layer; status
//! classification happens in [`crate::rest`].
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::clients::{HttpClient, HttpError};
//!
//! match transport.request(request) {
//!     Ok(response) => println!("{}: {}", response.status_code, response.content),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Transport { message }) => println!("Transport error: {message}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "get".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send form data with a get request.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URI was empty.
    #[error("Request URI cannot be empty.")]
    EmptyUri,

    /// Form data was attached to a method that carries no body.
    #[error("Cannot send form data with a {method} request.")]
    BodyNotAllowed {
        /// The HTTP method of the rejected request.
        method: String,
    },
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any other transport failure, for custom [`HttpClient`](super::HttpClient) implementations.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_empty_uri() {
        assert_eq!(
            InvalidHttpRequestError::EmptyUri.to_string(),
            "Request URI cannot be empty."
        );
    }

    #[test]
    fn test_http_error_wraps_invalid_request_transparently() {
        let error: HttpError = InvalidHttpRequestError::BodyNotAllowed {
            method: "delete".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Cannot send form data with a delete request."
        );
    }

    #[test]
    fn test_transport_error_message() {
        let error = HttpError::Transport {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Transport error: connection reset");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::EmptyUri;
        let _ = invalid;

        let transport: &dyn std::error::Error = &HttpError::Transport {
            message: "x".to_string(),
        };
        let _ = transport;
    }
}
