//! Error types for REST operations.
//!
//! Every core operation classifies the response status before decoding the
//! body. The outcomes map to these variants:
//!
//! - **Unexpected status**: [`RestError::Request`] carrying the attempted
//!   [`Operation`] and status code (plus the body, for `create`)
//! - **Body is not JSON**: [`RestError::Decode`]
//! - **Page without a recognisable records key**: [`RestError::AmbiguousPage`]
//! - **Malformed field value**: [`RestError::Parse`]
//! - **Transport failure**: [`RestError::Http`]
//!
//! `delete` is the one operation that reports failure as a value: any
//! non-5xx status other than 204 resolves to `Ok(false)`.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::RestError;
//!
//! match queues.create(params) {
//!     Ok(queue) => println!("Created {:?}", queue.sid),
//!     Err(RestError::Request(e)) if e.status_code == 400 => {
//!         println!("Rejected: {:?}", e.body);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::deserialize::ParseError;

/// The operation a request was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch one record.
    Fetch,
    /// Update one record.
    Update,
    /// Delete one record.
    Delete,
    /// Create one record.
    Create,
    /// Fetch one page of records.
    Page,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch record"),
            Self::Update => write!(f, "update record"),
            Self::Delete => write!(f, "delete record"),
            Self::Create => write!(f, "create record"),
            Self::Page => write!(f, "fetch page"),
        }
    }
}

/// An unexpected response status.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::{Operation, RequestError};
///
/// let error = RequestError {
///     operation: Operation::Create,
///     status_code: 500,
///     body: Some("boom".to_string()),
/// };
/// assert_eq!(error.to_string(), "[500] Unable to create record\nboom");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestError {
    /// The attempted operation.
    pub operation: Operation,
    /// The status code that was received.
    pub status_code: u16,
    /// The raw response body, attached for `create`.
    pub body: Option<String>,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Unable to {}", self.status_code, self.operation)?;
        if let Some(body) = &self.body {
            write!(f, "\n{body}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestError {}

/// Error type for REST operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The response status did not indicate success for the operation.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The response body was not valid JSON.
    #[error("Unable to {operation}: response body is not valid JSON: {source}")]
    Decode {
        /// The attempted operation.
        operation: Operation,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The records key of a page payload could not be determined.
    #[error("Page records can not be deserialized: expected exactly one records key, found {candidates:?}")]
    AmbiguousPage {
        /// The non-metadata keys found in the payload.
        candidates: Vec<String>,
    },

    /// The payload had an unexpected shape.
    #[error("Invalid payload: {message}")]
    InvalidPayload {
        /// Description of the problem.
        message: String,
    },

    /// A field value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The request could not be sent.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the response status code, for [`RestError::Request`].
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => Some(e.status_code),
            _ => None,
        }
    }
}
