//! Error types for the Twilio API client.
//!
//! This module contains error types used throughout the client for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account SID does not have the expected shape.
    #[error("Invalid account SID '{sid}'. Expected 'AC' followed by 32 alphanumeric characters.")]
    InvalidAccountSid {
        /// The invalid SID that was provided.
        sid: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Twilio auth token.")]
    EmptyAuthToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a path segment such as '2010-04-01' or 'v1'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A region or edge value is not a valid host segment.
    #[error("Invalid {field} '{value}'. Expected lowercase letters, digits and '-'.")]
    InvalidHostSegment {
        /// Which setting was rejected (`region` or `edge`).
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
