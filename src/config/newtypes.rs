//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Twilio account SID.
///
/// Account SIDs are `AC` followed by 32 alphanumeric characters.
///
/// # Example
///
/// ```rust
/// use twilio_api::AccountSid;
///
/// let sid = AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
/// assert_eq!(sid.as_ref(), "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
/// assert!(AccountSid::new("PNaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountSid(String);

impl AccountSid {
    const PREFIX: &'static str = "AC";
    const LEN: usize = 34;

    /// Creates a new validated account SID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountSid`] if the value is not an
    /// `AC`-prefixed 34 character identifier.
    pub fn new(sid: impl Into<String>) -> Result<Self, ConfigError> {
        let sid = sid.into();
        let sid = sid.trim().to_string();

        let valid = sid.len() == Self::LEN
            && sid.starts_with(Self::PREFIX)
            && sid.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(ConfigError::InvalidAccountSid { sid });
        }

        Ok(Self(sid))
    }
}

impl AsRef<str> for AccountSid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountSid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountSid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Twilio auth token (or API key secret).
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use twilio_api::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// Validates a region or edge name used to build regional hostnames.
pub(crate) fn validate_host_segment(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ConfigError> {
    let value = value.into();
    let valid = !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(value)
    } else {
        Err(ConfigError::InvalidHostSegment { field, value })
    }
}
