//! Twilio API version definitions.
//!
//! This module provides the [`ApiVersion`] enum naming the version path
//! segment a [`Version`](crate::rest::Version) prefixes onto every URI.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Twilio API version path segment.
///
/// Each Twilio product domain publishes its own versions: the core `api`
/// domain uses dated versions (`2010-04-01`) while newer products use
/// `v1`, `v2` and so on.
///
/// # Example
///
/// ```rust
/// use twilio_api::ApiVersion;
///
/// let version: ApiVersion = "2010-04-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2010_04_01);
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::Custom("v2".to_string()));
///
/// assert_eq!(ApiVersion::V1.to_string(), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The dated core API version used by the `api` domain.
    V2010_04_01,
    /// Version 1, used by the `conversations` domain among others.
    V1,
    /// Any other version segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns the path segment for this version.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2010_04_01 => "2010-04-01",
            Self::V1 => "v1",
            Self::Custom(s) => s,
        }
    }

    fn is_valid_segment(s: &str) -> bool {
        // Either vN or YYYY-MM-DD
        if let Some(number) = s.strip_prefix('v') {
            return !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());
        }

        let parts: Vec<&str> = s.split('-').collect();
        parts.len() == 3
            && parts[0].len() == 4
            && parts[1].len() == 2
            && parts[2].len() == 2
            && parts
                .iter()
                .all(|part| part.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('/').to_lowercase();

        match s.as_str() {
            "2010-04-01" => Ok(Self::V2010_04_01),
            "v1" => Ok(Self::V1),
            _ => {
                if Self::is_valid_segment(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
