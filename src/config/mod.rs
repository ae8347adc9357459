//! Configuration types for the Twilio API client.
//!
//! This module provides the core configuration types used to initialize
//! a [`RestClient`](crate::RestClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TwilioConfig`]: The main configuration struct holding all client settings
//! - [`TwilioConfigBuilder`]: A builder for constructing [`TwilioConfig`] instances
//! - [`AccountSid`]: A validated account SID newtype
//! - [`AuthToken`]: A validated auth token newtype with masked debug output
//! - [`ApiVersion`]: An API version path segment
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{TwilioConfig, AccountSid, AuthToken};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("auth-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccountSid, AuthToken};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;
use newtypes::validate_host_segment;

/// Configuration for the Twilio API client.
///
/// Holds the credentials used for HTTP basic auth and the optional routing
/// settings (region and edge) that select a regional API host.
///
/// # Thread Safety
///
/// `TwilioConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads.
///
/// # API Keys
///
/// When authenticating with an API key instead of the account's auth token,
/// set [`username`](TwilioConfigBuilder::username) to the key SID and pass the
/// key secret as the auth token. The account SID still scopes requests.
#[derive(Clone, Debug)]
pub struct TwilioConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    username: Option<String>,
    region: Option<String>,
    edge: Option<String>,
    user_agent_extensions: Vec<String>,
    timeout: Option<Duration>,
}

impl TwilioConfig {
    /// Creates a new builder for constructing a `TwilioConfig`.
    #[must_use]
    pub fn builder() -> TwilioConfigBuilder {
        TwilioConfigBuilder::new()
    }

    /// Returns the account SID.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the basic auth username: the configured username, or the
    /// account SID when none was set.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username
            .as_deref()
            .unwrap_or_else(|| self.account_sid.as_ref())
    }

    /// Returns the region, if configured.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the edge location, if configured.
    #[must_use]
    pub fn edge(&self) -> Option<&str> {
        self.edge.as_deref()
    }

    /// Returns the extra `User-Agent` components.
    #[must_use]
    pub fn user_agent_extensions(&self) -> &[String] {
        &self.user_agent_extensions
    }

    /// Returns the default request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify TwilioConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwilioConfig>();
};

/// Builder for constructing [`TwilioConfig`] instances.
///
/// Required fields are `account_sid` and `auth_token`.
///
/// # Defaults
///
/// - `username`: the account SID
/// - `region` / `edge`: `None` (global `*.twilio.com` hosts)
/// - `user_agent_extensions`: empty
/// - `timeout`: `None` (left to the transport)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use twilio_api::{TwilioConfig, AccountSid, AuthToken};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .region("ie1")
///     .edge("dublin")
///     .user_agent_extension("my-app/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.region(), Some("ie1"));
/// ```
#[derive(Debug, Default)]
pub struct TwilioConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    username: Option<String>,
    region: Option<String>,
    edge: Option<String>,
    user_agent_extensions: Vec<String>,
    timeout: Option<Duration>,
}

impl TwilioConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account SID (required).
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the basic auth username, e.g. an API key SID.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the region (e.g. `ie1`, `au1`). Validated on [`build`](Self::build).
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the edge location (e.g. `dublin`, `sydney`). Validated on [`build`](Self::build).
    #[must_use]
    pub fn edge(mut self, edge: impl Into<String>) -> Self {
        self.edge = Some(edge.into());
        self
    }

    /// Appends a component to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_extension(mut self, extension: impl Into<String>) -> Self {
        self.user_agent_extensions.push(extension.into());
        self
    }

    /// Sets the default timeout applied to requests that do not carry one.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TwilioConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` are not set, and [`ConfigError::InvalidHostSegment`] if
    /// the region or edge is malformed.
    pub fn build(self) -> Result<TwilioConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        let region = self
            .region
            .map(|region| validate_host_segment("region", region))
            .transpose()?;
        let edge = self
            .edge
            .map(|edge| validate_host_segment("edge", edge))
            .transpose()?;

        Ok(TwilioConfig {
            account_sid,
            auth_token,
            username: self.username.filter(|username| !username.is_empty()),
            region,
            edge,
            user_agent_extensions: self.user_agent_extensions,
            timeout: self.timeout,
        })
    }
}
