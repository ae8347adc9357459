//! # Twilio API Rust SDK
//!
//! A Rust client for the Twilio REST API: typed configuration, a pluggable
//! blocking HTTP transport, and the request execution and pagination engine
//! every resource wrapper is built on.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TwilioConfig`] and [`TwilioConfigBuilder`]
//! - Validated newtypes for credentials ([`AccountSid`], [`AuthToken`])
//! - A [`RestClient`] that applies credentials, default headers and regional
//!   routing before handing requests to an [`HttpClient`] transport
//! - The [`rest`] engine: domain/version dispatch, status classification,
//!   and lazy cursor-based pagination across pages
//! - Sample resource wrappers under [`rest::resources`]
//! - Webhook signature validation via [`webhooks::RequestValidator`]
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, TwilioConfig};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .region("ie1")
//!     .edge("dublin")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.username(), "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use twilio_api::rest::resources::ReadOptions;
//! use twilio_api::RestClient;
//!
//! let client = Arc::new(RestClient::new(config)?);
//! let account = client.api().v2010().account();
//!
//! // Lazily stream up to 120 queues, following next-page links on demand
//! for queue in account.queues().stream(ReadOptions::limit(120))? {
//!     let queue = queue?;
//!     println!("{:?}: {:?}", queue.sid, queue.current_size);
//! }
//!
//! // Fetch, then delete
//! let queue = account.queue("QU...").fetch()?;
//! let deleted = account.queue("QU...").delete()?;
//! ```
//!
//! ## Errors
//!
//! Operations return [`rest::RestError`]. Unexpected statuses become
//! [`rest::RestError::Request`] carrying the status code, except for
//! `delete`, which reports a non-5xx failure as `Ok(false)`.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (requests at `debug`, page transitions
//! at `trace`, tolerated delete failures at `warn`) and never installs a
//! subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients, versions and configuration are `Send + Sync`
//! - **Lazy paging**: Later pages are fetched only as a stream is consumed

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod values;
pub mod webhooks;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export public types at crate root for convenience
pub use config::{AccountSid, ApiVersion, AuthToken, TwilioConfig, TwilioConfigBuilder};
pub use error::ConfigError;
pub use values::{Param, ParamValue, ParameterSet};

// Re-export HTTP client types
pub use clients::{
    BasicAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, ReqwestHttpClient, RestClient,
};

// Re-export the REST engine entry points
pub use rest::{Page, RecordStream, RestError};
