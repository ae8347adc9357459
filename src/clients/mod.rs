//! HTTP client types for Twilio API communication.
//!
//! This module provides the transport layer underneath the REST engine.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The transport trait, one blocking request per call
//! - [`ReqwestHttpClient`]: The default transport, built on reqwest
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The raw status, body and headers of a response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: Applies credentials, headers and routing, then
//!   delegates to the transport
//!
//! # Custom Transports
//!
//! Any `Send + Sync + Debug` type implementing [`HttpClient`] can replace the
//! default transport, e.g. to add retries or to record traffic in tests:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use twilio_api::{RestClient, TwilioConfig};
//!
//! let client = RestClient::with_http_client(config, Arc::new(MyTransport::default()));
//! ```
//!
//! # Retry Behavior
//!
//! Nothing in this crate retries. Each operation issues exactly one request
//! per page; retries belong in a custom transport.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ReqwestHttpClient, SDK_VERSION};
pub use http_request::{BasicAuth, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::RestClient;
