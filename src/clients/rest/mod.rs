//! REST client for the Twilio API.
//!
//! The [`RestClient`] sits between the [`Domain`](crate::rest::Domain) layer
//! and the [`HttpClient`](crate::clients::HttpClient) transport. It is the
//! single place where credentials, default headers and regional routing are
//! applied to outgoing requests.
//!
//! # Regional Routing
//!
//! When a region or edge is configured, hosts of the form
//! `{product}.twilio.com` are rewritten to `{product}.{edge}.{region}.twilio.com`:
//!
//! | region | edge | `api.twilio.com` becomes |
//! |--------|------|--------------------------|
//! | `ie1` | - | `api.ie1.twilio.com` |
//! | - | `dublin` | `api.dublin.us1.twilio.com` |
//! | `au1` | `sydney` | `api.sydney.au1.twilio.com` |

mod client;

pub use client::RestClient;
