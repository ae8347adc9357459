//! Webhook support.
//!
//! Twilio calls back into applications over HTTP (incoming messages, call
//! status, and so on). [`RequestValidator`] checks that such a request was
//! really signed by Twilio before the application acts on it.

mod request_validator;

pub use request_validator::{RequestValidator, BODY_HASH_PARAM, SIGNATURE_HEADER};
