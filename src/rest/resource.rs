//! The trait resource wrappers implement to plug into the REST engine.
//!
//! A resource wrapper tells the engine how to build one typed instance from
//! one raw record. The engine handles everything else: status
//! classification, JSON decoding, locating the records of a page, and
//! following page links.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use serde_json::Value;
//! use twilio_api::rest::{deserialize, InstanceResource, RestError, Version};
//!
//! #[derive(Debug, Clone)]
//! pub struct Widget {
//!     pub sid: Option<String>,
//!     pub size: Option<i64>,
//! }
//!
//! impl InstanceResource for Widget {
//!     type Context = ();
//!     const NAME: &'static str = "Widget";
//!
//!     fn from_payload(_: &Arc<Version>, payload: &Value, _: &()) -> Result<Self, RestError> {
//!         Ok(Self {
//!             sid: deserialize::string(payload.get("sid"))?,
//!             size: deserialize::integer(payload.get("size"))?,
//!         })
//!     }
//! }
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use serde_json::Value;

use crate::rest::errors::RestError;
use crate::rest::version::Version;

/// A typed record built from one raw payload object.
///
/// Instances are constructed eagerly from the payload, so a malformed
/// field fails construction rather than a later accessor.
pub trait InstanceResource: Sized {
    /// Path values the wrapper threads into every instance (e.g. the parent
    /// account SID), cloned once per page.
    type Context: Clone + Debug + Send + Sync;

    /// The resource name, used in log output.
    const NAME: &'static str;

    /// Builds an instance from one raw record.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Parse`] if a field is malformed, or
    /// [`RestError::InvalidPayload`] if the record is not an object.
    fn from_payload(
        version: &Arc<Version>,
        payload: &Value,
        context: &Self::Context,
    ) -> Result<Self, RestError>;
}

/// Ensures a record is a JSON object.
///
/// # Errors
///
/// Returns [`RestError::InvalidPayload`] naming `resource` otherwise.
pub fn expect_object<'a>(
    resource: &str,
    payload: &'a Value,
) -> Result<&'a serde_json::Map<String, Value>, RestError> {
    payload.as_object().ok_or_else(|| RestError::InvalidPayload {
        message: format!("{resource} record is not a JSON object: {payload}"),
    })
}
