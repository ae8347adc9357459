//! Completed conversations.
//!
//! Pages of this resource use the meta envelope:
//!
//! ```json
//! {
//!   "conversations": [...],
//!   "meta": {"key": "conversations", "next_page_url": "https://conversations.twilio.com/v1/...", ...}
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::rest::resources::{self, PageOptions, ReadOptions};
use crate::rest::{deserialize, expect_object, InstanceResource, Page, RecordStream, RestError, Version};
use crate::values::ParameterSet;

const LIST_URI: &str = "/Conversations/Completed";

/// A conversation that has ended.
#[derive(Debug, Clone, Serialize)]
pub struct Completed {
    pub sid: Option<String>,
    pub account_sid: Option<String>,
    pub status: Option<String>,
    /// Length of the conversation, in seconds.
    pub duration: Option<i64>,
    pub date_created: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl InstanceResource for Completed {
    type Context = ();
    const NAME: &'static str = "Completed";

    fn from_payload(_: &Arc<Version>, payload: &Value, _: &()) -> Result<Self, RestError> {
        let fields = expect_object(Self::NAME, payload)?;

        Ok(Self {
            sid: deserialize::string(fields.get("sid"))?,
            account_sid: deserialize::string(fields.get("account_sid"))?,
            status: deserialize::string(fields.get("status"))?,
            duration: deserialize::integer(fields.get("duration"))?,
            date_created: deserialize::iso8601_datetime(fields.get("date_created"))?,
            start_time: deserialize::iso8601_datetime(fields.get("start_time"))?,
            end_time: deserialize::iso8601_datetime(fields.get("end_time"))?,
            url: deserialize::string(fields.get("url"))?,
        })
    }
}

/// All completed conversations.
#[derive(Debug, Clone)]
pub struct CompletedList {
    version: Arc<Version>,
}

impl CompletedList {
    /// Creates the list.
    #[must_use]
    pub const fn new(version: Arc<Version>) -> Self {
        Self { version }
    }

    /// Fetches one page of completed conversations.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching or decoding the page.
    pub fn page(&self, options: PageOptions) -> Result<Page<Completed>, RestError> {
        resources::page(
            &self.version,
            (),
            LIST_URI.to_string(),
            ParameterSet::new(),
            options,
        )
    }

    /// Streams completed conversations lazily.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub fn stream(&self, options: ReadOptions) -> Result<RecordStream<Completed>, RestError> {
        resources::stream(
            &self.version,
            (),
            LIST_URI.to_string(),
            ParameterSet::new(),
            options,
        )
    }

    /// Reads completed conversations eagerly.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered on any page.
    pub fn read(&self, options: ReadOptions) -> Result<Vec<Completed>, RestError> {
        self.stream(options)?.collect()
    }
}
