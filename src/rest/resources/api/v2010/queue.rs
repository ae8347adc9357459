//! Queue resource.
//!
//! Call queues hold calls waiting to be dequeued by an agent.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::api::v2010::queue::{QueueCreateParams, QueueUpdateParams};
//! use twilio_api::Param;
//!
//! let account = client.api().v2010().account();
//!
//! let queue = account.queues().create(&QueueCreateParams {
//!     friendly_name: Param::Value("support".to_string()),
//!     max_size: Param::Value(50),
//! })?;
//!
//! let queue = account.queue(queue.sid.unwrap()).update(&QueueUpdateParams {
//!     max_size: Param::Value(100),
//!     ..Default::default()
//! })?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::resources::{self, PageOptions, ReadOptions};
use crate::rest::{
    build_path, deserialize, expect_object, InstanceResource, Page, RecordStream, RestError,
    Version,
};
use crate::values::{Param, ParameterSet};

const LIST_URI: &str = "/Accounts/{account_sid}/Queues.json";
const INSTANCE_URI: &str = "/Accounts/{account_sid}/Queues/{sid}.json";

/// A call queue.
#[derive(Debug, Clone, Serialize)]
pub struct Queue {
    #[serde(skip)]
    version: Arc<Version>,

    /// The account that owns the queue.
    pub account_sid: Option<String>,
    /// Average wait time of calls in the queue, in seconds.
    pub average_wait_time: Option<i64>,
    /// Number of calls currently in the queue.
    pub current_size: Option<i64>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub friendly_name: Option<String>,
    /// Maximum number of calls allowed in the queue.
    pub max_size: Option<i64>,
    pub sid: Option<String>,
    pub uri: Option<String>,
}

impl InstanceResource for Queue {
    type Context = String;
    const NAME: &'static str = "Queue";

    fn from_payload(
        version: &Arc<Version>,
        payload: &Value,
        account_sid: &String,
    ) -> Result<Self, RestError> {
        let fields = expect_object(Self::NAME, payload)?;

        Ok(Self {
            version: Arc::clone(version),
            account_sid: deserialize::string(fields.get("account_sid"))?
                .or_else(|| Some(account_sid.clone())),
            average_wait_time: deserialize::integer(fields.get("average_wait_time"))?,
            current_size: deserialize::integer(fields.get("current_size"))?,
            date_created: deserialize::rfc2822_datetime(fields.get("date_created"))?,
            date_updated: deserialize::rfc2822_datetime(fields.get("date_updated"))?,
            friendly_name: deserialize::string(fields.get("friendly_name"))?,
            max_size: deserialize::integer(fields.get("max_size"))?,
            sid: deserialize::string(fields.get("sid"))?,
            uri: deserialize::string(fields.get("uri"))?,
        })
    }
}

impl Queue {
    /// Returns a context for acting on this queue, if it has a SID.
    #[must_use]
    pub fn context(&self) -> Option<QueueContext> {
        let account_sid = self.account_sid.as_deref()?;
        let sid = self.sid.clone()?;
        Some(QueueContext::new(Arc::clone(&self.version), account_sid, sid))
    }
}

/// Parameters for creating a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueCreateParams {
    /// A descriptive name, up to 64 characters.
    pub friendly_name: Param<String>,
    /// Maximum number of calls allowed in the queue (default 100, max 5000).
    pub max_size: Param<u32>,
}

/// Parameters for updating a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueUpdateParams {
    pub friendly_name: Param<String>,
    pub max_size: Param<u32>,
}

fn queue_data(friendly_name: &Param<String>, max_size: &Param<u32>) -> ParameterSet {
    ParameterSet::new()
        .with("FriendlyName", friendly_name.clone())
        .with("MaxSize", max_size.clone())
}

/// The queues of one account.
#[derive(Debug, Clone)]
pub struct QueueList {
    version: Arc<Version>,
    account_sid: String,
    uri: String,
}

impl QueueList {
    /// Creates the list for an account.
    #[must_use]
    pub fn new(version: Arc<Version>, account_sid: &str) -> Self {
        Self {
            version,
            account_sid: account_sid.to_string(),
            uri: build_path(LIST_URI, &[("account_sid", account_sid)]),
        }
    }

    /// Creates a queue.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] with the response body unless the API
    /// answers 200 or 201.
    pub fn create(&self, params: &QueueCreateParams) -> Result<Queue, RestError> {
        let data = queue_data(&params.friendly_name, &params.max_size);
        let request = resources::request(HttpMethod::Post, &self.uri, ParameterSet::new(), data)?;
        self.version.create(&self.account_sid, request)
    }

    /// Fetches one page of queues.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching or decoding the page.
    pub fn page(&self, options: PageOptions) -> Result<Page<Queue>, RestError> {
        resources::page(
            &self.version,
            self.account_sid.clone(),
            self.uri.clone(),
            ParameterSet::new(),
            options,
        )
    }

    /// Streams queues lazily.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub fn stream(&self, options: ReadOptions) -> Result<RecordStream<Queue>, RestError> {
        resources::stream(
            &self.version,
            self.account_sid.clone(),
            self.uri.clone(),
            ParameterSet::new(),
            options,
        )
    }

    /// Reads queues eagerly.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered on any page.
    pub fn read(&self, options: ReadOptions) -> Result<Vec<Queue>, RestError> {
        self.stream(options)?.collect()
    }
}

/// One queue.
#[derive(Debug, Clone)]
pub struct QueueContext {
    version: Arc<Version>,
    account_sid: String,
    uri: String,
}

impl QueueContext {
    /// Creates the context for a queue.
    #[must_use]
    pub fn new(version: Arc<Version>, account_sid: &str, sid: impl Into<String>) -> Self {
        let sid = sid.into();
        Self {
            version,
            account_sid: account_sid.to_string(),
            uri: build_path(INSTANCE_URI, &[("account_sid", account_sid), ("sid", &sid)]),
        }
    }

    /// Fetches the queue.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] unless the API answers 200.
    pub fn fetch(&self) -> Result<Queue, RestError> {
        let request = resources::request(
            HttpMethod::Get,
            &self.uri,
            ParameterSet::new(),
            ParameterSet::new(),
        )?;
        self.version.fetch(&self.account_sid, request)
    }

    /// Updates the queue.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] unless the API answers 200.
    pub fn update(&self, params: &QueueUpdateParams) -> Result<Queue, RestError> {
        let data = queue_data(&params.friendly_name, &params.max_size);
        let request = resources::request(HttpMethod::Post, &self.uri, ParameterSet::new(), data)?;
        self.version.update(&self.account_sid, request)
    }

    /// Deletes the queue. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] on a server error.
    pub fn delete(&self) -> Result<bool, RestError> {
        let request = resources::request(
            HttpMethod::Delete,
            &self.uri,
            ParameterSet::new(),
            ParameterSet::new(),
        )?;
        self.version.delete(request)
    }
}
