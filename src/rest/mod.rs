//! REST execution and pagination for the Twilio API.
//!
//! Requests flow through three layers, each adding one piece of the URL:
//!
//! ```text
//! resource wrapper ──► Version ("2010-04-01") ──► Domain ("https://api.twilio.com") ──► RestClient
//! ```
//!
//! - **[`Domain`]**: a product base URL bound to a [`RestClient`](crate::RestClient)
//! - **[`Version`]**: the verbs (`fetch`, `update`, `create`, `delete`, `page`,
//!   `stream`, `read`) and their status classification
//! - **[`Page`]**: one page of raw records plus its neighbouring page links
//! - **[`RecordStream`]**: lazy iteration across pages under record and page budgets
//! - **[`InstanceResource`]**: the trait resource wrappers implement to turn raw
//!   records into typed instances
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::ReadOptions;
//!
//! let queues = client.api().v2010().account().queues();
//!
//! // Lazily, 50 per page, at most 120 records
//! for queue in queues.stream(ReadOptions { limit: Some(120), page_size: Some(50) })? {
//!     println!("{:?}", queue?.friendly_name);
//! }
//!
//! // One page at a time
//! let page = queues.page(Default::default())?;
//! if let Some(next) = page.next_page()? {
//!     println!("{} more", next.len());
//! }
//! ```

pub mod deserialize;
mod domain;
mod errors;
mod page;
mod path;
mod resource;
pub mod resources;
mod stream;
mod version;

pub use deserialize::ParseError;
pub use domain::Domain;
pub use errors::{Operation, RequestError, RestError};
pub use page::{Page, PageIntoIter, META_KEYS};
pub use path::build_path;
pub use resource::{expect_object, InstanceResource};
pub use stream::RecordStream;
pub use version::{Limits, Version, MAX_PAGE_SIZE};
