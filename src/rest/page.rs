//! One page of records and its links to neighbouring pages.
//!
//! Two payload layouts are understood:
//!
//! - **Flat**: records under a single resource key, next to metadata such as
//!   `next_page_uri`, `page_size` and `uri`.
//! - **Meta envelope**: a `meta` object carrying `key`, `next_page_url` and
//!   `previous_page_url`, with the records under `payload[meta.key]`.
//!
//! ```json
//! {"queues": [...], "next_page_uri": "/2010-04-01/Accounts/AC.../Queues.json?Page=1", "page": 0}
//! {"conversations": [...], "meta": {"key": "conversations", "next_page_url": "https://..."}}
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::HttpResponse;
use crate::rest::errors::{Operation, RequestError, RestError};
use crate::rest::resource::InstanceResource;
use crate::rest::version::Version;

/// Top-level keys that carry paging metadata rather than records.
pub const META_KEYS: &[&str] = &[
    "end",
    "first_page_uri",
    "next_page_uri",
    "last_page_uri",
    "page",
    "page_size",
    "previous_page_uri",
    "total",
    "num_pages",
    "start",
    "uri",
    "meta",
];

/// An immutable page of raw records.
///
/// Instances are built lazily, one per record, when the page is iterated.
/// [`next_page`](Self::next_page) and [`previous_page`](Self::previous_page)
/// fetch a *new* page; this one never changes.
pub struct Page<T: InstanceResource> {
    version: Arc<Version>,
    context: T::Context,
    previous_page_url: Option<String>,
    next_page_url: Option<String>,
    records: Vec<Value>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: InstanceResource> Page<T> {
    /// Builds a page from a page response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] unless the status is 200,
    /// [`RestError::Decode`] if the body is not JSON,
    /// [`RestError::AmbiguousPage`] if the records key cannot be determined,
    /// and [`RestError::InvalidPayload`] if the records are not a list.
    pub fn from_response(
        version: Arc<Version>,
        context: T::Context,
        response: &HttpResponse,
    ) -> Result<Self, RestError> {
        if response.status_code != 200 {
            return Err(RequestError {
                operation: Operation::Page,
                status_code: response.status_code,
                body: None,
            }
            .into());
        }

        let payload: Value =
            serde_json::from_str(&response.content).map_err(|source| RestError::Decode {
                operation: Operation::Page,
                source,
            })?;
        let payload = payload.as_object().ok_or_else(|| RestError::InvalidPayload {
            message: format!("{} page is not a JSON object", T::NAME),
        })?;

        let records = load_records(payload)?;
        let previous_page_url = page_link(&version, payload, "previous_page_url", "previous_page_uri");
        let next_page_url = page_link(&version, payload, "next_page_url", "next_page_uri");

        tracing::trace!(
            resource = T::NAME,
            records = records.len(),
            has_next = next_page_url.is_some(),
            "Loaded page"
        );

        Ok(Self {
            version,
            context,
            previous_page_url,
            next_page_url,
            records,
            _marker: PhantomData,
        })
    }

    /// Returns the raw records.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the absolute URL of the next page, if any.
    #[must_use]
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page_url.as_deref()
    }

    /// Returns the absolute URL of the previous page, if any.
    #[must_use]
    pub fn previous_page_url(&self) -> Option<&str> {
        self.previous_page_url.as_deref()
    }

    /// Returns the version this page was fetched through.
    #[must_use]
    pub const fn version(&self) -> &Arc<Version> {
        &self.version
    }

    /// Fetches the next page. Returns `Ok(None)` without a request when
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching or decoding the page.
    pub fn next_page(&self) -> Result<Option<Self>, RestError> {
        self.follow(self.next_page_url.as_deref())
    }

    /// Fetches the previous page. Returns `Ok(None)` without a request when
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching or decoding the page.
    pub fn previous_page(&self) -> Result<Option<Self>, RestError> {
        self.follow(self.previous_page_url.as_deref())
    }

    /// Builds instances from the records lazily, borrowing the page.
    pub fn instances(&self) -> impl Iterator<Item = Result<T, RestError>> + '_ {
        self.records
            .iter()
            .map(|record| T::from_payload(&self.version, record, &self.context))
    }

    fn follow(&self, url: Option<&str>) -> Result<Option<Self>, RestError> {
        url.map(|url| self.version.page_from_url(self.context.clone(), url))
            .transpose()
    }

    /// Splits the page into the parts a stream needs to continue.
    pub(crate) fn into_parts(self) -> (Arc<Version>, T::Context, Vec<Value>, Option<String>) {
        (self.version, self.context, self.records, self.next_page_url)
    }
}

impl<T: InstanceResource> fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("resource", &T::NAME)
            .field("records", &self.records.len())
            .field("previous_page_url", &self.previous_page_url)
            .field("next_page_url", &self.next_page_url)
            .finish_non_exhaustive()
    }
}

impl<T: InstanceResource> IntoIterator for Page<T> {
    type Item = Result<T, RestError>;
    type IntoIter = PageIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        PageIntoIter {
            version: self.version,
            context: self.context,
            records: self.records.into_iter(),
            _marker: PhantomData,
        }
    }
}

/// Consuming iterator over the instances of one page.
pub struct PageIntoIter<T: InstanceResource> {
    version: Arc<Version>,
    context: T::Context,
    records: std::vec::IntoIter<Value>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: InstanceResource> Iterator for PageIntoIter<T> {
    type Item = Result<T, RestError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|record| T::from_payload(&self.version, &record, &self.context))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<T: InstanceResource> fmt::Debug for PageIntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIntoIter")
            .field("resource", &T::NAME)
            .field("remaining", &self.records.len())
            .finish_non_exhaustive()
    }
}

/// Locates the record list of a page payload.
fn load_records(payload: &Map<String, Value>) -> Result<Vec<Value>, RestError> {
    let meta_key = payload
        .get("meta")
        .and_then(|meta| meta.get("key"))
        .and_then(Value::as_str);

    let key = if let Some(key) = meta_key {
        key.to_string()
    } else {
        let mut candidates: Vec<&String> = payload
            .keys()
            .filter(|key| !META_KEYS.contains(&key.as_str()))
            .collect();
        if candidates.len() != 1 {
            return Err(RestError::AmbiguousPage {
                candidates: candidates.into_iter().cloned().collect(),
            });
        }
        candidates.remove(0).clone()
    };

    match payload.get(&key) {
        Some(Value::Array(records)) => Ok(records.clone()),
        Some(other) => Err(RestError::InvalidPayload {
            message: format!("page records under '{key}' are not a list: {other}"),
        }),
        None => Err(RestError::InvalidPayload {
            message: format!("page records key '{key}' is missing"),
        }),
    }
}

/// Reads a page link, preferring the meta envelope's URL over the flat URI.
fn page_link(
    version: &Version,
    payload: &Map<String, Value>,
    meta_field: &str,
    flat_field: &str,
) -> Option<String> {
    if let Some(meta) = payload.get("meta").and_then(Value::as_object) {
        if meta.contains_key(meta_field) {
            return meta
                .get(meta_field)
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty())
                .map(str::to_string);
        }
    }

    payload
        .get(flat_field)
        .and_then(Value::as_str)
        .filter(|uri| !uri.is_empty())
        .map(|uri| version.domain().absolute_url(uri))
}
