//! Lazy iteration across page boundaries.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::rest::errors::RestError;
use crate::rest::page::Page;
use crate::rest::resource::InstanceResource;
use crate::rest::version::Version;

/// A lazy, single-pass stream of records spanning pages.
///
/// The stream starts from an already fetched page and follows next-page
/// links on demand. It stops when any of these happens:
///
/// - `limit` records have been yielded
/// - `page_limit` pages have been consumed
/// - a page has no next link
///
/// The first error is yielded once; the stream is fused afterwards.
pub struct RecordStream<T: InstanceResource> {
    version: Arc<Version>,
    context: T::Context,
    records: std::vec::IntoIter<Value>,
    next_page_url: Option<String>,
    pages_fetched: u32,
    yielded: u32,
    limit: Option<u32>,
    page_limit: Option<u32>,
    done: bool,
}

impl<T: InstanceResource> RecordStream<T> {
    /// Creates a stream starting from `page`, which counts as the first
    /// fetched page.
    #[must_use]
    pub fn new(page: Page<T>, limit: Option<u32>, page_limit: Option<u32>) -> Self {
        let (version, context, records, next_page_url) = page.into_parts();
        Self {
            version,
            context,
            records: records.into_iter(),
            next_page_url,
            pages_fetched: 1,
            yielded: 0,
            limit,
            page_limit,
            done: false,
        }
    }

    /// Returns the number of records yielded so far.
    #[must_use]
    pub const fn yielded(&self) -> u32 {
        self.yielded
    }

    /// Returns the number of pages fetched so far, including the first.
    #[must_use]
    pub const fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    fn page_budget_spent(&self) -> bool {
        self.page_limit
            .is_some_and(|page_limit| self.pages_fetched >= page_limit)
    }

    /// Replaces the exhausted page with the next one. Returns `Ok(false)`
    /// when paging is over.
    fn advance(&mut self) -> Result<bool, RestError> {
        if self.page_budget_spent() {
            tracing::trace!(
                resource = T::NAME,
                pages = self.pages_fetched,
                "Page limit reached"
            );
            return Ok(false);
        }

        let Some(url) = self.next_page_url.take() else {
            return Ok(false);
        };

        tracing::trace!(resource = T::NAME, url = %url, "Fetching next page");
        let page: Page<T> = self.version.page_from_url(self.context.clone(), &url)?;
        let (_, _, records, next_page_url) = page.into_parts();

        self.records = records.into_iter();
        self.next_page_url = next_page_url;
        self.pages_fetched += 1;
        Ok(true)
    }
}

impl<T: InstanceResource> Iterator for RecordStream<T> {
    type Item = Result<T, RestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.limit.is_some_and(|limit| self.yielded >= limit) {
            self.done = true;
            return None;
        }

        let record = loop {
            if let Some(record) = self.records.next() {
                break record;
            }
            match self.advance() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        };

        let instance = T::from_payload(&self.version, &record, &self.context);
        match instance {
            Ok(_) => self.yielded += 1,
            Err(_) => self.done = true,
        }
        Some(instance)
    }
}

impl<T: InstanceResource> std::iter::FusedIterator for RecordStream<T> {}

impl<T: InstanceResource> fmt::Debug for RecordStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStream")
            .field("resource", &T::NAME)
            .field("pages_fetched", &self.pages_fetched)
            .field("yielded", &self.yielded)
            .field("limit", &self.limit)
            .field("page_limit", &self.page_limit)
            .field("next_page_url", &self.next_page_url)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
