//! The version layer: verbs, status classification and paging.
//!
//! A [`Version`] prefixes its path segment onto resource URIs and exposes the
//! operations every resource wrapper is built from:
//!
//! | Operation | Success | Otherwise |
//! |-----------|---------|-----------|
//! | [`fetch`](Version::fetch), [`update`](Version::update) | 200 | [`RequestError`] |
//! | [`create`](Version::create) | 200 or 201 | [`RequestError`] with the body attached |
//! | [`delete`](Version::delete) | 204 → `true` | 5xx → [`RequestError`], anything else → `false` |
//! | [`page`](Version::page) | 200 | [`RequestError`] |
//!
//! [`stream`](Version::stream) and [`read`](Version::read) build on `page`,
//! following next-page links until the record or page budget computed by
//! [`read_limits`](Version::read_limits) runs out.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ApiVersion;
use crate::rest::domain::{is_absolute, Domain};
use crate::rest::errors::{Operation, RequestError, RestError};
use crate::rest::page::Page;
use crate::rest::resource::InstanceResource;
use crate::rest::stream::RecordStream;

/// The largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Record and page budgets for a `stream` or `read` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of records to yield. `None` is unbounded.
    pub limit: Option<u32>,
    /// Page size to request. `None` leaves it to the server.
    pub page_size: Option<u32>,
    /// Maximum number of pages to fetch. `None` is unbounded.
    pub page_limit: Option<u32>,
}

/// An API version of a domain, e.g. `2010-04-01` of `https://api.twilio.com`.
#[derive(Debug)]
pub struct Version {
    domain: Arc<Domain>,
    version: ApiVersion,
}

// Verify Version is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Version>();
};

impl Version {
    /// Creates a version of `domain`.
    #[must_use]
    pub const fn new(domain: Arc<Domain>, version: ApiVersion) -> Self {
        Self { domain, version }
    }

    /// Returns the domain this version belongs to.
    #[must_use]
    pub const fn domain(&self) -> &Arc<Domain> {
        &self.domain
    }

    /// Returns the version path segment.
    #[must_use]
    pub const fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// Prefixes the version segment onto a URI.
    #[must_use]
    pub fn relative_uri(&self, uri: &str) -> String {
        format!(
            "{}/{}",
            self.version.as_str().trim_matches('/'),
            uri.trim_matches('/')
        )
    }

    /// Sends a request, prefixing the version segment unless the URL is absolute.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub fn request(&self, mut request: HttpRequest) -> Result<HttpResponse, HttpError> {
        if !is_absolute(&request.url) {
            request.url = self.relative_uri(&request.url);
        }
        self.domain.request(request)
    }

    /// Fetches one record. Succeeds only on 200.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] on any other status, [`RestError::Decode`]
    /// if the body is not JSON, and the instance's construction error otherwise.
    pub fn fetch<T: InstanceResource>(
        self: &Arc<Self>,
        context: &T::Context,
        request: HttpRequest,
    ) -> Result<T, RestError> {
        let response = self.request(request)?;
        let payload = expect_status(Operation::Fetch, &response, &[200])?;
        T::from_payload(self, &payload, context)
    }

    /// Updates one record. Succeeds only on 200.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch).
    pub fn update<T: InstanceResource>(
        self: &Arc<Self>,
        context: &T::Context,
        request: HttpRequest,
    ) -> Result<T, RestError> {
        let response = self.request(request)?;
        let payload = expect_status(Operation::Update, &response, &[200])?;
        T::from_payload(self, &payload, context)
    }

    /// Creates one record. Succeeds on 200 or 201.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] with the response body attached on any
    /// other status, [`RestError::Decode`] if the body is not JSON, and the
    /// instance's construction error otherwise.
    pub fn create<T: InstanceResource>(
        self: &Arc<Self>,
        context: &T::Context,
        request: HttpRequest,
    ) -> Result<T, RestError> {
        let response = self.request(request)?;
        let payload = expect_status(Operation::Create, &response, &[200, 201])?;
        T::from_payload(self, &payload, context)
    }

    /// Deletes one record.
    ///
    /// Returns `true` on 204 and `false` on any other non-5xx status, so that
    /// deleting something already gone is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] on a 5xx status and [`RestError::Http`]
    /// if the request cannot be sent.
    pub fn delete(&self, request: HttpRequest) -> Result<bool, RestError> {
        let response = self.request(request)?;
        let status_code = response.status_code;

        if (500..600).contains(&status_code) {
            return Err(RequestError {
                operation: Operation::Delete,
                status_code,
                body: None,
            }
            .into());
        }

        if status_code != 204 {
            tracing::warn!(
                status_code,
                request_id = response.request_id().unwrap_or_default(),
                "Delete did not remove a record"
            );
        }

        Ok(status_code == 204)
    }

    /// Fetches one page of records.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] unless the status is 200,
    /// [`RestError::Decode`] if the body is not JSON, and
    /// [`RestError::AmbiguousPage`] if the records key cannot be determined.
    pub fn page<T: InstanceResource>(
        self: &Arc<Self>,
        context: T::Context,
        request: HttpRequest,
    ) -> Result<Page<T>, RestError> {
        let response = self.request(request)?;
        Page::from_response(Arc::clone(self), context, &response)
    }

    /// Fetches the page at `url`, as found in a previous page's links.
    ///
    /// Absolute URLs are requested verbatim; relative ones are resolved
    /// against the domain only, since page links already carry the version.
    ///
    /// # Errors
    ///
    /// Same as [`page`](Self::page).
    pub fn page_from_url<T: InstanceResource>(
        self: &Arc<Self>,
        context: T::Context,
        url: &str,
    ) -> Result<Page<T>, RestError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.domain.absolute_url(url))
            .build()
            .map_err(HttpError::from)?;
        let response = self.domain.request(request)?;
        Page::from_response(Arc::clone(self), context, &response)
    }

    /// Streams records lazily across pages.
    ///
    /// The first page is fetched before returning so that request errors
    /// surface immediately. Later pages are fetched only as the stream is
    /// consumed, and never beyond `limits.limit` records or
    /// `limits.page_limit` pages.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page. Errors on later pages
    /// are yielded by the stream.
    pub fn stream<T: InstanceResource>(
        self: &Arc<Self>,
        context: T::Context,
        request: HttpRequest,
        limits: Limits,
    ) -> Result<RecordStream<T>, RestError> {
        let page = self.page(context, request)?;
        Ok(RecordStream::new(page, limits.limit, limits.page_limit))
    }

    /// Reads records eagerly. Equivalent to collecting [`stream`](Self::stream).
    ///
    /// # Errors
    ///
    /// Returns the first error encountered on any page.
    pub fn read<T: InstanceResource>(
        self: &Arc<Self>,
        context: T::Context,
        request: HttpRequest,
        limits: Limits,
    ) -> Result<Vec<T>, RestError> {
        self.stream(context, request, limits)?.collect()
    }

    /// Derives the page size and page budget for a `stream`/`read` call.
    ///
    /// - With a `limit` and no `page_size`, the page size is
    ///   `min(limit, 1000)`, the largest that does not overshoot.
    /// - With a `limit`, the page budget is `ceil(limit / page_size)`.
    /// - Without a `limit`, both budgets are unbounded.
    ///
    /// A `page_size` of zero is treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twilio_api::rest::{Limits, Version};
    ///
    /// let limits = Version::read_limits(Some(2500), None);
    /// assert_eq!(limits, Limits { limit: Some(2500), page_size: Some(1000), page_limit: Some(3) });
    ///
    /// let limits = Version::read_limits(Some(10), Some(3));
    /// assert_eq!(limits.page_limit, Some(4));
    ///
    /// let limits = Version::read_limits(None, Some(20));
    /// assert_eq!(limits.page_limit, None);
    /// ```
    #[must_use]
    pub fn read_limits(limit: Option<u32>, page_size: Option<u32>) -> Limits {
        let page_size = page_size
            .filter(|size| *size > 0)
            .or_else(|| limit.map(|limit| limit.clamp(1, MAX_PAGE_SIZE)));

        let page_limit = match (limit, page_size) {
            (Some(limit), Some(page_size)) => {
                Some(limit / page_size + u32::from(limit % page_size != 0))
            }
            _ => None,
        };

        Limits {
            limit,
            page_size,
            page_limit,
        }
    }
}

/// Checks the status against the accepted ones and decodes the JSON body.
fn expect_status(
    operation: Operation,
    response: &HttpResponse,
    accepted: &[u16],
) -> Result<Value, RestError> {
    if !accepted.contains(&response.status_code) {
        let body = matches!(operation, Operation::Create).then(|| response.content.clone());
        return Err(RequestError {
            operation,
            status_code: response.status_code,
            body,
        }
        .into());
    }

    serde_json::from_str(&response.content).map_err(|source| RestError::Decode { operation, source })
}
