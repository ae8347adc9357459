//! Resource wrappers plugged into the REST engine.
//!
//! Wrappers are organized by domain and API version, mirroring the URL:
//!
//! ```text
//! resources/
//!   api/                 https://api.twilio.com
//!     v2010/             /2010-04-01
//!       queue.rs         /Accounts/{account_sid}/Queues.json
//!       address.rs       /Accounts/{account_sid}/Addresses.json
//!       local.rs         /Accounts/{account_sid}/AvailablePhoneNumbers/{country_code}/Local.json
//!       mobile.rs        /Accounts/{account_sid}/IncomingPhoneNumbers/Mobile.json
//!   conversations/       https://conversations.twilio.com
//!     v1/                /v1
//!       completed.rs     /Conversations/Completed
//! ```
//!
//! Every resource comes as a triple:
//!
//! - a **List** (`QueueList`): `create`, `page`, `stream`, `read` on the collection
//! - a **Context** (`QueueContext`): `fetch`, `update`, `delete` on one record
//! - an **Instance** (`Queue`): the typed record, built through
//!   [`InstanceResource`](crate::rest::InstanceResource)
//!
//! List operations share [`ReadOptions`] (record budget) and [`PageOptions`]
//! (explicit page selection).

use std::sync::Arc;

use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::rest::{InstanceResource, Page, RecordStream, RestError, Version};
use crate::values::{Param, ParameterSet};

pub mod api;
pub mod conversations;

/// Record budget for `stream` and `read`.
///
/// `page_size` defaults to `min(limit, 1000)` when only `limit` is set, and
/// to the server default (50) when neither is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Maximum number of records to return.
    pub limit: Option<u32>,
    /// Number of records to request per page.
    pub page_size: Option<u32>,
}

impl ReadOptions {
    /// Options returning at most `limit` records.
    #[must_use]
    pub const fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            page_size: None,
        }
    }
}

/// Selection of a single page for `page`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Opaque token returned by the API.
    pub page_token: Option<String>,
    /// Page number. Informational; the token selects the page.
    pub page_number: Option<u32>,
    /// Number of records per page.
    pub page_size: Option<u32>,
}

impl PageOptions {
    fn into_params(self) -> ParameterSet {
        ParameterSet::new()
            .with("PageToken", Param::from_option(self.page_token))
            .with("Page", Param::from_option(self.page_number))
            .with("PageSize", Param::from_option(self.page_size))
    }
}

/// Builds a request for a resource URI.
pub(crate) fn request(
    method: HttpMethod,
    uri: impl Into<String>,
    params: ParameterSet,
    data: ParameterSet,
) -> Result<HttpRequest, RestError> {
    HttpRequest::builder(method, uri)
        .params(params)
        .form(data)
        .build()
        .map_err(|error| HttpError::from(error).into())
}

/// Fetches one page of a list resource.
pub(crate) fn page<T: InstanceResource>(
    version: &Arc<Version>,
    context: T::Context,
    uri: String,
    mut filters: ParameterSet,
    options: PageOptions,
) -> Result<Page<T>, RestError> {
    filters.extend(options.into_params());
    let request = request(HttpMethod::Get, uri, filters, ParameterSet::new())?;
    version.page(context, request)
}

/// Streams a list resource under a record budget.
pub(crate) fn stream<T: InstanceResource>(
    version: &Arc<Version>,
    context: T::Context,
    uri: String,
    filters: ParameterSet,
    options: ReadOptions,
) -> Result<RecordStream<T>, RestError> {
    let limits = Version::read_limits(options.limit, options.page_size);
    let params = filters.with("PageSize", Param::from_option(limits.page_size));
    let request = request(HttpMethod::Get, uri, params, ParameterSet::new())?;
    version.stream(context, request, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_options_encode_in_order() {
        let options = PageOptions {
            page_token: Some("PT1".to_string()),
            page_number: Some(2),
            page_size: Some(20),
        };

        assert_eq!(
            options.into_params().to_pairs(),
            vec![
                ("PageToken".to_string(), "PT1".to_string()),
                ("Page".to_string(), "2".to_string()),
                ("PageSize".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_page_options_send_nothing() {
        assert!(PageOptions::default().into_params().is_empty());
    }

    #[test]
    fn test_read_options_limit() {
        assert_eq!(
            ReadOptions::limit(5),
            ReadOptions {
                limit: Some(5),
                page_size: None
            }
        );
    }

    #[test]
    fn test_request_rejects_form_data_on_get() {
        let data = ParameterSet::new().with("FriendlyName", Param::Value("x"));
        let result = request(HttpMethod::Get, "/Queues.json", ParameterSet::new(), data);
        assert!(matches!(result, Err(RestError::Http(HttpError::InvalidRequest(_)))));
    }
}
