//! Address resource.
//!
//! Addresses are registered against an account to satisfy the local address
//! requirements of some phone numbers, and for emergency calling.

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

const LIST_URI: &str = "/Accounts/{account_sid}/Addresses.json";
const INSTANCE_URI: &str = "/Accounts/{account_sid}/Addresses/{sid}.json";

/// A postal address.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    #[serde(skip)]
    version: Arc<Version>,

    pub account_sid: Option<String>,
    pub city: Option<String>,
    /// Name of the person or business at the address.
    pub customer_name: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub emergency_enabled: Option<bool>,
    pub friendly_name: Option<String>,
    pub iso_country: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
    pub sid: Option<String>,
    pub street: Option<String>,
    pub uri: Option<String>,
    /// Whether the address was validated when created.
    pub validated: Option<bool>,
}

impl InstanceResource for Address {
    type Context = String;
    const NAME: &'static str = "Address";

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
            city: deserialize::string(fields.get("city"))?,
            customer_name: deserialize::string(fields.get("customer_name"))?,
            date_created: deserialize::rfc2822_datetime(fields.get("date_created"))?,
            date_updated: deserialize::rfc2822_datetime(fields.get("date_updated"))?,
            emergency_enabled: deserialize::boolean(fields.get("emergency_enabled"))?,
            friendly_name: deserialize::string(fields.get("friendly_name"))?,
            iso_country: deserialize::string(fields.get("iso_country"))?,
            postal_code: deserialize::string(fields.get("postal_code"))?,
            region: deserialize::string(fields.get("region"))?,
            sid: deserialize::string(fields.get("sid"))?,
            street: deserialize::string(fields.get("street"))?,
            uri: deserialize::string(fields.get("uri"))?,
            validated: deserialize::boolean(fields.get("validated"))?,
        })
    }
}

impl Address {
    /// Returns a context for acting on this address, if it has a SID.
    #[must_use]
    pub fn context(&self) -> Option<AddressContext> {
        let account_sid = self.account_sid.as_deref()?;
        let sid = self.sid.clone()?;
        Some(AddressContext::new(Arc::clone(&self.version), account_sid, sid))
    }
}

/// Parameters for creating an address.
///
/// The six address fields are required by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressCreateParams {
    pub customer_name: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub iso_country: String,
    pub friendly_name: Param<String>,
    pub emergency_enabled: Param<bool>,
    /// Let the API correct the address (default `true`).
    pub auto_correct_address: Param<bool>,
}

impl AddressCreateParams {
    fn to_data(&self) -> ParameterSet {
        ParameterSet::new()
            .with("CustomerName", Param::Value(&self.customer_name))
            .with("Street", Param::Value(&self.street))
            .with("City", Param::Value(&self.city))
            .with("Region", Param::Value(&self.region))
            .with("PostalCode", Param::Value(&self.postal_code))
            .with("IsoCountry", Param::Value(&self.iso_country))
            .with("FriendlyName", self.friendly_name.clone())
            .with("EmergencyEnabled", self.emergency_enabled.clone())
            .with("AutoCorrectAddress", self.auto_correct_address.clone())
    }
}

/// Parameters for updating an address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressUpdateParams {
    pub friendly_name: Param<String>,
    pub customer_name: Param<String>,
    pub street: Param<String>,
    pub city: Param<String>,
    pub region: Param<String>,
    pub postal_code: Param<String>,
    pub emergency_enabled: Param<bool>,
    pub auto_correct_address: Param<bool>,
}

impl AddressUpdateParams {
    fn to_data(&self) -> ParameterSet {
        ParameterSet::new()
            .with("FriendlyName", self.friendly_name.clone())
            .with("CustomerName", self.customer_name.clone())
            .with("Street", self.street.clone())
            .with("City", self.city.clone())
            .with("Region", self.region.clone())
            .with("PostalCode", self.postal_code.clone())
            .with("EmergencyEnabled", self.emergency_enabled.clone())
            .with("AutoCorrectAddress", self.auto_correct_address.clone())
    }
}

/// Filters for listing addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressReadParams {
    pub customer_name: Param<String>,
    pub friendly_name: Param<String>,
    pub iso_country: Param<String>,
}

impl AddressReadParams {
    fn to_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("CustomerName", self.customer_name.clone())
            .with("FriendlyName", self.friendly_name.clone())
            .with("IsoCountry", self.iso_country.clone())
    }
}

/// The addresses of one account.
#[derive(Debug, Clone)]
pub struct AddressList {
    version: Arc<Version>,
    account_sid: String,
    uri: String,
}

impl AddressList {
    /// Creates the list for an account.
    #[must_use]
    pub fn new(version: Arc<Version>, account_sid: &str) -> Self {
        Self {
            version,
            account_sid: account_sid.to_string(),
            uri: build_path(LIST_URI, &[("account_sid", account_sid)]),
        }
    }

    /// Creates an address.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] with the response body unless the API
    /// answers 200 or 201.
    pub fn create(&self, params: &AddressCreateParams) -> Result<Address, RestError> {
        let request = resources::request(
            HttpMethod::Post,
            &self.uri,
            ParameterSet::new(),
            params.to_data(),
        )?;
        self.version.create(&self.account_sid, request)
    }

    /// Fetches one page of addresses.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching or decoding the page.
    pub fn page(
        &self,
        params: &AddressReadParams,
        options: PageOptions,
    ) -> Result<Page<Address>, RestError> {
        resources::page(
            &self.version,
            self.account_sid.clone(),
            self.uri.clone(),
            params.to_params(),
            options,
        )
    }

    /// Streams addresses lazily.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub fn stream(
        &self,
        params: &AddressReadParams,
        options: ReadOptions,
    ) -> Result<RecordStream<Address>, RestError> {
        resources::stream(
            &self.version,
            self.account_sid.clone(),
            self.uri.clone(),
            params.to_params(),
            options,
        )
    }

    /// Reads addresses eagerly.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered on any page.
    pub fn read(
        &self,
        params: &AddressReadParams,
        options: ReadOptions,
    ) -> Result<Vec<Address>, RestError> {
        self.stream(params, options)?.collect()
    }
}

/// One address.
#[derive(Debug, Clone)]
pub struct AddressContext {
    version: Arc<Version>,
    account_sid: String,
    uri: String,
}

impl AddressContext {
    /// Creates the context for an address.
    #[must_use]
    pub fn new(version: Arc<Version>, account_sid: &str, sid: impl Into<String>) -> Self {
        let sid = sid.into();
        Self {
            version,
            account_sid: account_sid.to_string(),
            uri: build_path(INSTANCE_URI, &[("account_sid", account_sid), ("sid", &sid)]),
        }
    }

    /// Fetches the address.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] unless the API answers 200.
    pub fn fetch(&self) -> Result<Address, RestError> {
        let request = resources::request(
            HttpMethod::Get,
            &self.uri,
            ParameterSet::new(),
            ParameterSet::new(),
        )?;
        self.version.fetch(&self.account_sid, request)
    }

    /// Updates the address.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] unless the API answers 200.
    pub fn update(&self, params: &AddressUpdateParams) -> Result<Address, RestError> {
        let request = resources::request(
            HttpMethod::Post,
            &self.uri,
            ParameterSet::new(),
            params.to_data(),
        )?;
        self.version.update(&self.account_sid, request)
    }

    /// Deletes the address. Returns `false` if nothing was deleted.
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
