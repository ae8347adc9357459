//! Incoming mobile phone numbers.

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

const LIST_URI: &str = "/Accounts/{account_sid}/IncomingPhoneNumbers/Mobile.json";

/// A mobile number owned by the account.
#[derive(Debug, Clone, Serialize)]
pub struct Mobile {
    pub account_sid: Option<String>,
    pub address_requirements: Option<String>,
    pub api_version: Option<String>,
    pub beta: Option<bool>,
    pub capabilities: Option<Value>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub friendly_name: Option<String>,
    pub phone_number: Option<String>,
    pub sid: Option<String>,
    pub sms_application_sid: Option<String>,
    pub sms_fallback_method: Option<String>,
    pub sms_fallback_url: Option<String>,
    pub sms_method: Option<String>,
    pub sms_url: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
    pub uri: Option<String>,
    pub voice_application_sid: Option<String>,
    pub voice_caller_id_lookup: Option<bool>,
    pub voice_fallback_method: Option<String>,
    pub voice_fallback_url: Option<String>,
    pub voice_method: Option<String>,
    pub voice_url: Option<String>,
}

impl InstanceResource for Mobile {
    type Context = String;
    const NAME: &'static str = "Mobile";

    fn from_payload(
        _version: &Arc<Version>,
        payload: &Value,
        account_sid: &String,
    ) -> Result<Self, RestError> {
        let fields = expect_object(Self::NAME, payload)?;
        let string = |key: &str| deserialize::string(fields.get(key));

        Ok(Self {
            account_sid: string("account_sid")?.or_else(|| Some(account_sid.clone())),
            address_requirements: string("address_requirements")?,
            api_version: string("api_version")?,
            beta: deserialize::boolean(fields.get("beta"))?,
            capabilities: deserialize::json(fields.get("capabilities")),
            date_created: deserialize::rfc2822_datetime(fields.get("date_created"))?,
            date_updated: deserialize::rfc2822_datetime(fields.get("date_updated"))?,
            friendly_name: string("friendly_name")?,
            phone_number: string("phone_number")?,
            sid: string("sid")?,
            sms_application_sid: string("sms_application_sid")?,
            sms_fallback_method: string("sms_fallback_method")?,
            sms_fallback_url: string("sms_fallback_url")?,
            sms_method: string("sms_method")?,
            sms_url: string("sms_url")?,
            status_callback: string("status_callback")?,
            status_callback_method: string("status_callback_method")?,
            uri: string("uri")?,
            voice_application_sid: string("voice_application_sid")?,
            voice_caller_id_lookup: deserialize::boolean(fields.get("voice_caller_id_lookup"))?,
            voice_fallback_method: string("voice_fallback_method")?,
            voice_fallback_url: string("voice_fallback_url")?,
            voice_method: string("voice_method")?,
            voice_url: string("voice_url")?,
        })
    }
}

/// Filters for listing mobile numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileReadParams {
    pub beta: Param<bool>,
    pub friendly_name: Param<String>,
    pub phone_number: Param<String>,
}

impl MobileReadParams {
    fn to_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("Beta", self.beta.clone())
            .with("FriendlyName", self.friendly_name.clone())
            .with("PhoneNumber", self.phone_number.clone())
    }
}

/// Parameters for purchasing a mobile number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileCreateParams {
    pub area_code: String,
    /// E.164 formatted number to purchase.
    pub phone_number: String,
    pub api_version: Param<String>,
    pub friendly_name: Param<String>,
    pub sms_application_sid: Param<String>,
    pub sms_fallback_method: Param<String>,
    pub sms_fallback_url: Param<String>,
    pub sms_method: Param<String>,
    pub sms_url: Param<String>,
    pub status_callback: Param<String>,
    pub status_callback_method: Param<String>,
    pub voice_application_sid: Param<String>,
    pub voice_caller_id_lookup: Param<bool>,
    pub voice_fallback_method: Param<String>,
    pub voice_fallback_url: Param<String>,
    pub voice_method: Param<String>,
    pub voice_url: Param<String>,
}

impl MobileCreateParams {
    fn to_data(&self) -> ParameterSet {
        ParameterSet::new()
            .with("AreaCode", Param::Value(&self.area_code))
            .with("PhoneNumber", Param::Value(&self.phone_number))
            .with("ApiVersion", self.api_version.clone())
            .with("FriendlyName", self.friendly_name.clone())
            .with("SmsApplicationSid", self.sms_application_sid.clone())
            .with("SmsFallbackMethod", self.sms_fallback_method.clone())
            .with("SmsFallbackUrl", self.sms_fallback_url.clone())
            .with("SmsMethod", self.sms_method.clone())
            .with("SmsUrl", self.sms_url.clone())
            .with("StatusCallback", self.status_callback.clone())
            .with("StatusCallbackMethod", self.status_callback_method.clone())
            .with("VoiceApplicationSid", self.voice_application_sid.clone())
            .with("VoiceCallerIdLookup", self.voice_caller_id_lookup.clone())
            .with("VoiceFallbackMethod", self.voice_fallback_method.clone())
            .with("VoiceFallbackUrl", self.voice_fallback_url.clone())
            .with("VoiceMethod", self.voice_method.clone())
            .with("VoiceUrl", self.voice_url.clone())
    }
}

/// The mobile numbers of one account.
#[derive(Debug, Clone)]
pub struct MobileList {
    version: Arc<Version>,
    account_sid: String,
    uri: String,
}

impl MobileList {
    /// Creates the list for an account.
    #[must_use]
    pub fn new(version: Arc<Version>, account_sid: &str) -> Self {
        Self {
            version,
            account_sid: account_sid.to_string(),
            uri: build_path(LIST_URI, &[("account_sid", account_sid)]),
        }
    }

    /// Purchases a mobile number.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Request`] with the response body unless the API
    /// answers 200 or 201.
    pub fn create(&self, params: &MobileCreateParams) -> Result<Mobile, RestError> {
        let request = resources::request(
            HttpMethod::Post,
            &self.uri,
            ParameterSet::new(),
            params.to_data(),
        )?;
        self.version.create(&self.account_sid, request)
    }

    /// Fetches one page of mobile numbers.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching or decoding the page.
    pub fn page(
        &self,
        params: &MobileReadParams,
        options: PageOptions,
    ) -> Result<Page<Mobile>, RestError> {
        resources::page(
            &self.version,
            self.account_sid.clone(),
            self.uri.clone(),
            params.to_params(),
            options,
        )
    }

    /// Streams mobile numbers lazily.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub fn stream(
        &self,
        params: &MobileReadParams,
        options: ReadOptions,
    ) -> Result<RecordStream<Mobile>, RestError> {
        resources::stream(
            &self.version,
            self.account_sid.clone(),
            self.uri.clone(),
            params.to_params(),
            options,
        )
    }

    /// Reads mobile numbers eagerly.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered on any page.
    pub fn read(
        &self,
        params: &MobileReadParams,
        options: ReadOptions,
    ) -> Result<Vec<Mobile>, RestError> {
        self.stream(params, options)?.collect()
    }
}
