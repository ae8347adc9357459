//! Available local phone numbers.
//!
//! Read-only: searches the local numbers of one country that the account
//! can purchase.
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::api::v2010::local::LocalReadParams;
//! use twilio_api::rest::resources::ReadOptions;
//! use twilio_api::Param;
//!
//! let numbers = client
//!     .api()
//!     .v2010()
//!     .account()
//!     .available_phone_numbers("US")
//!     .local()
//!     .read(
//!         &LocalReadParams { area_code: Param::Value(510), sms_enabled: Param::Value(true), ..Default::default() },
//!         ReadOptions::limit(20),
//!     )?;
//! ```

use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde::Serialize;
use serde_json::Value;

use crate::rest::resources::{self, PageOptions, ReadOptions};
use crate::rest::{
    build_path, deserialize, expect_object, InstanceResource, Page, RecordStream, RestError,
    Version,
};
use crate::values::{Param, ParameterSet};

const LIST_URI: &str = "/Accounts/{account_sid}/AvailablePhoneNumbers/{country_code}/Local.json";

/// Account SID and country code the numbers were searched under.
pub type LocalContext = (String, String);

/// A local number available for purchase.
#[derive(Debug, Clone, Serialize)]
pub struct Local {
    /// `none`, `any`, `local` or `foreign`.
    pub address_requirements: Option<String>,
    pub beta: Option<bool>,
    /// Capability flags, e.g. `{"MMS": true, "SMS": false, "voice": true}`.
    pub capabilities: Option<Value>,
    pub friendly_name: Option<String>,
    pub iso_country: Option<String>,
    pub lata: Option<String>,
    pub latitude: Option<BigDecimal>,
    pub locality: Option<String>,
    pub longitude: Option<BigDecimal>,
    /// E.164 formatted number.
    pub phone_number: Option<String>,
    pub postal_code: Option<String>,
    pub rate_center: Option<String>,
    pub region: Option<String>,
}

impl InstanceResource for Local {
    type Context = LocalContext;
    const NAME: &'static str = "Local";

    fn from_payload(
        _version: &Arc<Version>,
        payload: &Value,
        _context: &LocalContext,
    ) -> Result<Self, RestError> {
        let fields = expect_object(Self::NAME, payload)?;

        Ok(Self {
            address_requirements: deserialize::string(fields.get("address_requirements"))?,
            beta: deserialize::boolean(fields.get("beta"))?,
            capabilities: deserialize::json(fields.get("capabilities")),
            friendly_name: deserialize::string(fields.get("friendly_name"))?,
            iso_country: deserialize::string(fields.get("iso_country"))?,
            lata: deserialize::string(fields.get("lata"))?,
            latitude: deserialize::decimal(fields.get("latitude"))?,
            locality: deserialize::string(fields.get("locality"))?,
            longitude: deserialize::decimal(fields.get("longitude"))?,
            phone_number: deserialize::string(fields.get("phone_number"))?,
            postal_code: deserialize::string(fields.get("postal_code"))?,
            rate_center: deserialize::string(fields.get("rate_center"))?,
            region: deserialize::string(fields.get("region"))?,
        })
    }
}

/// Search filters for available local numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalReadParams {
    pub area_code: Param<u32>,
    /// Pattern the number must match; `*` matches any digit.
    pub contains: Param<String>,
    pub sms_enabled: Param<bool>,
    pub mms_enabled: Param<bool>,
    pub voice_enabled: Param<bool>,
    pub fax_enabled: Param<bool>,
    pub exclude_all_address_required: Param<bool>,
    pub exclude_local_address_required: Param<bool>,
    pub exclude_foreign_address_required: Param<bool>,
    pub beta: Param<bool>,
    pub near_number: Param<String>,
    /// `latitude,longitude` to search around.
    pub near_lat_long: Param<String>,
    /// Search radius in miles around `near_number` or `near_lat_long`.
    pub distance: Param<u32>,
    pub in_postal_code: Param<String>,
    pub in_region: Param<String>,
    pub in_rate_center: Param<String>,
    pub in_lata: Param<String>,
    pub in_locality: Param<String>,
}

impl LocalReadParams {
    fn to_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("AreaCode", self.area_code.clone())
            .with("Contains", self.contains.clone())
            .with("SmsEnabled", self.sms_enabled.clone())
            .with("MmsEnabled", self.mms_enabled.clone())
            .with("VoiceEnabled", self.voice_enabled.clone())
            .with("FaxEnabled", self.fax_enabled.clone())
            .with("ExcludeAllAddressRequired", self.exclude_all_address_required.clone())
            .with("ExcludeLocalAddressRequired", self.exclude_local_address_required.clone())
            .with("ExcludeForeignAddressRequired", self.exclude_foreign_address_required.clone())
            .with("Beta", self.beta.clone())
            .with("NearNumber", self.near_number.clone())
            .with("NearLatLong", self.near_lat_long.clone())
            .with("Distance", self.distance.clone())
            .with("InPostalCode", self.in_postal_code.clone())
            .with("InRegion", self.in_region.clone())
            .with("InRateCenter", self.in_rate_center.clone())
            .with("InLata", self.in_lata.clone())
            .with("InLocality", self.in_locality.clone())
    }
}

/// Available local numbers in one country.
#[derive(Debug, Clone)]
pub struct LocalList {
    version: Arc<Version>,
    context: LocalContext,
    uri: String,
}

impl LocalList {
    /// Creates the list for an account and country.
    #[must_use]
    pub fn new(version: Arc<Version>, account_sid: &str, country_code: &str) -> Self {
        Self {
            version,
            context: (account_sid.to_string(), country_code.to_string()),
            uri: build_path(
                LIST_URI,
                &[("account_sid", account_sid), ("country_code", country_code)],
            ),
        }
    }

    /// Fetches one page of numbers.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching or decoding the page.
    pub fn page(
        &self,
        params: &LocalReadParams,
        options: PageOptions,
    ) -> Result<Page<Local>, RestError> {
        resources::page(
            &self.version,
            self.context.clone(),
            self.uri.clone(),
            params.to_params(),
            options,
        )
    }

    /// Streams numbers lazily.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub fn stream(
        &self,
        params: &LocalReadParams,
        options: ReadOptions,
    ) -> Result<RecordStream<Local>, RestError> {
        resources::stream(
            &self.version,
            self.context.clone(),
            self.uri.clone(),
            params.to_params(),
            options,
        )
    }

    /// Reads numbers eagerly.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered on any page.
    pub fn read(
        &self,
        params: &LocalReadParams,
        options: ReadOptions,
    ) -> Result<Vec<Local>, RestError> {
        self.stream(params, options)?.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mock_version;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_local_from_payload() {
        let (version, _) = mock_version();
        let payload = json!({
            "address_requirements": "none",
            "beta": false,
            "capabilities": {"MMS": true, "SMS": false, "voice": true},
            "friendly_name": "(808) 925-1571",
            "iso_country": "US",
            "lata": "834",
            "latitude": "19.720000",
            "longitude": "-155.090000",
            "phone_number": "+18089251571",
            "postal_code": "96720",
            "rate_center": "HILO",
            "region": "HI"
        });
        let context = ("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(), "US".to_string());

        let local = Local::from_payload(&version, &payload, &context).unwrap();

        assert_eq!(local.beta, Some(false));
        assert_eq!(local.latitude, Some(BigDecimal::from_str("19.72").unwrap()));
        assert_eq!(local.longitude, Some(BigDecimal::from_str("-155.09").unwrap()));
        assert_eq!(local.capabilities.unwrap()["voice"], true);
        assert!(local.locality.is_none());
    }

    #[test]
    fn test_read_params_encoding() {
        let params = LocalReadParams {
            area_code: Param::Value(510),
            sms_enabled: Param::Value(true),
            ..Default::default()
        };
        assert_eq!(
            params.to_params().to_pairs(),
            vec![
                ("AreaCode".to_string(), "510".to_string()),
                ("SmsEnabled".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_uri_includes_country() {
        let (version, _) = mock_version();
        let list = LocalList::new(version, "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "US");
        assert_eq!(
            list.uri,
            "/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/AvailablePhoneNumbers/US/Local.json"
        );
    }
}
