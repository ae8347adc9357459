//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse, RestClient};
use crate::config::{AccountSid, ApiVersion, AuthToken, TwilioConfig};
use crate::rest::{deserialize, Domain, InstanceResource, RestError, Version};

pub const ACCOUNT_SID: &str = "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Transport that replays queued responses and records every request.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| HttpError::Transport {
                message: "no response queued".to_string(),
            })
    }
}

pub fn test_config() -> TwilioConfig {
    TwilioConfig::builder()
        .account_sid(AccountSid::new(ACCOUNT_SID).unwrap())
        .auth_token(AuthToken::new("auth-token").unwrap())
        .build()
        .unwrap()
}

pub fn mock_client_with(config: TwilioConfig) -> (Arc<RestClient>, Arc<MockHttpClient>) {
    let mock = Arc::new(MockHttpClient::new());
    let client = Arc::new(RestClient::with_http_client(config, mock.clone()));
    (client, mock)
}

pub fn mock_client() -> (Arc<RestClient>, Arc<MockHttpClient>) {
    mock_client_with(test_config())
}

pub fn mock_version() -> (Arc<Version>, Arc<MockHttpClient>) {
    let (client, mock) = mock_client();
    let domain = Arc::new(Domain::new(client, "https://api.twilio.com"));
    (Arc::new(Version::new(domain, ApiVersion::V2010_04_01)), mock)
}

/// Minimal resource with only a SID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub sid: Option<String>,
}

impl InstanceResource for Record {
    type Context = ();
    const NAME: &'static str = "Record";

    fn from_payload(_: &Arc<Version>, payload: &Value, _: &()) -> Result<Self, RestError> {
        Ok(Self {
            sid: deserialize::string(payload.get("sid"))?,
        })
    }
}
