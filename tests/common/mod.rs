//! Shared fixtures for integration tests.
//!
//! [`Holodeck`] is an in-memory transport: it replays queued responses in
//! order and records every request it receives, after the client has filled
//! in credentials, headers and routing.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use twilio_api::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use twilio_api::{AccountSid, AuthToken, RestClient, TwilioConfig};

pub const ACCOUNT_SID: &str = "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const AUTH_TOKEN: &str = "AUTHTOKEN";

#[derive(Debug, Default)]
pub struct Holodeck {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl Holodeck {
    /// Queues a response.
    pub fn mock(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queues a response with a JSON body.
    pub fn mock_json(&self, status_code: u16, body: &serde_json::Value) {
        self.mock(HttpResponse::new(status_code, body.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Panics unless a request with this method and URL was received.
    pub fn assert_has_request(&self, method: HttpMethod, url: &str) -> HttpRequest {
        let requests = self.requests();
        requests
            .iter()
            .find(|request| request.method == method && request.url == url)
            .cloned()
            .unwrap_or_else(|| {
                let seen: Vec<_> = requests
                    .iter()
                    .map(|r| format!("{} {}", r.method, r.url))
                    .collect();
                panic!("no {method} {url} request; saw {seen:?}")
            })
    }
}

impl HttpClient for Holodeck {
    fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| HttpError::Transport {
                message: "holodeck has no response queued".to_string(),
            })
    }
}

pub fn config() -> TwilioConfig {
    TwilioConfig::builder()
        .account_sid(AccountSid::new(ACCOUNT_SID).unwrap())
        .auth_token(AuthToken::new(AUTH_TOKEN).unwrap())
        .build()
        .unwrap()
}

pub fn client_with(config: TwilioConfig) -> (Arc<RestClient>, Arc<Holodeck>) {
    let holodeck = Arc::new(Holodeck::default());
    let client = Arc::new(RestClient::with_http_client(config, holodeck.clone()));
    (client, holodeck)
}

pub fn client() -> (Arc<RestClient>, Arc<Holodeck>) {
    client_with(config())
}
