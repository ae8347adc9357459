//! REST client implementation for the Twilio API.
//!
//! This module provides the [`RestClient`] type: the object every
//! [`Domain`](crate::rest::Domain) forwards its requests to. It fills in
//! credentials and default headers, routes requests to a regional host when
//! configured, and hands them to the [`HttpClient`] transport.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::{
    BasicAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, SDK_VERSION,
};
use crate::config::TwilioConfig;
use crate::rest::resources::api::Api;
use crate::rest::resources::conversations::Conversations;

/// Region assumed when only an edge is configured.
const DEFAULT_REGION: &str = "us1";

/// REST client for the Twilio API.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Domain accessors take `self: &Arc<Self>`
/// so that domains, versions, pages and streams can share the client.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use twilio_api::{AccountSid, AuthToken, RestClient, TwilioConfig};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")?)
///     .auth_token(AuthToken::new("auth-token")?)
///     .build()?;
///
/// let client = Arc::new(RestClient::new(config)?);
///
/// for queue in client.api().v2010().account().queues().stream(Default::default())? {
///     println!("{:?}", queue?.friendly_name);
/// }
/// ```
#[derive(Debug)]
pub struct RestClient {
    config: TwilioConfig,
    http_client: Arc<dyn HttpClient>,
    default_headers: HashMap<String, String>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client backed by [`ReqwestHttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be created.
    pub fn new(config: TwilioConfig) -> Result<Self, HttpError> {
        Ok(Self::with_http_client(
            config,
            Arc::new(ReqwestHttpClient::new()?),
        ))
    }

    /// Creates a new REST client with a custom transport.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials and routing settings
    /// * `http_client` - The transport every request is sent through
    #[must_use]
    pub fn with_http_client(config: TwilioConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let user_agent = Self::user_agent(config.user_agent_extensions());

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept-Charset".to_string(), "utf-8".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            config,
            http_client,
            default_headers,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &TwilioConfig {
        &self.config
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the `api` domain (accounts, queues, phone numbers...).
    #[must_use]
    pub fn api(self: &Arc<Self>) -> Api {
        Api::new(Arc::clone(self))
    }

    /// Returns the `conversations` domain.
    #[must_use]
    pub fn conversations(self: &Arc<Self>) -> Conversations {
        Conversations::new(Arc::clone(self))
    }

    /// Sends a request through the transport.
    ///
    /// Fills in, when the request does not carry its own:
    /// - basic auth from the configured username and auth token
    /// - the default headers (`User-Agent`, `Accept`, `Accept-Charset`)
    /// - `Content-Type: application/x-www-form-urlencoded` for POST and PUT
    /// - the configured timeout
    ///
    /// and rewrites `*.twilio.com` hosts for the configured region and edge.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or the transport fails.
    /// Non-2xx responses are returned as `Ok`.
    pub fn request(&self, mut request: HttpRequest) -> Result<HttpResponse, HttpError> {
        if request.auth.is_none() {
            request.auth = Some(BasicAuth::new(
                self.config.username(),
                self.config.auth_token().as_ref(),
            ));
        }

        for (name, value) in &self.default_headers {
            if request.header(name).is_none() {
                request.headers.insert(name.clone(), value.clone());
            }
        }
        if request.method.allows_body() && request.header("Content-Type").is_none() {
            request.headers.insert(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            );
        }

        if request.timeout.is_none() {
            request.timeout = self.config.timeout();
        }

        request.url = self.hostname(&request.url);
        request.verify()?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            params = request.params.len(),
            data = request.data.len(),
            "Sending Twilio API request"
        );

        let response = self.http_client.request(request)?;

        tracing::debug!(
            status_code = response.status_code,
            request_id = response.request_id().unwrap_or_default(),
            "Twilio API response"
        );

        Ok(response)
    }

    /// Rewrites the host of a `*.twilio.com` URL for the configured edge and region.
    ///
    /// `{product}.twilio.com` becomes `{product}.{edge}.{region}.twilio.com`.
    /// Components already present in the host are kept unless overridden by
    /// configuration; the region defaults to `us1` when only an edge is known.
    #[must_use]
    pub fn hostname(&self, url: &str) -> String {
        if self.config.region().is_none() && self.config.edge().is_none() {
            return url.to_string();
        }

        let Some(scheme_end) = url.find("://") else {
            return url.to_string();
        };
        let authority_start = scheme_end + 3;
        let authority_end = url[authority_start..]
            .find(['/', '?', '#'])
            .map_or(url.len(), |offset| authority_start + offset);
        let host = &url[authority_start..authority_end];

        let pieces: Vec<&str> = host.split('.').collect();
        if pieces.len() < 3 || !host.ends_with(".twilio.com") {
            return url.to_string();
        }

        let (mut edge, mut region) = match pieces.len() {
            4 => (None, Some(pieces[1])),
            5 => (Some(pieces[1]), Some(pieces[2])),
            _ => (None, None),
        };
        edge = self.config.edge().or(edge);
        region = self
            .config
            .region()
            .or(region)
            .or_else(|| edge.map(|_| DEFAULT_REGION));

        let suffix = &pieces[pieces.len() - 2..];
        let new_host = [Some(pieces[0]), edge, region, Some(suffix[0]), Some(suffix[1])]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(".");

        format!(
            "{}{}{}",
            &url[..authority_start],
            new_host,
            &url[authority_end..]
        )
    }

    fn user_agent(extensions: &[String]) -> String {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let mut user_agent = format!(
            "twilio-rust/{SDK_VERSION} ({} {}) Rust/{rust_version}",
            std::env::consts::OS,
            std::env::consts::ARCH,
        );
        for extension in extensions {
            user_agent.push(' ');
            user_agent.push_str(extension);
        }
        user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::{AccountSid, AuthToken, TwilioConfigBuilder};
    use crate::test_support::MockHttpClient;
    use std::time::Duration;

    const SID: &str = "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    fn config_builder() -> TwilioConfigBuilder {
        TwilioConfig::builder()
            .account_sid(AccountSid::new(SID).unwrap())
            .auth_token(AuthToken::new("token").unwrap())
    }

    fn client_with(config: TwilioConfig) -> (RestClient, Arc<MockHttpClient>) {
        let mock = Arc::new(MockHttpClient::new());
        let client = RestClient::with_http_client(config, mock.clone());
        (client, mock)
    }

    #[test]
    fn test_request_fills_auth_headers_and_timeout() {
        let config = config_builder()
            .timeout(Duration::from_secs(7))
            .user_agent_extension("my-app/2.0")
            .build()
            .unwrap();
        let (client, mock) = client_with(config);
        mock.respond(HttpResponse::new(200, "{}"));

        let request = HttpRequest::builder(HttpMethod::Get, "https://api.twilio.com/x.json")
            .build()
            .unwrap();
        client.request(request).unwrap();

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        let sent = &sent[0];
        assert_eq!(sent.auth, Some(BasicAuth::new(SID, "token")));
        assert_eq!(sent.timeout, Some(Duration::from_secs(7)));
        assert_eq!(sent.header("Accept"), Some("application/json"));
        assert_eq!(sent.header("Accept-Charset"), Some("utf-8"));
        assert!(sent.header("Content-Type").is_none());

        let user_agent = sent.header("User-Agent").unwrap();
        assert!(user_agent.starts_with("twilio-rust/"));
        assert!(user_agent.contains(" Rust/"));
        assert!(user_agent.ends_with(" my-app/2.0"));
    }

    #[test]
    fn test_request_keeps_caller_overrides() {
        let (client, mock) = client_with(config_builder().build().unwrap());
        mock.respond(HttpResponse::new(201, "{}"));

        let request = HttpRequest::builder(HttpMethod::Post, "https://api.twilio.com/x.json")
            .auth(BasicAuth::new("SKkey", "secret"))
            .header("accept", "text/xml")
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        client.request(request).unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.auth, Some(BasicAuth::new("SKkey", "secret")));
        assert_eq!(sent.header("Accept"), Some("text/xml"));
        assert_eq!(sent.timeout, Some(Duration::from_secs(1)));
        assert_eq!(
            sent.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_username_is_used_for_basic_auth() {
        let (client, mock) = client_with(config_builder().username("SKxxx").build().unwrap());
        mock.respond(HttpResponse::new(200, "{}"));

        let request = HttpRequest::builder(HttpMethod::Get, "https://api.twilio.com/x.json")
            .build()
            .unwrap();
        client.request(request).unwrap();

        assert_eq!(
            mock.requests()[0].auth,
            Some(BasicAuth::new("SKxxx", "token"))
        );
    }

    #[test]
    fn test_non_2xx_is_not_an_error() {
        let (client, mock) = client_with(config_builder().build().unwrap());
        mock.respond(HttpResponse::new(503, "unavailable"));

        let request = HttpRequest::builder(HttpMethod::Get, "https://api.twilio.com/x.json")
            .build()
            .unwrap();
        let response = client.request(request).unwrap();
        assert_eq!(response.status_code, 503);
    }

    #[test]
    fn test_hostname_untouched_without_region_or_edge() {
        let (client, _) = client_with(config_builder().build().unwrap());
        assert_eq!(
            client.hostname("https://api.twilio.com/2010-04-01/Accounts.json"),
            "https://api.twilio.com/2010-04-01/Accounts.json"
        );
    }

    #[test]
    fn test_hostname_with_region_only() {
        let (client, _) = client_with(config_builder().region("ie1").build().unwrap());
        assert_eq!(
            client.hostname("https://api.twilio.com/2010-04-01/Accounts.json"),
            "https://api.ie1.twilio.com/2010-04-01/Accounts.json"
        );
    }

    #[test]
    fn test_hostname_with_edge_defaults_region() {
        let (client, _) = client_with(config_builder().edge("dublin").build().unwrap());
        assert_eq!(
            client.hostname("https://conversations.twilio.com/v1/Conversations"),
            "https://conversations.dublin.us1.twilio.com/v1/Conversations"
        );
    }

    #[test]
    fn test_hostname_with_edge_and_region() {
        let (client, _) = client_with(
            config_builder()
                .edge("sydney")
                .region("au1")
                .build()
                .unwrap(),
        );
        assert_eq!(
            client.hostname("https://api.twilio.com/2010-04-01/Accounts.json?PageSize=5"),
            "https://api.sydney.au1.twilio.com/2010-04-01/Accounts.json?PageSize=5"
        );
    }

    #[test]
    fn test_hostname_overrides_existing_components() {
        let (client, _) = client_with(config_builder().edge("tokyo").build().unwrap());
        assert_eq!(
            client.hostname("https://api.ashburn.us1.twilio.com/v1/Foo"),
            "https://api.tokyo.us1.twilio.com/v1/Foo"
        );
        assert_eq!(
            client.hostname("https://api.ie1.twilio.com/v1/Foo"),
            "https://api.tokyo.ie1.twilio.com/v1/Foo"
        );
    }

    #[test]
    fn test_hostname_ignores_foreign_hosts() {
        let (client, _) = client_with(config_builder().region("ie1").build().unwrap());
        assert_eq!(
            client.hostname("http://127.0.0.1:8080/v1/Foo"),
            "http://127.0.0.1:8080/v1/Foo"
        );
        assert_eq!(client.hostname("/v1/Foo"), "/v1/Foo");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
