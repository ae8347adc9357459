//! The `api` domain: `https://api.twilio.com`.

use std::sync::Arc;

use crate::clients::RestClient;
use crate::config::ApiVersion;
use crate::rest::{Domain, Version};

pub mod v2010;

pub use v2010::V2010;

/// Base URL of the `api` domain.
pub const BASE_URL: &str = "https://api.twilio.com";

/// The `api` domain and its versions.
#[derive(Debug, Clone)]
pub struct Api {
    domain: Arc<Domain>,
    v2010: Arc<Version>,
}

impl Api {
    /// Creates the domain for `client`.
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        let domain = Arc::new(Domain::new(client, BASE_URL));
        let v2010 = Arc::new(Version::new(Arc::clone(&domain), ApiVersion::V2010_04_01));
        Self { domain, v2010 }
    }

    /// Returns the underlying domain.
    #[must_use]
    pub const fn domain(&self) -> &Arc<Domain> {
        &self.domain
    }

    /// Returns version `2010-04-01`.
    #[must_use]
    pub fn v2010(&self) -> V2010 {
        V2010::new(Arc::clone(&self.v2010))
    }
}
