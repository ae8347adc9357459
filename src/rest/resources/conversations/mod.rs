//! The `conversations` domain: `https://conversations.twilio.com`.

use std::sync::Arc;

use crate::clients::RestClient;
use crate::config::ApiVersion;
use crate::rest::{Domain, Version};

pub mod v1;

pub use v1::V1;

/// Base URL of the `conversations` domain.
pub const BASE_URL: &str = "https://conversations.twilio.com";

/// The `conversations` domain and its versions.
#[derive(Debug, Clone)]
pub struct Conversations {
    domain: Arc<Domain>,
    v1: Arc<Version>,
}

impl Conversations {
    /// Creates the domain for `client`.
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        let domain = Arc::new(Domain::new(client, BASE_URL));
        let v1 = Arc::new(Version::new(Arc::clone(&domain), ApiVersion::V1));
        Self { domain, v1 }
    }

    /// Returns the underlying domain.
    #[must_use]
    pub const fn domain(&self) -> &Arc<Domain> {
        &self.domain
    }

    /// Returns version `v1`.
    #[must_use]
    pub fn v1(&self) -> V1 {
        V1::new(Arc::clone(&self.v1))
    }
}
