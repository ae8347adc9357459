//! Version `2010-04-01` of the `api` domain.
//!
//! Everything in this version lives under an account:
//!
//! ```rust,ignore
//! let account = client.api().v2010().account();              // the configured account
//! let other = client.api().v2010().accounts("AC...");        // a subaccount
//!
//! let queue = account.queue("QU...").fetch()?;
//! let numbers = account.available_phone_numbers("US").local().read(&Default::default(), Default::default())?;
//! ```

use std::sync::Arc;

use crate::rest::Version;

pub mod address;
pub mod local;
pub mod mobile;
pub mod queue;

pub use address::{Address, AddressContext, AddressList};
pub use local::{Local, LocalList};
pub use mobile::{Mobile, MobileList};
pub use queue::{Queue, QueueContext, QueueList};

/// Version `2010-04-01`.
#[derive(Debug, Clone)]
pub struct V2010 {
    version: Arc<Version>,
}

impl V2010 {
    /// Wraps a version handle.
    #[must_use]
    pub const fn new(version: Arc<Version>) -> Self {
        Self { version }
    }

    /// Returns the version handle.
    #[must_use]
    pub const fn version(&self) -> &Arc<Version> {
        &self.version
    }

    /// Scopes to an account by SID.
    #[must_use]
    pub fn accounts(&self, sid: impl Into<String>) -> AccountContext {
        AccountContext {
            version: Arc::clone(&self.version),
            sid: sid.into(),
        }
    }

    /// Scopes to the account the client is configured for.
    #[must_use]
    pub fn account(&self) -> AccountContext {
        let sid = self.version.domain().client().config().account_sid().to_string();
        self.accounts(sid)
    }
}

/// One account and the resources nested under it.
#[derive(Debug, Clone)]
pub struct AccountContext {
    version: Arc<Version>,
    sid: String,
}

impl AccountContext {
    /// Returns the account SID.
    #[must_use]
    pub fn sid(&self) -> &str {
        &self.sid
    }

    /// Returns the account's queues.
    #[must_use]
    pub fn queues(&self) -> QueueList {
        QueueList::new(Arc::clone(&self.version), &self.sid)
    }

    /// Returns one queue.
    #[must_use]
    pub fn queue(&self, sid: impl Into<String>) -> QueueContext {
        QueueContext::new(Arc::clone(&self.version), &self.sid, sid)
    }

    /// Returns the account's addresses.
    #[must_use]
    pub fn addresses(&self) -> AddressList {
        AddressList::new(Arc::clone(&self.version), &self.sid)
    }

    /// Returns one address.
    #[must_use]
    pub fn address(&self, sid: impl Into<String>) -> AddressContext {
        AddressContext::new(Arc::clone(&self.version), &self.sid, sid)
    }

    /// Returns the numbers available for purchase in a country.
    #[must_use]
    pub fn available_phone_numbers(
        &self,
        country_code: impl Into<String>,
    ) -> AvailablePhoneNumberCountry {
        AvailablePhoneNumberCountry {
            version: Arc::clone(&self.version),
            account_sid: self.sid.clone(),
            country_code: country_code.into(),
        }
    }

    /// Returns the account's incoming phone numbers.
    #[must_use]
    pub fn incoming_phone_numbers(&self) -> IncomingPhoneNumbers {
        IncomingPhoneNumbers {
            version: Arc::clone(&self.version),
            account_sid: self.sid.clone(),
        }
    }
}

/// Available phone numbers in one country.
#[derive(Debug, Clone)]
pub struct AvailablePhoneNumberCountry {
    version: Arc<Version>,
    account_sid: String,
    country_code: String,
}

impl AvailablePhoneNumberCountry {
    /// Returns the ISO country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Returns the local numbers.
    #[must_use]
    pub fn local(&self) -> LocalList {
        LocalList::new(
            Arc::clone(&self.version),
            &self.account_sid,
            &self.country_code,
        )
    }
}

/// Incoming phone numbers of one account.
#[derive(Debug, Clone)]
pub struct IncomingPhoneNumbers {
    version: Arc<Version>,
    account_sid: String,
}

impl IncomingPhoneNumbers {
    /// Returns the mobile numbers.
    #[must_use]
    pub fn mobile(&self) -> MobileList {
        MobileList::new(Arc::clone(&self.version), &self.account_sid)
    }
}
