//! Version `v1` of the `conversations` domain.

use std::sync::Arc;

use crate::rest::Version;

pub mod completed;

pub use completed::{Completed, CompletedList};

/// Version `v1`.
#[derive(Debug, Clone)]
pub struct V1 {
    version: Arc<Version>,
}

impl V1 {
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

    /// Returns the completed conversations.
    #[must_use]
    pub fn completed(&self) -> CompletedList {
        CompletedList::new(Arc::clone(&self.version))
    }
}
