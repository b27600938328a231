//! Company lookup port.
//!
//! One read operation against the public company registry, keyed by a
//! validated CNPJ. Implementations are idempotent and never retry.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::company::{Cnpj, CompanyProfile};

/// Port for fetching company attributes from the public registry.
#[async_trait]
pub trait CompanyLookup: Send + Sync {
    /// Fetch the registry profile for `cnpj`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the registry has no such company
    /// - `RateLimited` if the registry asks the caller to back off
    /// - `NetworkOrServer` for transport failures and any other response
    async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyProfile, LookupError>;
}

/// Lookup failure modes. Callers must keep them distinct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("company not found in registry")]
    NotFound,

    #[error("registry rate limit reached")]
    RateLimited,

    #[error("registry request failed: {0}")]
    NetworkOrServer(String),
}

impl LookupError {
    pub fn network(message: impl Into<String>) -> Self {
        LookupError::NetworkOrServer(message.into())
    }
}
