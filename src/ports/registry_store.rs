//! Registry store port.
//!
//! The hosted record store owns all durable state: a `companies`
//! collection with a unique constraint on the CNPJ.
//!
//! # Design
//!
//! - **No caching**: every call is a round trip
//! - **No retries**: retrying is the caller's decision
//! - **Insert is authoritative**: `exists` followed by `insert` is not atomic,
//!   so a `DuplicateKey` from `insert` is the real conflict signal

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::company::{Cnpj, CompanyRecord};

/// Port for existence checks and inserts against the companies store.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Whether a company with this CNPJ is already registered.
    ///
    /// A missing row is `Ok(false)`, never an error.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on connectivity or server failure
    async fn exists(&self, cnpj: &Cnpj) -> Result<bool, StoreError>;

    /// Insert a new company row.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` when the unique constraint on the CNPJ rejects the row
    /// - `Unavailable` on any other failure
    async fn insert(&self, record: &CompanyRecord) -> Result<(), StoreError>;
}

/// Store failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a company with this CNPJ is already registered")]
    DuplicateKey,

    #[error("registry store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }
}
