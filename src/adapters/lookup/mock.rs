//! Mock company lookup for testing.
//!
//! Serves canned registry answers per CNPJ so flows can run without calling
//! the public registry.
//!
//! # Features
//!
//! - Canned profiles or failures per CNPJ (unknown CNPJs are `NotFound`)
//! - Simulated latency for coalescing tests
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let lookup = MockCompanyLookup::new()
//!     .with_company(CompanyProfile::named(cnpj.clone(), "ACME LTDA"))
//!     .with_delay(Duration::from_millis(50));
//!
//! let profile = lookup.lookup(&cnpj).await?;
//! assert_eq!(lookup.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::company::{Cnpj, CompanyProfile};
use crate::ports::{CompanyLookup, LookupError};

/// Mock registry lookup.
#[derive(Debug, Clone, Default)]
pub struct MockCompanyLookup {
    answers: HashMap<Cnpj, Result<CompanyProfile, LookupError>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<Cnpj>>>,
}

impl MockCompanyLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups for the profile's CNPJ with the profile.
    pub fn with_company(mut self, profile: CompanyProfile) -> Self {
        self.answers.insert(profile.cnpj.clone(), Ok(profile));
        self
    }

    /// Answer lookups for `cnpj` with `error`.
    pub fn with_failure(mut self, cnpj: Cnpj, error: LookupError) -> Self {
        self.answers.insert(cnpj, Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this lookup.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<Cnpj> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CompanyLookup for MockCompanyLookup {
    async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyProfile, LookupError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cnpj.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.answers
            .get(cnpj)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}
