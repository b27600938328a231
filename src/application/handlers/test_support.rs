//! Shared fakes for handler tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::company::{Cnpj, CompanyProfile, CompanyRecord};
use crate::ports::{RegistryStore, StoreError};

pub(crate) const ACME: &str = "11222333000181";

pub(crate) fn acme_cnpj() -> Cnpj {
    Cnpj::parse(ACME).unwrap()
}

pub(crate) fn acme_profile() -> CompanyProfile {
    CompanyProfile {
        cnpj: acme_cnpj(),
        legal_name: "ACME LTDA".to_string(),
        trade_name: "ACME".to_string(),
        postal_code: "59000000".to_string(),
        street: "RUA DAS FLORES".to_string(),
        number: "10".to_string(),
        district: "CENTRO".to_string(),
        municipality: "NATAL".to_string(),
        state: "RN".to_string(),
        email: String::new(),
        phone: String::new(),
    }
}

/// Registry store with scripted answers and call recording.
pub(crate) struct MockRegistryStore {
    registered: Mutex<HashSet<Cnpj>>,
    exists_error: Option<StoreError>,
    insert_error: Option<StoreError>,
    exists_calls: Mutex<Vec<Cnpj>>,
    inserted: Mutex<Vec<CompanyRecord>>,
}

impl MockRegistryStore {
    pub(crate) fn new() -> Self {
        Self {
            registered: Mutex::new(HashSet::new()),
            exists_error: None,
            insert_error: None,
            exists_calls: Mutex::new(Vec::new()),
            inserted: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_registered(self, cnpj: Cnpj) -> Self {
        self.registered.lock().unwrap().insert(cnpj);
        self
    }

    pub(crate) fn failing_exists(mut self, error: StoreError) -> Self {
        self.exists_error = Some(error);
        self
    }

    pub(crate) fn failing_insert(mut self, error: StoreError) -> Self {
        self.insert_error = Some(error);
        self
    }

    pub(crate) fn exists_calls(&self) -> usize {
        self.exists_calls.lock().unwrap().len()
    }

    pub(crate) fn inserted(&self) -> Vec<CompanyRecord> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistryStore for MockRegistryStore {
    async fn exists(&self, cnpj: &Cnpj) -> Result<bool, StoreError> {
        self.exists_calls.lock().unwrap().push(cnpj.clone());
        if let Some(error) = &self.exists_error {
            return Err(error.clone());
        }
        Ok(self.registered.lock().unwrap().contains(cnpj))
    }

    async fn insert(&self, record: &CompanyRecord) -> Result<(), StoreError> {
        if let Some(error) = &self.insert_error {
            return Err(error.clone());
        }
        self.inserted.lock().unwrap().push(record.clone());
        Ok(())
    }
}
