//! In-memory registry store for testing and development.
//!
//! Enforces the same uniqueness rule as the real store: a second insert for
//! a CNPJ fails with `DuplicateKey`. Not suitable for production; data is
//! lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::company::{Cnpj, CompanyRecord};
use crate::ports::{RegistryStore, StoreError};

/// In-memory companies table keyed by CNPJ.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistryStore {
    companies: Arc<RwLock<HashMap<Cnpj, CompanyRecord>>>,
}

impl InMemoryRegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with already registered companies.
    pub fn with_records(records: impl IntoIterator<Item = CompanyRecord>) -> Self {
        let companies = records
            .into_iter()
            .map(|record| (record.cnpj.clone(), record))
            .collect();
        Self {
            companies: Arc::new(RwLock::new(companies)),
        }
    }

    /// Get a stored record.
    pub async fn get(&self, cnpj: &Cnpj) -> Option<CompanyRecord> {
        self.companies.read().await.get(cnpj).cloned()
    }

    /// Get the number of stored records.
    pub async fn len(&self) -> usize {
        self.companies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.companies.read().await.is_empty()
    }
}

#[async_trait]
impl RegistryStore for InMemoryRegistryStore {
    async fn exists(&self, cnpj: &Cnpj) -> Result<bool, StoreError> {
        Ok(self.companies.read().await.contains_key(cnpj))
    }

    async fn insert(&self, record: &CompanyRecord) -> Result<(), StoreError> {
        let mut companies = self.companies.write().await;
        if companies.contains_key(&record.cnpj) {
            return Err(StoreError::DuplicateKey);
        }
        companies.insert(record.cnpj.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::SurveyAnswer;
    use chrono::Utc;

    fn record(raw: &str) -> CompanyRecord {
        CompanyRecord {
            cnpj: Cnpj::parse(raw).unwrap(),
            legal_name: "ACME LTDA".to_string(),
            trade_name: "ACME".to_string(),
            postal_code: String::new(),
            street: String::new(),
            number: String::new(),
            district: String::new(),
            municipality: "NATAL".to_string(),
            state: "RN".to_string(),
            email: "ok@ok.com".to_string(),
            phone: "(84) 91234-5678".to_string(),
            contact_person_name: "Maria".to_string(),
            participation: SurveyAnswer::Yes,
            affiliation_interest: SurveyAnswer::No,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn missing_company_does_not_exist() {
        let store = InMemoryRegistryStore::new();
        let exists = store.exists(&Cnpj::parse("11222333000181").unwrap()).await;
        assert_eq!(exists, Ok(false));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn inserted_company_exists() {
        let store = InMemoryRegistryStore::new();
        let record = record("11222333000181");

        store.insert(&record).await.unwrap();

        assert_eq!(store.exists(&record.cnpj).await, Ok(true));
        assert_eq!(store.get(&record.cnpj).await, Some(record));
    }

    #[tokio::test]
    async fn second_insert_is_duplicate_key() {
        let store = InMemoryRegistryStore::with_records([record("11222333000181")]);

        let result = store.insert(&record("11222333000181")).await;

        assert_eq!(result, Err(StoreError::DuplicateKey));
        assert_eq!(store.len().await, 1);
    }
}
