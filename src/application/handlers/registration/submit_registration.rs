//! SubmitRegistrationHandler - validates and persists a registration.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::registration::{RegistrationDraft, RegistrationError, RegistrationForm};
use crate::ports::{RegistryStore, StoreError};

/// Command to submit the draft as the user last saw it.
#[derive(Debug, Clone)]
pub struct SubmitRegistrationCommand {
    pub draft: RegistrationDraft,
}

/// Handler for registration submits.
pub struct SubmitRegistrationHandler {
    store: Arc<dyn RegistryStore>,
}

impl SubmitRegistrationHandler {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Runs the submit sequence and returns the resulting snapshot.
    ///
    /// Local checks come first and never touch the store. The existence
    /// re-check and the insert are separate round trips; a `DuplicateKey`
    /// from the insert is the final word on conflicts.
    pub async fn handle(&self, cmd: SubmitRegistrationCommand) -> RegistrationForm {
        // 1. Local validation
        let (form, record) = RegistrationForm::restore(cmd.draft).begin_submit(Utc::now());
        let Some(record) = record else {
            tracing::debug!(error = ?form.error(), "Registration rejected before contacting store");
            return form;
        };

        // 2. Existence re-check
        match self.store.exists(&record.cnpj).await {
            Ok(false) => {}
            Ok(true) => {
                tracing::info!(cnpj = %record.cnpj, "Registration rejected: already registered");
                return form.reject(RegistrationError::AlreadyRegistered);
            }
            Err(e) => {
                tracing::error!(cnpj = %record.cnpj, "Existence re-check failed: {}", e);
                return form.reject(match e {
                    StoreError::Unavailable(_) => RegistrationError::SaveFailed,
                    StoreError::DuplicateKey => RegistrationError::Unexpected,
                });
            }
        }

        // 3. Insert
        match self.store.insert(&record).await {
            Ok(()) => {
                tracing::info!(cnpj = %record.cnpj, "Company registered");
                form.complete_submission()
            }
            Err(StoreError::DuplicateKey) => {
                tracing::info!(cnpj = %record.cnpj, "Insert lost a race: already registered");
                form.reject(RegistrationError::AlreadyRegistered)
            }
            Err(e) => {
                tracing::error!(cnpj = %record.cnpj, "Failed to save registration: {}", e);
                form.reject(RegistrationError::SaveFailed)
            }
        }
    }
}
