//! LookupCompanyHandler - searches the registry for the typed CNPJ.

use std::sync::Arc;

use super::prefill::lookup_company;
use crate::domain::registration::{FieldEdit, RegistrationDraft, RegistrationForm};
use crate::ports::{CompanyLookup, RegistryStore};

/// Command to search a CNPJ, keeping whatever the user already typed.
#[derive(Debug, Clone, Default)]
pub struct LookupCompanyCommand {
    pub cnpj: String,
    pub draft: Option<RegistrationDraft>,
    /// Gate warning the client is still showing.
    pub warning: Option<String>,
}

/// Handler for the registration view's CNPJ search.
pub struct LookupCompanyHandler {
    lookup: Arc<dyn CompanyLookup>,
    store: Arc<dyn RegistryStore>,
}

impl LookupCompanyHandler {
    pub fn new(lookup: Arc<dyn CompanyLookup>, store: Arc<dyn RegistryStore>) -> Self {
        Self { lookup, store }
    }

    pub async fn handle(&self, cmd: LookupCompanyCommand) -> RegistrationForm {
        let form = RegistrationForm::restore(cmd.draft.unwrap_or_default())
            .with_warning(cmd.warning)
            .edit(FieldEdit::Cnpj(cmd.cnpj));
        lookup_company(form, self.lookup.as_ref(), self.store.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::lookup::MockCompanyLookup;
    use crate::application::handlers::test_support::{
        acme_cnpj, acme_profile, MockRegistryStore, ACME,
    };
    use crate::domain::company::{Cnpj, CompanyProfile};
    use crate::domain::registration::{RegistrationError, RegistrationStatus};
    use crate::ports::{LookupError, StoreError};

    fn cmd(cnpj: &str) -> LookupCompanyCommand {
        LookupCompanyCommand {
            cnpj: cnpj.to_string(),
            ..Default::default()
        }
    }

    fn handler(lookup: &MockCompanyLookup, store: &Arc<MockRegistryStore>) -> LookupCompanyHandler {
        LookupCompanyHandler::new(Arc::new(lookup.clone()), store.clone())
    }

    #[tokio::test]
    async fn successful_lookup_prefills_company() {
        let lookup = MockCompanyLookup::new().with_company(acme_profile());
        let store = Arc::new(MockRegistryStore::new());

        let form = handler(&lookup, &store).handle(cmd(ACME)).await;

        assert_eq!(form.status(), RegistrationStatus::Prefilled);
        assert_eq!(form.draft().legal_name, "ACME LTDA");
        assert_eq!(form.draft().trade_name, "ACME");
        assert!(form.error().is_none());
        assert_eq!(store.exists_calls(), 1);
    }

    #[tokio::test]
    async fn incomplete_cnpj_is_rejected_without_lookup() {
        let lookup = MockCompanyLookup::new();
        let store = Arc::new(MockRegistryStore::new());

        let form = handler(&lookup, &store).handle(cmd("11.222.333/0001")).await;

        assert_eq!(form.status(), RegistrationStatus::Empty);
        assert_eq!(form.error(), Some(RegistrationError::InvalidCnpj));
        assert_eq!(lookup.call_count(), 0);
        assert_eq!(store.exists_calls(), 0);
    }

    #[tokio::test]
    async fn over_length_cnpj_is_rejected_without_lookup() {
        let lookup = MockCompanyLookup::new().with_company(acme_profile());
        let store = Arc::new(MockRegistryStore::new());

        for input in ["112223330001819", "11.222.333/0001-8199"] {
            let form = handler(&lookup, &store).handle(cmd(input)).await;

            assert_eq!(form.status(), RegistrationStatus::Empty);
            assert_eq!(form.error(), Some(RegistrationError::InvalidCnpj));
            assert!(form.draft().legal_name.is_empty());
        }
        assert_eq!(lookup.call_count(), 0);
        assert_eq!(store.exists_calls(), 0);
    }

    #[tokio::test]
    async fn gate_warning_is_kept_across_a_search() {
        let lookup = MockCompanyLookup::new().with_company(acme_profile());
        let store = Arc::new(MockRegistryStore::new());

        let form = handler(&lookup, &store)
            .handle(LookupCompanyCommand {
                cnpj: ACME.to_string(),
                draft: None,
                warning: Some("EMPRESA NÃO CADASTRADA".to_string()),
            })
            .await;

        assert_eq!(form.status(), RegistrationStatus::Prefilled);
        assert_eq!(form.warning(), Some("EMPRESA NÃO CADASTRADA"));
    }

    #[tokio::test]
    async fn each_lookup_failure_has_its_own_error() {
        let cases = [
            (LookupError::NotFound, RegistrationError::CompanyNotFound),
            (LookupError::RateLimited, RegistrationError::LookupRateLimited),
            (LookupError::network("502"), RegistrationError::LookupUnavailable),
        ];

        for (failure, expected) in cases {
            let lookup = MockCompanyLookup::new().with_failure(acme_cnpj(), failure);
            let store = Arc::new(MockRegistryStore::new());

            let form = handler(&lookup, &store).handle(cmd(ACME)).await;

            assert_eq!(form.status(), RegistrationStatus::LookupFailed);
            assert_eq!(form.error(), Some(expected));
            assert!(form.draft().legal_name.is_empty());
            assert_eq!(store.exists_calls(), 0);
        }
    }

    #[tokio::test]
    async fn repeated_lookup_yields_same_outcome_class() {
        let lookup = MockCompanyLookup::new()
            .with_failure(acme_cnpj(), LookupError::RateLimited)
            .with_company(CompanyProfile::named(
                Cnpj::parse("99888777000166").unwrap(),
                "OUTRA LTDA",
            ));
        let store = Arc::new(MockRegistryStore::new());
        let handler = handler(&lookup, &store);

        let first = handler.handle(cmd(ACME)).await;
        let second = handler.handle(cmd(ACME)).await;

        assert_eq!(first.status(), second.status());
        assert_eq!(first.error(), second.error());
        assert_eq!(lookup.call_count(), 2);
    }

    #[tokio::test]
    async fn registered_company_is_flagged_but_still_prefilled() {
        let lookup = MockCompanyLookup::new().with_company(acme_profile());
        let store = Arc::new(MockRegistryStore::new().with_registered(acme_cnpj()));

        let form = handler(&lookup, &store).handle(cmd(ACME)).await;

        assert_eq!(form.status(), RegistrationStatus::Prefilled);
        assert_eq!(form.draft().legal_name, "ACME LTDA");
        assert_eq!(form.error(), Some(RegistrationError::AlreadyRegistered));
    }

    #[tokio::test]
    async fn store_failure_after_lookup_is_ignored() {
        let lookup = MockCompanyLookup::new().with_company(acme_profile());
        let store =
            Arc::new(MockRegistryStore::new().failing_exists(StoreError::unavailable("down")));

        let form = handler(&lookup, &store).handle(cmd(ACME)).await;

        assert_eq!(form.status(), RegistrationStatus::Prefilled);
        assert!(form.error().is_none());
    }

    #[tokio::test]
    async fn typed_fields_survive_a_new_search() {
        let lookup = MockCompanyLookup::new().with_company(acme_profile());
        let store = Arc::new(MockRegistryStore::new());
        let draft = RegistrationDraft {
            contact_person_name: "Maria".to_string(),
            ..Default::default()
        };

        let form = handler(&lookup, &store)
            .handle(LookupCompanyCommand {
                cnpj: ACME.to_string(),
                draft: Some(draft),
                warning: None,
            })
            .await;

        assert_eq!(form.draft().contact_person_name, "Maria");
        assert_eq!(form.draft().legal_name, "ACME LTDA");
    }
}
