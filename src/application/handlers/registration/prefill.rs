//! Lookup step shared by starting a registration and searching a CNPJ.

use crate::domain::registration::RegistrationForm;
use crate::ports::{CompanyLookup, RegistryStore};

/// Looks up the form's CNPJ and feeds the outcome back in.
///
/// After a successful prefill the store is asked whether the company is
/// already registered. That answer is advisory: it flags the form but keeps
/// the prefilled data, and a store failure here is only logged.
pub(crate) async fn lookup_company(
    form: RegistrationForm,
    lookup: &dyn CompanyLookup,
    store: &dyn RegistryStore,
) -> RegistrationForm {
    let (form, pending) = form.begin_lookup();
    let Some(cnpj) = pending else {
        return form;
    };

    let outcome = lookup.lookup(&cnpj).await;
    if let Err(e) = &outcome {
        tracing::warn!(cnpj = %cnpj, "Company lookup failed: {}", e);
    }
    let form = form.apply_lookup(outcome);
    if form.error().is_some() {
        return form;
    }

    match store.exists(&cnpj).await {
        Ok(true) => {
            tracing::info!(cnpj = %cnpj, "Looked-up company is already registered");
            form.flag_already_registered()
        }
        Ok(false) => form,
        Err(e) => {
            tracing::warn!(cnpj = %cnpj, "Ignoring failed existence check after lookup: {}", e);
            form
        }
    }
}
