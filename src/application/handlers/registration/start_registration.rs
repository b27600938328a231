//! StartRegistrationHandler - opens the registration view.

use std::sync::Arc;

use super::prefill::lookup_company;
use crate::domain::access::NavigationContext;
use crate::domain::registration::RegistrationForm;
use crate::ports::{CompanyLookup, RegistryStore};

/// Command to open the registration view, optionally carrying the gate's
/// context.
#[derive(Debug, Clone, Default)]
pub struct StartRegistrationCommand {
    pub context: Option<NavigationContext>,
}

/// Handler for entering the registration view.
pub struct StartRegistrationHandler {
    lookup: Arc<dyn CompanyLookup>,
    store: Arc<dyn RegistryStore>,
}

impl StartRegistrationHandler {
    pub fn new(lookup: Arc<dyn CompanyLookup>, store: Arc<dyn RegistryStore>) -> Self {
        Self { lookup, store }
    }

    /// Consumes the context once. With a complete identifier the lookup runs
    /// immediately; without context the form starts empty.
    pub async fn handle(&self, cmd: StartRegistrationCommand) -> RegistrationForm {
        let Some(context) = cmd.context else {
            return RegistrationForm::new();
        };

        let form = RegistrationForm::from_context(context);
        if form.complete_cnpj().is_none() {
            return form;
        }
        lookup_company(form, self.lookup.as_ref(), self.store.as_ref()).await
    }
}
