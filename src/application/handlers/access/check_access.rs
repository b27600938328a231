//! CheckAccessHandler - routes a typed CNPJ to scheduling or registration.

use std::sync::Arc;

use crate::domain::access::{AccessGate, Destination};
use crate::ports::RegistryStore;

/// Command to check whether a company may go straight to scheduling.
#[derive(Debug, Clone)]
pub struct CheckAccessCommand {
    pub cnpj: String,
}

/// Handler for the access gate.
pub struct CheckAccessHandler {
    store: Arc<dyn RegistryStore>,
}

impl CheckAccessHandler {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Runs one gate check and returns the resulting snapshot.
    ///
    /// Malformed input is rejected locally; the store is only consulted for
    /// a complete identifier. Store failures leave the gate idle with an error.
    pub async fn handle(&self, cmd: CheckAccessCommand) -> AccessGate {
        let (gate, pending) = AccessGate::new().with_input(&cmd.cnpj).begin_check();
        let Some(cnpj) = pending else {
            tracing::debug!("Access check rejected malformed CNPJ");
            return gate;
        };

        let outcome = self.store.exists(&cnpj).await;
        if let Err(e) = &outcome {
            tracing::error!(cnpj = %cnpj, "Access check failed: {}", e);
        }

        let gate = gate.complete_check(outcome);
        match gate.destination() {
            Some(Destination::Scheduling) => {
                tracing::info!(cnpj = %cnpj, "Registered company routed to scheduling")
            }
            Some(Destination::Registration(_)) => {
                tracing::info!(cnpj = %cnpj, "Unknown company routed to registration")
            }
            None => {}
        }
        gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{acme_cnpj, MockRegistryStore, ACME};
    use crate::domain::access::{GateError, GateStatus, NOT_REGISTERED_MESSAGE};
    use crate::ports::StoreError;

    fn handler(store: &Arc<MockRegistryStore>) -> CheckAccessHandler {
        CheckAccessHandler::new(store.clone())
    }

    fn cmd(cnpj: &str) -> CheckAccessCommand {
        CheckAccessCommand {
            cnpj: cnpj.to_string(),
        }
    }

    #[tokio::test]
    async fn registered_company_goes_to_scheduling_without_insert() {
        let store = Arc::new(MockRegistryStore::new().with_registered(acme_cnpj()));

        let gate = handler(&store).handle(cmd(ACME)).await;

        assert_eq!(gate.status(), GateStatus::Routed);
        assert_eq!(gate.destination(), Some(&Destination::Scheduling));
        assert_eq!(store.exists_calls(), 1);
        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn unknown_company_goes_to_registration_with_context() {
        let store = Arc::new(MockRegistryStore::new());

        let gate = handler(&store).handle(cmd("11.222.333/0001-81")).await;

        match gate.into_destination() {
            Some(Destination::Registration(context)) => {
                assert_eq!(context.initial_cnpj, acme_cnpj());
                assert_eq!(context.message, NOT_REGISTERED_MESSAGE);
                assert!(!context.message.is_empty());
            }
            other => panic!("expected registration destination, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_cnpj_never_reaches_store() {
        let store = Arc::new(MockRegistryStore::new());

        for input in ["1122233300018", "112223330001819", "11.222.333/0001-8190", ""] {
            let gate = handler(&store).handle(cmd(input)).await;

            assert_eq!(gate.status(), GateStatus::Idle, "input {:?}", input);
            assert_eq!(gate.error(), Some(&GateError::InvalidCnpj));
            assert!(gate.destination().is_none());
        }
        assert_eq!(store.exists_calls(), 0);
    }

    #[tokio::test]
    async fn store_failure_leaves_gate_idle_with_retryable_error() {
        let store = Arc::new(
            MockRegistryStore::new().failing_exists(StoreError::unavailable("connection reset")),
        );

        let gate = handler(&store).handle(cmd(ACME)).await;

        assert_eq!(gate.status(), GateStatus::Idle);
        assert_eq!(gate.error(), Some(&GateError::StoreUnavailable));
        assert!(gate.destination().is_none());
        assert!(!gate.error().unwrap().to_string().contains("connection reset"));
    }
}
