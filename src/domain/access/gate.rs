//! Access gate - routes a CNPJ to scheduling or to registration.
//!
//! Transitions consume the gate and return the next snapshot:
//!
//! ```text
//! Idle --begin_check(valid)--> Checking --exists=true---> Routed(Scheduling)
//!   ^                              |------exists=false--> Routed(Registration + context)
//!   |                              |
//!   +-------- store error ---------+
//! ```
//!
//! A malformed identifier never leaves `Idle` and never reaches the store.

use serde::{Deserialize, Serialize};

use super::errors::GateError;
use crate::domain::company::{mask_cnpj, Cnpj};
use crate::domain::foundation::StateMachine;
use crate::ports::StoreError;

/// Warning carried to the registration view for unknown companies.
pub const NOT_REGISTERED_MESSAGE: &str = "EMPRESA NÃO CADASTRADA. Por favor, realize o cadastro.";

/// Gate lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Idle,
    Checking,
    Routed,
}

impl StateMachine for GateStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            GateStatus::Idle => vec![GateStatus::Checking],
            GateStatus::Checking => vec![GateStatus::Idle, GateStatus::Routed],
            GateStatus::Routed => vec![],
        }
    }
}

/// Short-lived context handed to the registration view.
///
/// Passed once at navigation time and consumed by the destination; it is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub message: String,
    pub initial_cnpj: Cnpj,
}

impl NavigationContext {
    pub fn not_registered(cnpj: Cnpj) -> Self {
        Self {
            message: NOT_REGISTERED_MESSAGE.to_string(),
            initial_cnpj: cnpj,
        }
    }
}

/// Where the gate sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Scheduling,
    Registration(NavigationContext),
}

/// Immutable snapshot of the access gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    status: GateStatus,
    cnpj_input: String,
    checking: Option<Cnpj>,
    error: Option<GateError>,
    destination: Option<Destination>,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessGate {
    pub fn new() -> Self {
        Self {
            status: GateStatus::Idle,
            cnpj_input: String::new(),
            checking: None,
            error: None,
            destination: None,
        }
    }

    pub fn status(&self) -> GateStatus {
        self.status
    }

    /// The identifier as typed, masked.
    pub fn cnpj_input(&self) -> &str {
        &self.cnpj_input
    }

    pub fn error(&self) -> Option<&GateError> {
        self.error.as_ref()
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn into_destination(self) -> Option<Destination> {
        self.destination
    }

    /// Replace the typed identifier. Ignored unless the gate is idle.
    pub fn with_input(mut self, raw: &str) -> Self {
        if self.status == GateStatus::Idle {
            self.cnpj_input = mask_cnpj(raw);
        }
        self
    }

    /// Validate the typed identifier and, if well formed, start checking.
    ///
    /// Returns the identifier the caller must check against the store, or
    /// `None` when the gate stays idle.
    pub fn begin_check(mut self) -> (Self, Option<Cnpj>) {
        if self.status.transition_to(GateStatus::Checking).is_err() {
            return (self, None);
        }

        match Cnpj::parse(&self.cnpj_input) {
            Ok(cnpj) => {
                self.status = GateStatus::Checking;
                self.error = None;
                self.checking = Some(cnpj.clone());
                (self, Some(cnpj))
            }
            Err(_) => {
                self.error = Some(GateError::InvalidCnpj);
                (self, None)
            }
        }
    }

    /// Apply the store's answer for the identifier being checked.
    pub fn complete_check(mut self, outcome: Result<bool, StoreError>) -> Self {
        let Some(cnpj) = self.checking.take() else {
            tracing::debug!("Discarding existence result for a gate that is not checking");
            return self;
        };

        match outcome {
            Ok(true) => {
                self.status = GateStatus::Routed;
                self.destination = Some(Destination::Scheduling);
            }
            Ok(false) => {
                self.status = GateStatus::Routed;
                self.destination =
                    Some(Destination::Registration(NavigationContext::not_registered(cnpj)));
            }
            Err(StoreError::Unavailable(_)) => {
                self.status = GateStatus::Idle;
                self.error = Some(GateError::StoreUnavailable);
            }
            Err(StoreError::DuplicateKey) => {
                self.status = GateStatus::Idle;
                self.error = Some(GateError::Unexpected);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &str = "11.222.333/0001-81";

    #[test]
    fn new_gate_is_idle_without_error() {
        let gate = AccessGate::new();
        assert_eq!(gate.status(), GateStatus::Idle);
        assert!(gate.error().is_none());
        assert!(gate.destination().is_none());
    }

    #[test]
    fn input_is_masked() {
        let gate = AccessGate::new().with_input("11222333000181");
        assert_eq!(gate.cnpj_input(), KNOWN);
    }

    #[test]
    fn malformed_identifier_stays_idle_with_format_error() {
        let (gate, cnpj) = AccessGate::new().with_input("1122233300").begin_check();
        assert!(cnpj.is_none());
        assert_eq!(gate.status(), GateStatus::Idle);
        assert_eq!(gate.error(), Some(&GateError::InvalidCnpj));
    }

    #[test]
    fn over_length_identifier_is_not_shortened() {
        let gate = AccessGate::new().with_input("112223330001819");
        assert_eq!(gate.cnpj_input(), "11.222.333/0001-819");

        let (gate, cnpj) = gate.begin_check();
        assert!(cnpj.is_none());
        assert_eq!(gate.status(), GateStatus::Idle);
        assert_eq!(gate.error(), Some(&GateError::InvalidCnpj));
    }

    #[test]
    fn valid_identifier_moves_to_checking() {
        let (gate, cnpj) = AccessGate::new().with_input(KNOWN).begin_check();
        assert_eq!(gate.status(), GateStatus::Checking);
        assert_eq!(cnpj.unwrap().as_str(), "11222333000181");
    }

    #[test]
    fn existing_company_routes_to_scheduling() {
        let (gate, _) = AccessGate::new().with_input(KNOWN).begin_check();
        let gate = gate.complete_check(Ok(true));
        assert_eq!(gate.status(), GateStatus::Routed);
        assert_eq!(gate.destination(), Some(&Destination::Scheduling));
        assert!(gate.status().is_terminal());
    }

    #[test]
    fn unknown_company_routes_to_registration_with_context() {
        let (gate, _) = AccessGate::new().with_input(KNOWN).begin_check();
        let gate = gate.complete_check(Ok(false));

        match gate.into_destination() {
            Some(Destination::Registration(ctx)) => {
                assert_eq!(ctx.initial_cnpj.as_str(), "11222333000181");
                assert_eq!(ctx.message, NOT_REGISTERED_MESSAGE);
            }
            other => panic!("expected registration destination, got {:?}", other),
        }
    }

    #[test]
    fn store_failure_returns_to_idle_and_allows_retry() {
        let (gate, _) = AccessGate::new().with_input(KNOWN).begin_check();
        let gate = gate.complete_check(Err(StoreError::unavailable("timeout")));
        assert_eq!(gate.status(), GateStatus::Idle);
        assert_eq!(gate.error(), Some(&GateError::StoreUnavailable));
        assert!(gate.destination().is_none());

        let (gate, cnpj) = gate.begin_check();
        assert!(cnpj.is_some());
        assert!(gate.error().is_none());
    }

    #[test]
    fn result_without_pending_check_is_discarded() {
        let gate = AccessGate::new().complete_check(Ok(true));
        assert_eq!(gate.status(), GateStatus::Idle);
        assert!(gate.destination().is_none());
    }

    #[test]
    fn routed_gate_ignores_further_input() {
        let (gate, _) = AccessGate::new().with_input(KNOWN).begin_check();
        let gate = gate.complete_check(Ok(true)).with_input("99");
        assert_eq!(gate.cnpj_input(), KNOWN);
        let (gate, cnpj) = gate.begin_check();
        assert!(cnpj.is_none());
        assert_eq!(gate.status(), GateStatus::Routed);
    }
}
