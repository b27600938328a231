//! Request and response bodies for the access gate.

use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::access::{AccessGate, Destination, GateStatus, NavigationContext};

#[derive(Debug, Clone, Deserialize)]
pub struct CheckAccessRequest {
    pub cnpj: String,
}

/// Where the client should navigate next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DestinationResponse {
    Scheduling,
    Registration { context: NavigationContext },
}

impl From<Destination> for DestinationResponse {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Scheduling => DestinationResponse::Scheduling,
            Destination::Registration(context) => DestinationResponse::Registration { context },
        }
    }
}

/// Gate snapshot as seen by the client.
#[derive(Debug, Clone, Serialize)]
pub struct AccessGateResponse {
    pub status: GateStatus,
    pub cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<DestinationResponse>,
}

impl From<AccessGate> for AccessGateResponse {
    fn from(gate: AccessGate) -> Self {
        let error = gate
            .error()
            .map(|e| ErrorResponse::new(e.code(), e.to_string()).with_field("cnpj"));
        Self {
            status: gate.status(),
            cnpj: gate.cnpj_input().to_string(),
            error,
            destination: gate.into_destination().map(Into::into),
        }
    }
}
