//! HTTP handlers for the access gate.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{AccessGateResponse, CheckAccessRequest};
use crate::adapters::http::error::rejected_body;
use crate::application::handlers::access::{CheckAccessCommand, CheckAccessHandler};
use crate::domain::access::GateError;

#[derive(Clone)]
pub struct AccessHandlers {
    check_handler: Arc<CheckAccessHandler>,
}

impl AccessHandlers {
    pub fn new(check_handler: Arc<CheckAccessHandler>) -> Self {
        Self { check_handler }
    }
}

/// POST /api/access/check - Route a CNPJ to scheduling or registration
pub async fn check_access(
    State(handlers): State<AccessHandlers>,
    payload: Result<Json<CheckAccessRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejected_body(rejection),
    };

    let gate = handlers
        .check_handler
        .handle(CheckAccessCommand { cnpj: req.cnpj })
        .await;

    let status = gate.error().map_or(StatusCode::OK, status_for_gate_error);
    (status, Json(AccessGateResponse::from(gate))).into_response()
}

fn status_for_gate_error(error: &GateError) -> StatusCode {
    match error {
        GateError::InvalidCnpj => StatusCode::BAD_REQUEST,
        GateError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        GateError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_errors_map_to_distinct_statuses() {
        assert_eq!(
            status_for_gate_error(&GateError::InvalidCnpj),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for_gate_error(&GateError::StoreUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for_gate_error(&GateError::Unexpected),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
