//! HTTP handlers for the registration view.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    LookupCompanyRequest, RegistrationFormResponse, StartRegistrationRequest,
    SubmitRegistrationRequest,
};
use crate::adapters::http::error::rejected_body;
use crate::application::handlers::registration::{
    LookupCompanyCommand, LookupCompanyHandler, StartRegistrationCommand,
    StartRegistrationHandler, SubmitRegistrationCommand, SubmitRegistrationHandler,
};
use crate::domain::registration::{RegistrationError, RegistrationForm};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RegistrationHandlers {
    start_handler: Arc<StartRegistrationHandler>,
    lookup_handler: Arc<LookupCompanyHandler>,
    submit_handler: Arc<SubmitRegistrationHandler>,
}

impl RegistrationHandlers {
    pub fn new(
        start_handler: Arc<StartRegistrationHandler>,
        lookup_handler: Arc<LookupCompanyHandler>,
        submit_handler: Arc<SubmitRegistrationHandler>,
    ) -> Self {
        Self {
            start_handler,
            lookup_handler,
            submit_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/registration/start - Open the form, consuming the gate's context
pub async fn start_registration(
    State(handlers): State<RegistrationHandlers>,
    payload: Result<Json<StartRegistrationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejected_body(rejection),
    };
    let form = handlers
        .start_handler
        .handle(StartRegistrationCommand {
            context: req.context,
        })
        .await;
    form_response(form)
}

/// POST /api/registration/lookup - Search the registry and prefill
pub async fn lookup_company(
    State(handlers): State<RegistrationHandlers>,
    payload: Result<Json<LookupCompanyRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejected_body(rejection),
    };
    let form = handlers
        .lookup_handler
        .handle(LookupCompanyCommand {
            cnpj: req.cnpj,
            draft: req.draft,
            warning: req.warning,
        })
        .await;
    form_response(form)
}

/// POST /api/registration/submit - Validate and persist the draft
pub async fn submit_registration(
    State(handlers): State<RegistrationHandlers>,
    payload: Result<Json<SubmitRegistrationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejected_body(rejection),
    };
    let form = handlers
        .submit_handler
        .handle(SubmitRegistrationCommand { draft: req.draft })
        .await;
    form_response(form)
}

// ════════════════════════════════════════════════════════════════════════════
// Status mapping
// ════════════════════════════════════════════════════════════════════════════

fn form_response(form: RegistrationForm) -> Response {
    let status = match form.error() {
        Some(error) => status_for_registration_error(error),
        None if form.is_submitted() => StatusCode::CREATED,
        None => StatusCode::OK,
    };
    (status, Json(RegistrationFormResponse::from(form))).into_response()
}

fn status_for_registration_error(error: RegistrationError) -> StatusCode {
    match error {
        RegistrationError::InvalidCnpj => StatusCode::BAD_REQUEST,
        RegistrationError::CompanyNotFound => StatusCode::NOT_FOUND,
        RegistrationError::LookupRateLimited => StatusCode::TOO_MANY_REQUESTS,
        RegistrationError::LookupUnavailable | RegistrationError::SaveFailed => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        RegistrationError::CompanyNotLoaded
        | RegistrationError::InvalidEmail
        | RegistrationError::InvalidPhone
        | RegistrationError::NotMobilePhone
        | RegistrationError::MissingContactName
        | RegistrationError::MissingSurveyAnswer => StatusCode::UNPROCESSABLE_ENTITY,
        RegistrationError::AlreadyRegistered => StatusCode::CONFLICT,
        RegistrationError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
