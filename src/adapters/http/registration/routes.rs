//! HTTP routes for the registration view.

use axum::{routing::post, Router};

use super::handlers::{
    lookup_company, start_registration, submit_registration, RegistrationHandlers,
};

/// Creates the registration router.
///
/// Routes:
/// - `POST /start` - open the form, optionally with the gate's context
/// - `POST /lookup` - search a CNPJ and prefill the company
/// - `POST /submit` - validate and persist the draft
pub fn registration_routes(handlers: RegistrationHandlers) -> Router {
    Router::new()
        .route("/start", post(start_registration))
        .route("/lookup", post(lookup_company))
        .route("/submit", post(submit_registration))
        .with_state(handlers)
}
