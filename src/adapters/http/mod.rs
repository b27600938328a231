//! HTTP adapters - JSON API over the three views.
//!
//! The API is stateless: the client keeps the registration draft and sends
//! it back with every call. Each view has its own router, nested under
//! `/api` by [`app_router`].

pub mod access;
pub mod error;
pub mod registration;
pub mod scheduling;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::application::handlers::{
    CheckAccessHandler, LookupCompanyHandler, StartRegistrationHandler, SubmitRegistrationHandler,
};
use crate::ports::{CompanyLookup, RegistryStore};

pub use access::{access_routes, AccessHandlers};
pub use error::ErrorResponse;
pub use registration::{registration_routes, RegistrationHandlers};
pub use scheduling::scheduling_routes;

/// Handler state for every view, built from the two ports.
#[derive(Clone)]
pub struct AppState {
    pub access: AccessHandlers,
    pub registration: RegistrationHandlers,
}

impl AppState {
    pub fn new(lookup: Arc<dyn CompanyLookup>, store: Arc<dyn RegistryStore>) -> Self {
        Self {
            access: AccessHandlers::new(Arc::new(CheckAccessHandler::new(store.clone()))),
            registration: RegistrationHandlers::new(
                Arc::new(StartRegistrationHandler::new(lookup.clone(), store.clone())),
                Arc::new(LookupCompanyHandler::new(lookup, store.clone())),
                Arc::new(SubmitRegistrationHandler::new(store)),
            ),
        }
    }
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Creates the application router without transport layers.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/access", access_routes(state.access))
        .nest("/api/registration", registration_routes(state.registration))
        .nest("/api/scheduling", scheduling_routes())
        .fallback(error::not_found)
}
