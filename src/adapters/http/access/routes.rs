//! HTTP routes for the access gate.

use axum::{routing::post, Router};

use super::handlers::{check_access, AccessHandlers};

/// Creates the access router.
pub fn access_routes(handlers: AccessHandlers) -> Router {
    Router::new()
        .route("/check", post(check_access))
        .with_state(handlers)
}
