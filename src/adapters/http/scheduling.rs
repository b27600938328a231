//! HTTP adapter for the scheduling view. Read-only, no state.

use axum::{routing::get, Json, Router};

use crate::domain::scheduling::{agencies, Agency};

/// GET /api/scheduling/agencies - Agencies and their booking links
pub async fn list_agencies() -> Json<&'static [Agency]> {
    Json(agencies())
}

pub fn scheduling_routes() -> Router {
    Router::new().route("/agencies", get(list_agencies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn agencies_are_listed() {
        let response = scheduling_routes()
            .oneshot(
                Request::builder()
                    .uri("/agencies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[0]["name"], "Natal - RN");
    }
}
