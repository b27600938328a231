//! Error body shared by every endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Form field the message belongs next to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            field: None,
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("Route not found: {}", path),
            field: None,
        }
    }
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(uri.path())),
    )
        .into_response()
}

/// Body that could not be read as the expected JSON. Keeps axum's status
/// (400, 415 or 422) but answers with the shared error body.
pub fn rejected_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "Rejected request body");
    (
        rejection.status(),
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_is_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::new(ErrorCode::InvalidCnpj, "x")).unwrap();
        assert_eq!(json["code"], "INVALID_CNPJ");
        assert!(json.get("field").is_none());
    }

    #[test]
    fn bad_request_uses_generic_code() {
        let error = ErrorResponse::bad_request("missing field `cnpj`");
        assert_eq!(error.code, "BAD_REQUEST");
        assert!(error.field.is_none());
    }

    #[test]
    fn not_found_names_the_path() {
        let error = ErrorResponse::not_found("/nope");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("/nope"));
    }
}
