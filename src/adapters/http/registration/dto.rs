//! Request and response bodies for the registration view.

use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::access::NavigationContext;
use crate::domain::registration::{RegistrationDraft, RegistrationForm, RegistrationStatus};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartRegistrationRequest {
    #[serde(default)]
    pub context: Option<NavigationContext>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupCompanyRequest {
    pub cnpj: String,
    #[serde(default)]
    pub draft: Option<RegistrationDraft>,
    /// Warning from the previous response, echoed until the first submit.
    #[serde(default)]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRegistrationRequest {
    pub draft: RegistrationDraft,
}

/// Form snapshot as seen by the client. The draft is always returned so a
/// rejected submit loses nothing.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationFormResponse {
    pub status: RegistrationStatus,
    pub draft: RegistrationDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
}

impl From<RegistrationForm> for RegistrationFormResponse {
    fn from(form: RegistrationForm) -> Self {
        let error = form.error().map(|e| {
            let body = ErrorResponse::new(e.code(), e.to_string());
            match e.field() {
                Some(field) => body.with_field(field),
                None => body,
            }
        });
        Self {
            status: form.status(),
            warning: form.warning().map(str::to_string),
            confirmation: form.confirmation().map(str::to_string),
            draft: form.draft().clone(),
            error,
        }
    }
}
