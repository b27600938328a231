//! BrasilAPI lookup - implementation of CompanyLookup over the public
//! `GET /api/cnpj/v1/{cnpj}` endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = BrasilApiConfig::new()
//!     .with_base_url("https://brasilapi.com.br/api/cnpj/v1")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let lookup = BrasilApiLookup::new(config)?;
//! ```
//!
//! # Status mapping
//!
//! - `200` - profile
//! - `400`, `404` - `NotFound` (the registry answers 400 for check-digit failures)
//! - `429` - `RateLimited`
//! - anything else, and transport errors - `NetworkOrServer`

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::brasil_api_dto::BrasilApiCompany;
use crate::domain::company::{Cnpj, CompanyProfile};
use crate::ports::{CompanyLookup, LookupError};

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br/api/cnpj/v1";

/// Configuration for the BrasilAPI client.
#[derive(Debug, Clone)]
pub struct BrasilApiConfig {
    /// Base URL; the CNPJ is appended as the last path segment.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for BrasilApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BrasilApiConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// BrasilAPI registry client.
pub struct BrasilApiLookup {
    config: BrasilApiConfig,
    client: Client,
}

impl BrasilApiLookup {
    pub fn new(config: BrasilApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("fpgd-cadastro/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    fn company_url(&self, cnpj: &Cnpj) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), cnpj)
    }
}

/// Maps a non-success status to its lookup failure.
fn error_for_status(status: StatusCode, body: &str) -> LookupError {
    match status {
        StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => LookupError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => LookupError::RateLimited,
        _ => LookupError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

#[async_trait]
impl CompanyLookup for BrasilApiLookup {
    async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyProfile, LookupError> {
        let response = self
            .client
            .get(self.company_url(cnpj))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::network(format!(
                        "Timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    LookupError::network(format!("Connection failed: {}", e))
                } else {
                    LookupError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = error_for_status(status, &body);
            tracing::warn!(cnpj = %cnpj, %status, "Registry lookup failed: {}", error);
            return Err(error);
        }

        let company: BrasilApiCompany = response.json().await.map_err(|e| {
            tracing::error!(cnpj = %cnpj, "Failed to parse registry response: {}", e);
            LookupError::network(format!("Invalid response body: {}", e))
        })?;

        tracing::debug!(cnpj = %cnpj, "Registry lookup succeeded");
        Ok(company.into_profile(cnpj))
    }
}
