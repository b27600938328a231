//! Company registry lookup configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::store::is_http_url;
use crate::adapters::lookup::{BrasilApiConfig, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Registry endpoint; the CNPJ is appended as the last path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Share one in-flight request between concurrent lookups of a CNPJ
    #[serde(default = "default_coalesce")]
    pub coalesce: bool,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn brasil_api(&self) -> BrasilApiConfig {
        BrasilApiConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidHttpUrl("LOOKUP__BASE_URL"));
        }
        if !(1..=120).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidLookupTimeout);
        }
        Ok(())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            coalesce: default_coalesce(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_coalesce() -> bool {
    true
}
