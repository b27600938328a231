//! Registry store selection

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::database::DatabaseConfig;
use super::error::ValidationError;
use super::server::Environment;

/// Which registry store adapter to run.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Postgres,
    Postgrest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Project URL of the PostgREST endpoint (without `/rest/v1`)
    pub postgrest_url: Option<String>,

    /// API key sent as `apikey` and bearer token
    pub postgrest_api_key: Option<Secret<String>>,

    /// Companies table name
    #[serde(default = "default_table")]
    pub table: String,

    /// PostgREST request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(
        &self,
        environment: Environment,
        database: Option<&DatabaseConfig>,
    ) -> Result<(), ValidationError> {
        if !is_identifier(&self.table) {
            return Err(ValidationError::InvalidTableName(self.table.clone()));
        }

        match self.backend {
            StoreBackend::Memory if environment == Environment::Production => {
                Err(ValidationError::InMemoryStoreInProduction)
            }
            StoreBackend::Memory => Ok(()),
            StoreBackend::Postgres => database
                .ok_or(ValidationError::MissingRequired("DATABASE__URL"))?
                .validate(),
            StoreBackend::Postgrest => {
                let url = self
                    .postgrest_url
                    .as_deref()
                    .ok_or(ValidationError::MissingRequired("STORE__POSTGREST_URL"))?;
                if !is_http_url(url) {
                    return Err(ValidationError::InvalidHttpUrl("STORE__POSTGREST_URL"));
                }
                match &self.postgrest_api_key {
                    Some(key) if !key.expose_secret().is_empty() => Ok(()),
                    _ => Err(ValidationError::MissingRequired("STORE__POSTGREST_API_KEY")),
                }
            }
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            postgrest_url: None,
            postgrest_api_key: None,
            table: default_table(),
            timeout_secs: default_timeout(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn default_table() -> String {
    "companies".to_string()
}

fn default_timeout() -> u64 {
    10
}
