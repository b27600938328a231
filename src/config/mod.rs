//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `FPGD_CADASTRO` prefix and
//! `__` between nested keys. Every section has defaults, so an empty
//! environment yields a development setup on the in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use fpgd_cadastro::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod lookup;
mod server;
mod store;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use lookup::LookupConfig;
pub use server::{Environment, ServerConfig};
pub use store::{StoreBackend, StoreConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server (bind address, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Registry store backend selection
    #[serde(default)]
    pub store: StoreConfig,

    /// PostgreSQL connection, required by the `postgres` backend
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Public CNPJ registry client
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FPGD_CADASTRO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `FPGD_CADASTRO__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FPGD_CADASTRO__STORE__BACKEND=postgres` -> `store.backend = postgres`
    /// - `FPGD_CADASTRO__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FPGD_CADASTRO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all sections, including cross-section rules for the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.store
            .validate(self.server.environment, self.database.as_ref())?;
        self.lookup.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
