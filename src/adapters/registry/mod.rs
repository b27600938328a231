//! Registry store adapters.
//!
//! - `InMemoryRegistryStore` - development and tests
//! - `PostgresRegistryStore` - direct PostgreSQL via sqlx
//! - `PostgrestRegistryStore` - hosted PostgREST endpoint

mod in_memory_store;
mod postgres_store;
mod postgrest_store;

pub use in_memory_store::InMemoryRegistryStore;
pub use postgres_store::PostgresRegistryStore;
pub use postgrest_store::{PostgrestConfig, PostgrestRegistryStore};

/// Postgres SQLSTATE for a unique constraint violation.
pub(crate) const UNIQUE_VIOLATION: &str = "23505";
