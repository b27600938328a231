//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `lookup` - public company registry clients (BrasilAPI, coalescing, mock)
//! - `registry` - companies store (PostgreSQL, PostgREST, in-memory)
//! - `http` - JSON API over the views (axum)

pub mod http;
pub mod lookup;
pub mod registry;

pub use http::{app_router, AppState};
pub use lookup::{BrasilApiConfig, BrasilApiLookup, CoalescingCompanyLookup, MockCompanyLookup};
pub use registry::{
    InMemoryRegistryStore, PostgresRegistryStore, PostgrestConfig, PostgrestRegistryStore,
};
