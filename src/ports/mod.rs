//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompanyLookup` - public company registry (one operation)
//! - `RegistryStore` - hosted companies store (two operations)

mod company_lookup;
mod registry_store;

pub use company_lookup::{CompanyLookup, LookupError};
pub use registry_store::{RegistryStore, StoreError};
