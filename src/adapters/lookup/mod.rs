//! Company lookup adapters.
//!
//! Implementations of the CompanyLookup port.
//!
//! ## Available Adapters
//!
//! - `BrasilApiLookup` - public BrasilAPI CNPJ endpoint
//! - `CoalescingCompanyLookup` - decorator sharing in-flight requests per CNPJ
//! - `MockCompanyLookup` - canned answers for tests and local runs
//!
//! ## Usage
//!
//! ```ignore
//! use fpgd_cadastro::adapters::lookup::{BrasilApiConfig, BrasilApiLookup, CoalescingCompanyLookup};
//!
//! let registry = Arc::new(BrasilApiLookup::new(BrasilApiConfig::new())?);
//! let lookup = CoalescingCompanyLookup::new(registry);
//! ```

mod brasil_api;
mod brasil_api_dto;
mod coalescing;
mod mock;

pub use brasil_api::{BrasilApiConfig, BrasilApiLookup, DEFAULT_BASE_URL};
pub use coalescing::CoalescingCompanyLookup;
pub use mock::MockCompanyLookup;
