//! Registration view handlers.

mod lookup_company;
mod prefill;
mod start_registration;
mod submit_registration;

pub use lookup_company::{LookupCompanyCommand, LookupCompanyHandler};
pub use start_registration::{StartRegistrationCommand, StartRegistrationHandler};
pub use submit_registration::{SubmitRegistrationCommand, SubmitRegistrationHandler};
