//! Application handlers.
//!
//! Command handlers that orchestrate the views against the ports. Each
//! handler returns the resulting view snapshot; failures are carried in the
//! snapshot and never escape the handler.

pub mod access;
pub mod registration;

#[cfg(test)]
pub(crate) mod test_support;

pub use access::{CheckAccessCommand, CheckAccessHandler};
pub use registration::{
    LookupCompanyCommand, LookupCompanyHandler, StartRegistrationCommand,
    StartRegistrationHandler, SubmitRegistrationCommand, SubmitRegistrationHandler,
};
