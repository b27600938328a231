//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain transitions and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Access handlers
    CheckAccessCommand, CheckAccessHandler,
    // Registration handlers
    LookupCompanyCommand, LookupCompanyHandler,
    StartRegistrationCommand, StartRegistrationHandler,
    SubmitRegistrationCommand, SubmitRegistrationHandler,
};
