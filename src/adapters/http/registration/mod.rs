//! HTTP adapter for the registration view.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    LookupCompanyRequest, RegistrationFormResponse, StartRegistrationRequest,
    SubmitRegistrationRequest,
};
pub use handlers::RegistrationHandlers;
pub use routes::registration_routes;
