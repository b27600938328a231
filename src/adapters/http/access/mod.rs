//! HTTP adapter for the access gate.

mod dto;
mod handlers;
mod routes;

pub use dto::{AccessGateResponse, CheckAccessRequest, DestinationResponse};
pub use handlers::AccessHandlers;
pub use routes::access_routes;
