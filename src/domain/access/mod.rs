//! Access module - the CNPJ gate in front of scheduling.

mod errors;
mod gate;

pub use errors::GateError;
pub use gate::{
    AccessGate, Destination, GateStatus, NavigationContext, NOT_REGISTERED_MESSAGE,
};
