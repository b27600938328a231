//! Registration module - the draft a company fills in to register.

mod errors;
mod form;

pub use errors::RegistrationError;
pub use form::{
    FieldEdit, RegistrationDraft, RegistrationForm, RegistrationStatus, CONFIRMATION_MESSAGE,
};
