//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the state machine trait shared by the
//! access gate and the registration workflow.

mod errors;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use state_machine::StateMachine;
