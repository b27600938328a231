//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, state machine trait)
//! - `company` - CNPJ, format validators, masks, profile and record types
//! - `access` - Access gate routing to scheduling or registration
//! - `registration` - Registration draft and submit checks
//! - `scheduling` - Static agency links

pub mod access;
pub mod company;
pub mod foundation;
pub mod registration;
pub mod scheduling;
