//! FPGD Cadastro - company registration and scheduling access gate.
//!
//! A company enters its CNPJ at the access gate. Registered companies go
//! straight to the scheduling links; unknown ones are sent to a registration
//! form prefilled from the public CNPJ registry.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
