//! Access gate handlers.

mod check_access;

pub use check_access::{CheckAccessCommand, CheckAccessHandler};
