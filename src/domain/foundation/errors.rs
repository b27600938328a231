//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must have {expected} digits, got {actual}")]
    DigitCount {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a digit count validation error.
    pub fn digit_count(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::DigitCount {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Format errors
    InvalidCnpj,
    InvalidEmail,
    InvalidPhone,
    NotMobilePhone,
    MissingField,

    // Workflow errors
    CompanyNotLoaded,
    AlreadyRegistered,

    // Lookup errors
    CompanyNotFound,
    RateLimited,
    LookupUnavailable,

    // Infrastructure errors
    StoreUnavailable,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidCnpj => "INVALID_CNPJ",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::InvalidPhone => "INVALID_PHONE",
            ErrorCode::NotMobilePhone => "NOT_MOBILE_PHONE",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::CompanyNotLoaded => "COMPANY_NOT_LOADED",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::CompanyNotFound => "COMPANY_NOT_FOUND",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::LookupUnavailable => "LOOKUP_UNAVAILABLE",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}
