//! Access gate error types.
//!
//! `Display` is the message shown to the user.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Digite um CNPJ válido com 14 dígitos.")]
    InvalidCnpj,

    #[error("Erro ao verificar CNPJ. Tente novamente.")]
    StoreUnavailable,

    #[error("Ocorreu um erro inesperado.")]
    Unexpected,
}

impl GateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GateError::InvalidCnpj => ErrorCode::InvalidCnpj,
            GateError::StoreUnavailable => ErrorCode::StoreUnavailable,
            GateError::Unexpected => ErrorCode::InternalError,
        }
    }
}
