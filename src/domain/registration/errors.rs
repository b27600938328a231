//! Registration error types.
//!
//! Every rejection path of the registration view has its own variant and
//! its `Display` is the message shown to the user. Internal detail is
//! logged where the error is produced and never carried here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::company::PhoneCheck;
use crate::domain::foundation::ErrorCode;
use crate::ports::LookupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationError {
    #[error("CNPJ deve ter 14 dígitos.")]
    InvalidCnpj,

    #[error("CNPJ não encontrado na Receita Federal.")]
    CompanyNotFound,

    #[error("Muitas consultas em sequência. Aguarde alguns instantes e tente novamente.")]
    LookupRateLimited,

    #[error("Erro na busca do CNPJ. Tente novamente.")]
    LookupUnavailable,

    #[error("Por favor, busque o CNPJ para preencher os dados da empresa.")]
    CompanyNotLoaded,

    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,

    #[error("Por favor, insira um número de celular válido com DDD.")]
    InvalidPhone,

    #[error("O número deve ser um celular (iniciando com 9).")]
    NotMobilePhone,

    #[error("Por favor, informe o nome do contato principal.")]
    MissingContactName,

    #[error("Por favor, responda às duas perguntas.")]
    MissingSurveyAnswer,

    #[error("Empresa já inscrita, entre com outro CNPJ")]
    AlreadyRegistered,

    #[error("Erro ao salvar o cadastro.")]
    SaveFailed,

    #[error("Ocorreu um erro inesperado.")]
    Unexpected,
}

impl RegistrationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::InvalidCnpj => ErrorCode::InvalidCnpj,
            RegistrationError::CompanyNotFound => ErrorCode::CompanyNotFound,
            RegistrationError::LookupRateLimited => ErrorCode::RateLimited,
            RegistrationError::LookupUnavailable => ErrorCode::LookupUnavailable,
            RegistrationError::CompanyNotLoaded => ErrorCode::CompanyNotLoaded,
            RegistrationError::InvalidEmail => ErrorCode::InvalidEmail,
            RegistrationError::InvalidPhone => ErrorCode::InvalidPhone,
            RegistrationError::NotMobilePhone => ErrorCode::NotMobilePhone,
            RegistrationError::MissingContactName | RegistrationError::MissingSurveyAnswer => {
                ErrorCode::MissingField
            }
            RegistrationError::AlreadyRegistered => ErrorCode::AlreadyRegistered,
            RegistrationError::SaveFailed => ErrorCode::StoreUnavailable,
            RegistrationError::Unexpected => ErrorCode::InternalError,
        }
    }

    /// The field the error should be shown next to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RegistrationError::InvalidCnpj
            | RegistrationError::CompanyNotFound
            | RegistrationError::CompanyNotLoaded
            | RegistrationError::AlreadyRegistered => Some("cnpj"),
            RegistrationError::InvalidEmail => Some("email"),
            RegistrationError::InvalidPhone | RegistrationError::NotMobilePhone => Some("phone"),
            RegistrationError::MissingContactName => Some("contact_person_name"),
            _ => None,
        }
    }

    pub(crate) fn from_phone_check(check: PhoneCheck) -> Option<Self> {
        match check {
            PhoneCheck::Valid => None,
            PhoneCheck::WrongLength => Some(RegistrationError::InvalidPhone),
            PhoneCheck::NotMobile => Some(RegistrationError::NotMobilePhone),
        }
    }
}

impl From<LookupError> for RegistrationError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound => RegistrationError::CompanyNotFound,
            LookupError::RateLimited => RegistrationError::LookupRateLimited,
            LookupError::NetworkOrServer(_) => RegistrationError::LookupUnavailable,
        }
    }
}
