//! Company module - identifier, registry profile and persisted record.
//!
//! - `Cnpj` - 14-digit identifier value object
//! - `validators` - pure format checks for identifier, email and phone
//! - `masks` - as-you-type input masks
//! - `CompanyProfile` / `CompanyRecord` - lookup result and stored row

mod cnpj;
mod masks;
mod record;
mod validators;

pub use cnpj::Cnpj;
pub use masks::{mask_cnpj, mask_mobile_phone, CNPJ_MASK, MOBILE_PHONE_MASK};
pub use record::{CompanyProfile, CompanyRecord, SurveyAnswer};
pub use validators::{
    check_mobile_phone, digits_only, validate_email, validate_identifier, validate_mobile_phone,
    PhoneCheck, CNPJ_DIGITS, MOBILE_DIGITS,
};
