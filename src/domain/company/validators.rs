//! Format validators for identifier, email and mobile phone input.
//!
//! All functions are pure: they never fail, never touch the network and
//! return either a boolean or a reason code.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in a CNPJ.
pub const CNPJ_DIGITS: usize = 14;

/// Number of digits in a mobile number with area code.
pub const MOBILE_DIGITS: usize = 11;

/// Zero-based position of the mobile prefix digit (right after the 2-digit DDD).
const MOBILE_PREFIX_INDEX: usize = 2;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Outcome of checking a mobile phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneCheck {
    Valid,
    /// Digit count is not 11.
    WrongLength,
    /// Eleven digits, but the subscriber number does not start with 9.
    NotMobile,
}

/// Keeps only ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// True iff exactly 14 digits remain once punctuation is stripped.
pub fn validate_identifier(raw: &str) -> bool {
    digits_only(raw).len() == CNPJ_DIGITS
}

/// Case-insensitive `local@domain` shape check.
pub fn validate_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(&raw.to_lowercase())
}

/// Classifies a phone number as a Brazilian mobile (DDD + 9XXXXXXXX).
pub fn check_mobile_phone(raw: &str) -> PhoneCheck {
    let digits = digits_only(raw);
    if digits.len() != MOBILE_DIGITS {
        return PhoneCheck::WrongLength;
    }
    if digits.as_bytes()[MOBILE_PREFIX_INDEX] != b'9' {
        return PhoneCheck::NotMobile;
    }
    PhoneCheck::Valid
}

pub fn validate_mobile_phone(raw: &str) -> bool {
    check_mobile_phone(raw) == PhoneCheck::Valid
}
