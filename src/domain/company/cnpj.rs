//! CNPJ value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::masks::mask_cnpj;
use super::validators::{digits_only, CNPJ_DIGITS};
use crate::domain::foundation::ValidationError;

/// A 14-digit company tax identifier, stored without punctuation.
///
/// Natural key for both the registry lookup and the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parses user input, ignoring any punctuation.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let digits = digits_only(raw);
        if digits.is_empty() {
            return Err(ValidationError::empty_field("cnpj"));
        }
        if digits.len() != CNPJ_DIGITS {
            return Err(ValidationError::digit_count("cnpj", CNPJ_DIGITS, digits.len()));
        }
        Ok(Self(digits))
    }

    /// The bare 14 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `00.000.000/0000-00` rendering.
    pub fn formatted(&self) -> String {
        mask_cnpj(&self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}
