//! Company data as returned by the registry and as persisted in the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Cnpj;

/// Answer to one of the two yes/no survey questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyAnswer {
    #[serde(rename = "Sim")]
    Yes,
    #[serde(rename = "Não")]
    No,
}

impl SurveyAnswer {
    /// The stored label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyAnswer::Yes => "Sim",
            SurveyAnswer::No => "Não",
        }
    }
}

impl fmt::Display for SurveyAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company attributes returned by the public registry.
///
/// Absent fields are empty strings. `trade_name` already falls back to
/// `legal_name` and `phone` is already masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub cnpj: Cnpj,
    pub legal_name: String,
    pub trade_name: String,
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub municipality: String,
    pub state: String,
    pub email: String,
    pub phone: String,
}

impl CompanyProfile {
    /// A profile with only the identifier and legal name set.
    pub fn named(cnpj: Cnpj, legal_name: impl Into<String>) -> Self {
        let legal_name = legal_name.into();
        Self {
            cnpj,
            trade_name: legal_name.clone(),
            legal_name,
            postal_code: String::new(),
            street: String::new(),
            number: String::new(),
            district: String::new(),
            municipality: String::new(),
            state: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

/// A validated registration, ready to be inserted exactly once per CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub cnpj: Cnpj,
    pub legal_name: String,
    pub trade_name: String,
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub municipality: String,
    pub state: String,
    pub email: String,
    pub phone: String,
    pub contact_person_name: String,
    pub participation: SurveyAnswer,
    pub affiliation_interest: SurveyAnswer,
    pub created_at: DateTime<Utc>,
}
