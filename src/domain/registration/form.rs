//! Registration form - the transient draft behind the registration view.
//!
//! The form is a state machine over completion, not over network calls.
//! Handlers perform the calls and feed the outcomes back in:
//!
//! ```text
//! Empty ──begin_lookup──> LookingUp ──apply_lookup(Ok)──> Prefilled ──begin_submit──> Submitting
//!                            │                               ^   │                      │  │
//!                            └──apply_lookup(Err)──> LookupFailed │                      │  └─complete_submission─> Submitted
//!                                                            └─reject─────────────────────┘
//! ```
//!
//! Every rejection keeps the draft populated and leaves the form ready to be
//! submitted again.
//!
//! The server keeps no form between requests. The client sends the draft back
//! with each call, together with the gate's warning until its first submit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::RegistrationError;
use crate::domain::access::NavigationContext;
use crate::domain::company::{
    check_mobile_phone, mask_cnpj, mask_mobile_phone, validate_email, Cnpj, CompanyProfile,
    CompanyRecord, SurveyAnswer,
};
use crate::domain::foundation::StateMachine;
use crate::ports::LookupError;

/// Shown once a registration is stored.
pub const CONFIRMATION_MESSAGE: &str =
    "Cadastro concluido com sucesso, A união faz a força contamos com a sua participação !";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Empty,
    LookingUp,
    Prefilled,
    LookupFailed,
    Submitting,
    Submitted,
}

impl StateMachine for RegistrationStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use RegistrationStatus::*;
        match self {
            Empty => vec![LookingUp],
            LookingUp => vec![Prefilled, LookupFailed],
            Prefilled => vec![LookingUp, Submitting],
            LookupFailed => vec![LookingUp],
            Submitting => vec![Prefilled, Submitted],
            Submitted => vec![],
        }
    }
}

/// Field values as the user sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationDraft {
    pub cnpj: String,
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
    pub participation: Option<SurveyAnswer>,
    pub affiliation_interest: Option<SurveyAnswer>,
}

impl RegistrationDraft {
    fn clear_company(&mut self) {
        self.legal_name.clear();
        self.trade_name.clear();
        self.postal_code.clear();
        self.street.clear();
        self.number.clear();
        self.district.clear();
        self.municipality.clear();
        self.state.clear();
    }

    fn fill_company(&mut self, profile: CompanyProfile) {
        self.cnpj = profile.cnpj.formatted();
        self.trade_name = if profile.trade_name.trim().is_empty() {
            profile.legal_name.clone()
        } else {
            profile.trade_name
        };
        self.legal_name = profile.legal_name;
        self.postal_code = profile.postal_code;
        self.street = profile.street;
        self.number = profile.number;
        self.district = profile.district;
        self.municipality = profile.municipality;
        self.state = profile.state;
        self.email = profile.email;
        self.phone = mask_mobile_phone(&profile.phone);
    }
}

/// A single user edit. The legal name has no variant: it is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Cnpj(String),
    TradeName(String),
    Email(String),
    Phone(String),
    ContactPersonName(String),
    Participation(SurveyAnswer),
    AffiliationInterest(SurveyAnswer),
}

/// Immutable snapshot of the registration view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    status: RegistrationStatus,
    draft: RegistrationDraft,
    warning: Option<String>,
    error: Option<RegistrationError>,
    confirmation: Option<String>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            status: RegistrationStatus::Empty,
            draft: RegistrationDraft::default(),
            warning: None,
            error: None,
            confirmation: None,
        }
    }

    /// Enter the view from the access gate, consuming its context.
    pub fn from_context(context: NavigationContext) -> Self {
        let mut form = Self::new();
        form.warning = Some(context.message);
        form.draft.cnpj = context.initial_cnpj.formatted();
        form
    }

    /// Rebuild a form from a draft the client sent back.
    ///
    /// A draft carrying a legal name counts as prefilled; anything else is empty.
    /// Masks keep every digit, so an over-length value still fails validation.
    pub fn restore(mut draft: RegistrationDraft) -> Self {
        draft.cnpj = mask_cnpj(&draft.cnpj);
        draft.phone = mask_mobile_phone(&draft.phone);
        let status = if draft.legal_name.trim().is_empty() {
            RegistrationStatus::Empty
        } else {
            RegistrationStatus::Prefilled
        };
        Self {
            status,
            draft,
            warning: None,
            error: None,
            confirmation: None,
        }
    }

    /// Re-attach the warning the client is still showing. Blank warnings are
    /// dropped.
    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        if !self.is_submitted() {
            self.warning = warning.filter(|w| !w.trim().is_empty());
        }
        self
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn error(&self) -> Option<RegistrationError> {
        self.error
    }

    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.status == RegistrationStatus::Submitted
    }

    /// The typed identifier, if it is already a complete 14-digit value.
    pub fn complete_cnpj(&self) -> Option<Cnpj> {
        Cnpj::parse(&self.draft.cnpj).ok()
    }

    /// Apply one local edit. No validation happens until submit.
    pub fn edit(mut self, edit: FieldEdit) -> Self {
        if !self.is_editable() {
            return self;
        }

        match edit {
            FieldEdit::Cnpj(raw) => {
                let masked = mask_cnpj(&raw);
                if masked != self.draft.cnpj && self.status == RegistrationStatus::Prefilled {
                    // A different identifier invalidates the looked-up company.
                    self.draft.clear_company();
                    self.status = RegistrationStatus::Empty;
                }
                self.draft.cnpj = masked;
            }
            FieldEdit::TradeName(value) => self.draft.trade_name = value,
            FieldEdit::Email(value) => self.draft.email = value,
            FieldEdit::Phone(raw) => self.draft.phone = mask_mobile_phone(&raw),
            FieldEdit::ContactPersonName(value) => self.draft.contact_person_name = value,
            FieldEdit::Participation(answer) => self.draft.participation = Some(answer),
            FieldEdit::AffiliationInterest(answer) => {
                self.draft.affiliation_interest = Some(answer)
            }
        }
        self
    }

    /// Start a registry lookup for the typed identifier.
    ///
    /// Returns the identifier to look up, or `None` if the form refused.
    pub fn begin_lookup(mut self) -> (Self, Option<Cnpj>) {
        if !self.status.can_transition_to(&RegistrationStatus::LookingUp) {
            return (self, None);
        }

        match Cnpj::parse(&self.draft.cnpj) {
            Ok(cnpj) => {
                self.status = RegistrationStatus::LookingUp;
                self.error = None;
                (self, Some(cnpj))
            }
            Err(_) => {
                self.error = Some(RegistrationError::InvalidCnpj);
                (self, None)
            }
        }
    }

    /// Feed the registry outcome back in. Results arriving when no lookup is
    /// pending are discarded.
    pub fn apply_lookup(mut self, outcome: Result<CompanyProfile, LookupError>) -> Self {
        if self.status != RegistrationStatus::LookingUp {
            tracing::debug!(status = ?self.status, "Discarding superseded lookup result");
            return self;
        }

        match outcome {
            Ok(profile) => {
                self.draft.fill_company(profile);
                self.status = RegistrationStatus::Prefilled;
            }
            Err(err) => {
                self.draft.clear_company();
                self.error = Some(err.into());
                self.status = RegistrationStatus::LookupFailed;
            }
        }
        self
    }

    /// Mark a freshly prefilled company as already registered. The draft
    /// stays filled; submit will refuse it again.
    pub fn flag_already_registered(mut self) -> Self {
        if self.status == RegistrationStatus::Prefilled {
            self.error = Some(RegistrationError::AlreadyRegistered);
        }
        self
    }

    /// Run the local submit checks in order and, if they pass, produce the
    /// record to persist.
    pub fn begin_submit(mut self, now: DateTime<Utc>) -> (Self, Option<CompanyRecord>) {
        if matches!(
            self.status,
            RegistrationStatus::LookingUp
                | RegistrationStatus::Submitting
                | RegistrationStatus::Submitted
        ) {
            return (self, None);
        }

        self.warning = None;
        self.error = None;

        match self.validate(now) {
            Ok(record) => {
                self.status = RegistrationStatus::Submitting;
                (self, Some(record))
            }
            Err(err) => {
                self.error = Some(err);
                (self, None)
            }
        }
    }

    /// Abort a pending submission with `error`, keeping the draft.
    pub fn reject(mut self, error: RegistrationError) -> Self {
        if let Ok(next) = self.status.transition_to(RegistrationStatus::Prefilled) {
            self.status = next;
        }
        self.error = Some(error);
        self
    }

    /// Finish a pending submission.
    pub fn complete_submission(mut self) -> Self {
        if let Ok(next) = self.status.transition_to(RegistrationStatus::Submitted) {
            self.status = next;
            self.error = None;
            self.confirmation = Some(CONFIRMATION_MESSAGE.to_string());
        }
        self
    }

    fn is_editable(&self) -> bool {
        matches!(
            self.status,
            RegistrationStatus::Empty
                | RegistrationStatus::Prefilled
                | RegistrationStatus::LookupFailed
        )
    }

    fn validate(&self, now: DateTime<Utc>) -> Result<CompanyRecord, RegistrationError> {
        let draft = &self.draft;

        if self.status != RegistrationStatus::Prefilled || draft.legal_name.trim().is_empty() {
            return Err(RegistrationError::CompanyNotLoaded);
        }
        let cnpj = Cnpj::parse(&draft.cnpj).map_err(|_| RegistrationError::InvalidCnpj)?;

        if !validate_email(&draft.email) {
            return Err(RegistrationError::InvalidEmail);
        }
        if let Some(err) = RegistrationError::from_phone_check(check_mobile_phone(&draft.phone)) {
            return Err(err);
        }
        if draft.contact_person_name.trim().is_empty() {
            return Err(RegistrationError::MissingContactName);
        }
        let (Some(participation), Some(affiliation_interest)) =
            (draft.participation, draft.affiliation_interest)
        else {
            return Err(RegistrationError::MissingSurveyAnswer);
        };

        Ok(CompanyRecord {
            cnpj,
            legal_name: draft.legal_name.trim().to_string(),
            trade_name: draft.trade_name.trim().to_string(),
            postal_code: draft.postal_code.clone(),
            street: draft.street.clone(),
            number: draft.number.clone(),
            district: draft.district.clone(),
            municipality: draft.municipality.clone(),
            state: draft.state.clone(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.clone(),
            contact_person_name: draft.contact_person_name.trim().to_string(),
            participation,
            affiliation_interest,
            created_at: now,
        })
    }
}
