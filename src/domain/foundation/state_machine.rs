//! State machine trait for workflow status enums.
//!
//! The access gate and the registration form both move through a small set
//! of statuses. Each status enum lists its outgoing edges once and gets
//! checked transitions from this trait.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for GateStatus {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Checking],
///             Checking => vec![Idle, Routed],
///             Routed => vec![],
///         }
///     }
/// }
///
/// let next = GateStatus::Idle.transition_to(GateStatus::Checking)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
