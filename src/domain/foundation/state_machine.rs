//! State machine trait for step and status enums.
//!
//! Gives every lifecycle enum (booking steps today) the same validated
//! transition API.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal moves; `transition_to` and `is_terminal`
/// come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for BookingStep {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Services, Personal) | (Personal, Services) | ...)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Services => vec![Personal],
///             Personal => vec![Services, Details],
///             // ...
///         }
///     }
/// }
///
/// let step = BookingStep::Services.transition_to(BookingStep::Personal)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

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
