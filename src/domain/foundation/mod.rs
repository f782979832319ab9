//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the state machine
//! trait that form the vocabulary of the INVALSER domain.

mod errors;
mod ids;
mod money;
mod rating;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ProviderId;
pub use money::Rupees;
pub use rating::Rating;
pub use state_machine::StateMachine;
