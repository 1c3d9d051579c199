//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait, and error
//! types that form the vocabulary of the MyProtection domain.

mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ResultId;
pub use money::Money;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
