//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, ids, state machine, errors)
//! - `protection` - Pure exposure, recommendation and gap analysis
//! - `session` - Assessment flow lifecycle and the result hand-off

pub mod foundation;
pub mod protection;
pub mod session;
