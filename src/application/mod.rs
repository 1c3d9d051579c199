//! Application layer - Commands, Handlers, and the assessment flow.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod flow;
pub mod handlers;

pub use flow::{FlowSettings, ProtectionFlow};
pub use handlers::{
    CalculateProtectionCommand, CalculateProtectionHandler, CalculateProtectionResult,
    CalculationError, ComposeResultsEmailCommand, ComposeResultsEmailHandler,
    ComposeResultsEmailResult,
};
