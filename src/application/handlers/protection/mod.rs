//! Protection command handlers.

mod calculate_protection;
mod compose_results_email;

pub use calculate_protection::{
    CalculateProtectionCommand, CalculateProtectionHandler, CalculateProtectionResult,
    CalculationError,
};
pub use compose_results_email::{
    ComposeResultsEmailCommand, ComposeResultsEmailHandler, ComposeResultsEmailResult,
};
