//! Command handlers.
//!
//! Each handler takes a command struct and returns a result struct or a
//! typed error.

pub mod protection;

pub use protection::{
    CalculateProtectionCommand, CalculateProtectionHandler, CalculateProtectionResult,
    CalculationError, ComposeResultsEmailCommand, ComposeResultsEmailHandler,
    ComposeResultsEmailResult,
};
