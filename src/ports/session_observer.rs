//! SessionObserver port - Diagnostic hook for the calculation and the flow.
//!
//! The core reports what it did; the observer decides whether that becomes
//! verbose tracing, warnings only, or nothing at all.

use crate::domain::protection::ProtectionEvent;
use crate::domain::session::FlowEvent;

/// Port for observing the assessment as it runs.
///
/// Observers must not fail or block; they are called inline.
pub trait SessionObserver: Send + Sync {
    /// Called for each step of the calculation pipeline.
    fn on_protection_event(&self, event: &ProtectionEvent);

    /// Called for each transition, refusal and hand-off in the flow.
    fn on_flow_event(&self, event: &FlowEvent);
}
