//! Observer that renders assessment events through `tracing`.

use crate::config::Verbosity;
use crate::domain::protection::ProtectionEvent;
use crate::domain::session::FlowEvent;
use crate::ports::SessionObserver;

/// Logs pipeline and flow events.
///
/// - `Verbose` logs every step with its values.
/// - `Silent` logs only refusals and failures, at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    verbosity: Verbosity,
}

impl TracingObserver {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbose() -> Self {
        Self::new(Verbosity::Verbose)
    }

    pub fn silent() -> Self {
        Self::new(Verbosity::Silent)
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

impl SessionObserver for TracingObserver {
    fn on_protection_event(&self, event: &ProtectionEvent) {
        match event {
            ProtectionEvent::InputsRejected { missing_fields } => {
                tracing::warn!(
                    event = event.event_type(),
                    missing = %missing_fields.join(", "),
                    "Calculation form has blank required fields"
                );
            }
            ProtectionEvent::CalculationFailed { reason } => {
                tracing::warn!(event = event.event_type(), %reason, "Calculation failed");
            }
            _ if !self.is_verbose() => {}
            ProtectionEvent::InputsParsed { field_count } => {
                tracing::debug!(event = event.event_type(), field_count, "Form data parsed");
            }
            ProtectionEvent::ExposureCalculated { breakdown } => {
                tracing::debug!(
                    event = event.event_type(),
                    home = breakdown.home_value.value(),
                    vehicle = breakdown.vehicle_value.value(),
                    savings = breakdown.savings_value.value(),
                    income = breakdown.income_value.value(),
                    total = breakdown.total.value(),
                    "Exposure calculated"
                );
            }
            ProtectionEvent::RecommendationMade {
                exposure,
                recommendation,
            } => {
                tracing::info!(
                    event = event.event_type(),
                    exposure = exposure.value(),
                    tier = recommendation.coverage_tier.label(),
                    severity = recommendation.gap_severity.as_str(),
                    "Recommendation made"
                );
            }
            ProtectionEvent::GapAnalyzed {
                current_coverage,
                recommended_tier,
                verdict,
            } => {
                tracing::info!(
                    event = event.event_type(),
                    %current_coverage,
                    %recommended_tier,
                    verdict = verdict.as_str(),
                    "Gap analyzed"
                );
            }
        }
    }

    fn on_flow_event(&self, event: &FlowEvent) {
        match event {
            FlowEvent::ActionRefused {
                action,
                state,
                code,
                reason,
            } => {
                tracing::warn!(
                    event = event.event_type(),
                    ?action,
                    %state,
                    %code,
                    %reason,
                    "Action refused"
                );
            }
            _ if !self.is_verbose() => {}
            FlowEvent::Transitioned {
                action,
                from,
                to,
                section,
            } => {
                tracing::info!(
                    event = event.event_type(),
                    ?action,
                    %from,
                    %to,
                    %section,
                    "Showing section"
                );
            }
            FlowEvent::ResultStored {
                result_id,
                superseded,
            } => {
                tracing::debug!(
                    event = event.event_type(),
                    %result_id,
                    ?superseded,
                    "Result stored"
                );
            }
            FlowEvent::ResultCleared { result_id } => {
                tracing::debug!(event = event.event_type(), %result_id, "Result cleared");
            }
            FlowEvent::EmailLaunched {
                result_id,
                recipient,
            } => {
                tracing::info!(
                    event = event.event_type(),
                    %result_id,
                    %recipient,
                    "Email client opened"
                );
            }
            FlowEvent::BookingOpened { url } => {
                tracing::info!(event = event.event_type(), %url, "Booking page opened");
            }
        }
    }
}
