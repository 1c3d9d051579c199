//! CalculateProtectionHandler - runs the exposure → recommendation → gap pipeline.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::protection::{
    Assessment, AssetInputs, ExposureCalculator, FormFields, GapAnalyzer, ProtectionEvent,
    RecommendationEngine,
};
use crate::domain::session::{SessionError, SessionResult};
use crate::ports::SessionObserver;

/// Command to calculate a result from one calculation form submission.
#[derive(Debug, Clone)]
pub struct CalculateProtectionCommand {
    pub fields: FormFields,
}

/// Result of a successful calculation.
#[derive(Debug, Clone)]
pub struct CalculateProtectionResult {
    pub result: SessionResult,
}

/// Why a calculation produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },

    #[error("Exposure is not a finite amount")]
    NonFiniteExposure,
}

impl CalculationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CalculationError::MissingRequiredFields { .. } => ErrorCode::EmptyField,
            CalculationError::NonFiniteExposure => ErrorCode::CalculationFailed,
        }
    }
}

impl From<ValidationError> for CalculationError {
    fn from(err: ValidationError) -> Self {
        CalculationError::MissingRequiredFields {
            fields: err.fields().into_iter().map(String::from).collect(),
        }
    }
}

impl From<CalculationError> for SessionError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::MissingRequiredFields { fields } => {
                SessionError::MissingRequiredFields { fields }
            }
            other => SessionError::calculation_failed(other.to_string()),
        }
    }
}

/// Handler for calculations.
///
/// Nothing is published on failure; callers get either a complete
/// `SessionResult` or an error.
pub struct CalculateProtectionHandler {
    observer: Arc<dyn SessionObserver>,
}

impl CalculateProtectionHandler {
    pub fn new(observer: Arc<dyn SessionObserver>) -> Self {
        Self { observer }
    }

    pub fn handle(
        &self,
        cmd: CalculateProtectionCommand,
    ) -> Result<CalculateProtectionResult, CalculationError> {
        // 1. Refuse blank required fields, naming each
        let inputs = AssetInputs::from_fields(&cmd.fields).map_err(|err| {
            let err = CalculationError::from(err);
            if let CalculationError::MissingRequiredFields { fields } = &err {
                self.emit(ProtectionEvent::InputsRejected {
                    missing_fields: fields.clone(),
                });
            }
            err
        })?;
        self.emit(ProtectionEvent::InputsParsed {
            field_count: cmd.fields.len(),
        });

        // 2. Exposure
        let breakdown = ExposureCalculator::breakdown(&inputs);
        self.emit(ProtectionEvent::ExposureCalculated { breakdown });
        let exposure = breakdown.total;
        if !exposure.is_finite() {
            let err = CalculationError::NonFiniteExposure;
            self.emit(ProtectionEvent::CalculationFailed {
                reason: err.to_string(),
            });
            return Err(err);
        }

        // 3. Recommendation
        let recommendation = RecommendationEngine::recommend(exposure);
        self.emit(ProtectionEvent::RecommendationMade {
            exposure,
            recommendation: recommendation.clone(),
        });

        // 4. Gap against current coverage
        let gap_verdict =
            GapAnalyzer::analyze_tier(&inputs.current_coverage, recommendation.coverage_tier);
        self.emit(ProtectionEvent::GapAnalyzed {
            current_coverage: inputs.current_coverage.label().to_string(),
            recommended_tier: recommendation.coverage_tier.label().to_string(),
            verdict: gap_verdict,
        });

        let assessment = Assessment {
            exposure,
            recommendation,
            gap_verdict,
        };

        Ok(CalculateProtectionResult {
            result: SessionResult::new(inputs, assessment),
        })
    }

    fn emit(&self, event: ProtectionEvent) {
        self.observer.on_protection_event(&event);
    }
}
