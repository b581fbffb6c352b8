//! Error types for the scenario and risk engine.
//!
//! Two failure classes exist:
//! - [`RiskError`]: domain-invalid input (unknown template, unsupported
//!   distribution, bad configuration) rejected before any work starts
//! - [`EvaluationError`]: a single NPV evaluation failing inside sensitivity
//!   analysis or simulation; these are dropped, not propagated

use thiserror::Error;
use viability_core::types::StatisticsError;

/// Errors from scenario generation, sensitivity analysis and simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Template name is not one of the three canonical templates.
    #[error(
        "Unknown scenario template '{0}': expected budget_conscious, strategic_implementation or enterprise_transformation"
    )]
    UnknownTemplate(String),

    /// Distribution kind is not normal, uniform, triangular or lognormal.
    #[error("Unsupported distribution type: {0}")]
    UnsupportedDistribution(String),

    /// A parameter required by the distribution kind was not supplied.
    #[error("Distribution '{distribution}' requires parameter '{parameter}'")]
    MissingDistributionParameter {
        /// Distribution kind.
        distribution: &'static str,
        /// Missing parameter name.
        parameter: &'static str,
    },

    /// Distribution parameters cannot be sampled from.
    #[error("Invalid {distribution} distribution: {reason}")]
    InvalidDistribution {
        /// Distribution kind.
        distribution: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// The evaluator does not recognise a simulated parameter.
    #[error("Unknown model parameter '{0}'")]
    UnknownParameter(String),

    /// Simulation configuration outside its valid range.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig {
        /// Setting name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Scenario or analysis input outside its valid range.
    #[error("Invalid input '{field}': {reason}")]
    InvalidInput {
        /// Field name.
        field: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Every simulated sample failed, leaving nothing to aggregate.
    #[error("All {requested} Monte Carlo samples failed; no statistics can be computed")]
    NoSuccessfulSamples {
        /// Iterations attempted.
        requested: usize,
    },

    /// Aggregation over the simulated sample failed.
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
}

/// Failure of one NPV evaluation.
///
/// Returned by evaluators passed to sensitivity analysis and simulation.
/// The engine drops the affected parameter or sample and carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A parameter value makes the model undefined.
    #[error("Parameter '{name}' out of range: {reason}")]
    OutOfRange {
        /// Parameter name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// The model produced no usable NPV.
    #[error("Evaluation failed: {0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_display() {
        let err = RiskError::UnknownTemplate("aggressive".to_string());
        assert!(err.to_string().contains("'aggressive'"));
        assert!(err.to_string().contains("budget_conscious"));
    }

    #[test]
    fn test_missing_parameter_display() {
        let err = RiskError::MissingDistributionParameter {
            distribution: "normal",
            parameter: "std",
        };
        assert_eq!(
            err.to_string(),
            "Distribution 'normal' requires parameter 'std'"
        );
    }

    #[test]
    fn test_statistics_error_is_transparent() {
        let err: RiskError = StatisticsError::EmptySample.into();
        assert_eq!(err.to_string(), StatisticsError::EmptySample.to_string());
    }

    #[test]
    fn test_evaluation_error_display() {
        let err = EvaluationError::OutOfRange {
            name: "discount_rate".to_string(),
            reason: "must exceed -1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'discount_rate' out of range: must exceed -1"
        );
    }
}
