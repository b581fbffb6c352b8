//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers
//! - `StatisticsError`: Errors from descriptive statistics over samples

use thiserror::Error;

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative too small for Newton-Raphson
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Iterate left the finite domain
///
/// # Examples
/// ```
/// use viability_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Errors from descriptive statistics.
///
/// Aggregates over an empty sample are undefined, so they are reported rather
/// than returned as `NaN`.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatisticsError {
    /// The sample holds no observations.
    #[error("Empty sample: at least one observation is required")]
    EmptySample,

    /// Requested percentile is outside [0, 100].
    #[error("Percentile {0} outside [0, 100]")]
    InvalidPercentile(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_error_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(
            format!("{}", err),
            "Failed to converge after 100 iterations"
        );
    }

    #[test]
    fn test_solver_error_derivative_near_zero_display() {
        let err = SolverError::DerivativeNearZero { x: 1.5 };
        assert_eq!(format!("{}", err), "Derivative near zero at x = 1.5");
    }

    #[test]
    fn test_solver_error_no_bracket_display() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        assert_eq!(
            format!("{}", err),
            "No bracket: f(0) and f(1) have same sign"
        );
    }

    #[test]
    fn test_statistics_error_display() {
        assert!(StatisticsError::EmptySample
            .to_string()
            .contains("Empty sample"));
        assert_eq!(
            StatisticsError::InvalidPercentile(120.0).to_string(),
            "Percentile 120 outside [0, 100]"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::NumericalInstability("overflow".to_string());
        let _: &dyn std::error::Error = &err;
        let err = StatisticsError::EmptySample;
        let _: &dyn std::error::Error = &err;
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_solver_error_serde_roundtrip() {
            let err = SolverError::NoBracket { a: -0.5, b: 2.0 };
            let json = serde_json::to_string(&err).unwrap();
            let deserialized: SolverError = serde_json::from_str(&json).unwrap();
            assert_eq!(err, deserialized);
        }
    }
}
