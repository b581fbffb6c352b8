//! Financial aggregation error types.

use thiserror::Error;

/// Errors raised for domain-invalid financial inputs.
///
/// Degenerate numeric cases (zero capital, zero cash flow, no IRR) are not
/// errors; they are reported through sentinel values on the results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FinanceError {
    /// Cost category name outside the fixed set of eight.
    #[error("Unknown cost category: {0}")]
    UnknownCostCategory(String),

    /// Input value outside its accepted range.
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

impl FinanceError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = FinanceError::UnknownCostCategory("coffee".to_string());
        assert_eq!(err.to_string(), "Unknown cost category: coffee");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = FinanceError::invalid("discount_rate", "must be within [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "Invalid discount_rate: must be within [0, 1], got 1.5"
        );
    }
}
