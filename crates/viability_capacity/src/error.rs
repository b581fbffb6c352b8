//! Capacity costing error types.

use thiserror::Error;

/// Errors raised for domain-invalid capacity inputs.
///
/// Zero capacity is not an error; it yields a zero cost rate and zero
/// utilisation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CapacityError {
    /// Resource class other than `people` or `machines`.
    #[error("Unsupported resource type: {0} (expected 'people' or 'machines')")]
    UnsupportedResourceType(String),

    /// Activity with a negative or non-finite unit time.
    #[error("Invalid activity '{name}': {reason}")]
    InvalidActivity {
        /// Activity name.
        name: String,
        /// Constraint that was violated.
        reason: String,
    },

    /// Cost or capacity figure outside its accepted range.
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Constraint that was violated.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CapacityError::UnsupportedResourceType("robots".to_string()).to_string(),
            "Unsupported resource type: robots (expected 'people' or 'machines')"
        );
        let err = CapacityError::InvalidActivity {
            name: "Pick".to_string(),
            reason: "unit time must be non-negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid activity 'Pick': unit time must be non-negative"
        );
    }
}
