//! Validation error types

use thiserror::Error;

/// Input rejected before it reaches the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Numeric field below its floor
    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        value: i64,
    },

    /// Numeric field above its ceiling
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        max: i64,
        value: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 255 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "cost_per_night",
            min: 0,
            value: -5,
        };
        assert_eq!(err.to_string(), "cost_per_night must be at least 0, got -5");

        let err = ValidationError::TooLarge {
            field: "cost_per_night",
            max: 100,
            value: 250,
        };
        assert_eq!(err.to_string(), "cost_per_night must be at most 100, got 250");
    }
}
