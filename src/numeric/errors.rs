// ============================================================================
// Numeric Errors
// Error types for fixed-point valuation arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while computing or assigning valuation figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Price or share count beyond the 9-decimal i64 range (about 9.2e9),
    /// or a solved share count that would not fit it
    Overflow,
    /// Result below the representable minimum
    Underflow,
    /// Attempted division by zero (e.g. solving for shares at a zero price)
    DivisionByZero,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string, value or configuration is invalid
    InvalidInput,
    /// Price, shares or worth must not be negative
    NegativeValue,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value outside the price/share range")
            }
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            }
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NegativeValue => {
                write!(f, "negative value: valuation figures must be non-negative")
            }
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::NegativeValue.to_string(),
            "negative value: valuation figures must be non-negative"
        );
    }

    #[test]
    fn test_overflow_names_guarded_range() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: value outside the price/share range"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::Overflow);
        assert!(err.to_string().starts_with("arithmetic overflow"));
    }
}
