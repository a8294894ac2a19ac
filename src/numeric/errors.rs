// ============================================================================
// Numeric Errors
// Error types for scaled multiply-divide operations
// ============================================================================

use std::fmt;

/// Errors that can occur during scaled multiply-divide operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Rounded result exceeded i64::MAX
    Overflow,
    /// Rounded result below i64::MIN
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// `RoundingMode::Unnecessary` was requested but the quotient is inexact
    RoundingUnnecessaryViolation,
    /// Decimal scale outside 0..=18
    InvalidScale,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::RoundingUnnecessaryViolation => write!(
                f,
                "rounding required but forbidden by rounding mode UNNECESSARY"
            ),
            NumericError::InvalidScale => {
                write!(f, "invalid scale: decimals must be in range 0..=18")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

impl NumericError {
    /// Pick `Overflow` or `Underflow` for an out-of-range wide value.
    #[inline]
    pub(crate) fn out_of_range(negative: bool) -> Self {
        if negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::RoundingUnnecessaryViolation.to_string(),
            "rounding required but forbidden by rounding mode UNNECESSARY"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
        assert_ne!(
            NumericError::RoundingUnnecessaryViolation,
            NumericError::InvalidInput
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(NumericError::out_of_range(false), NumericError::Overflow);
        assert_eq!(NumericError::out_of_range(true), NumericError::Underflow);
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::InvalidScale);
        assert!(err.to_string().contains("0..=18"));
    }
}
