// ============================================================================
// Numeric Errors
// Failure kinds reported by the numeric function library
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Errors that can occur while evaluating a numeric function.
///
/// A logarithm search that finds no exponent is not an error; it is reported
/// as `Ok(None)` by [`logarithm`](super::logarithm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum NumericError {
    /// Divisor was exactly zero
    DivisionByZero,
    /// A precondition on sign, magnitude or domain was violated
    InvalidArgument(&'static str),
    /// Integer result does not fit the result type
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "unable to divide by zero"),
            NumericError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
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
        assert_eq!(
            NumericError::DivisionByZero.to_string(),
            "unable to divide by zero"
        );
        assert_eq!(
            NumericError::InvalidArgument("negative input").to_string(),
            "invalid argument: negative input"
        );
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(
            NumericError::DivisionByZero,
            NumericError::InvalidArgument("zero")
        );
    }
}
