// ============================================================================
// Calculation Result
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value produced by one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcValue {
    /// Floating-point result of the real-valued functions
    Float(f64),
    /// Signed integer result (exponent, logarithm)
    Integer(i128),
    /// Factorial result
    Natural(u128),
    /// Logarithm search found no exponent
    NotFound,
}

impl CalcValue {
    /// The value as a float, if there is one
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            CalcValue::Float(v) => Some(v),
            CalcValue::Integer(i) => Some(i as f64),
            CalcValue::Natural(n) => Some(n as f64),
            CalcValue::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, CalcValue::NotFound)
    }
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcValue::Float(v) => write!(f, "{}", v),
            CalcValue::Integer(i) => write!(f, "{}", i),
            CalcValue::Natural(n) => write!(f, "{}", n),
            CalcValue::NotFound => write!(f, "not found"),
        }
    }
}
