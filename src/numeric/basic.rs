// ============================================================================
// Basic Arithmetic
// The four operations of the basic calculator
// ============================================================================

use super::errors::{NumericError, NumericResult};

#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is exactly zero (no epsilon).
#[inline]
pub fn divide(a: f64, b: f64) -> NumericResult<f64> {
    if b == 0.0 {
        return Err(NumericError::DivisionByZero);
    }
    Ok(a / b)
}
