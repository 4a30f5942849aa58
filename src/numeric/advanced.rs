// ============================================================================
// Advanced Functions
// Square root, factorial, exponent, n-th root, sine and integer logarithm
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Convergence tolerance of the Babylonian square root
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Safety cap on Babylonian iterations.
///
/// Quadratic convergence reaches the tolerance in a handful of steps for any
/// finite input; the cap only matters when the tolerance is finer than the
/// spacing of floats near the root.
pub const MAX_SQRT_ITERATIONS: usize = 1000;

/// Number of Taylor terms used by the sine when none is given
pub const DEFAULT_SINE_TERMS: u32 = 5;

/// Exponents tried by the logarithm search, `0..LOGARITHM_SEARCH_LIMIT`
pub const LOGARITHM_SEARCH_LIMIT: u32 = 500;

// ============================================================================
// Square Root
// ============================================================================

/// Square root by the Babylonian method with the default tolerance.
///
/// # Errors
/// Returns `InvalidArgument` for negative or non-finite input.
pub fn square_root(value: f64) -> NumericResult<f64> {
    square_root_with(value, DEFAULT_TOLERANCE, MAX_SQRT_ITERATIONS)
}

/// Square root by the Babylonian method.
///
/// Starts from `value / 2` (or `value` when that halves to zero) and
/// replaces the guess with `0.5 * (guess + value / guess)` until two successive guesses differ by
/// less than `tolerance`. Zero is returned exactly. If `max_iterations` is
/// reached first, the latest guess is returned.
///
/// # Errors
/// Returns `InvalidArgument` for negative or non-finite input.
pub fn square_root_with(value: f64, tolerance: f64, max_iterations: usize) -> NumericResult<f64> {
    if value.is_nan() || value.is_infinite() {
        return Err(NumericError::InvalidArgument(
            "square root requires a finite number",
        ));
    }
    if value < 0.0 {
        return Err(NumericError::InvalidArgument(
            "cannot calculate square root of negative number",
        ));
    }
    if value == 0.0 {
        return Ok(0.0);
    }

    // Halving the smallest subnormals gives zero
    let mut guess = match value / 2.0 {
        half if half > 0.0 => half,
        _ => value,
    };
    for _ in 0..max_iterations {
        let next = 0.5 * (guess + value / guess);
        if (next - guess).abs() < tolerance {
            return Ok(next);
        }
        guess = next;
    }

    tracing::warn!(
        value,
        tolerance,
        max_iterations,
        "square root did not converge, returning best estimate"
    );
    Ok(guess)
}

// ============================================================================
// Factorial and Powers
// ============================================================================

/// Product of the integers from `value` down to 1. Both `0!` and `1!` are 1.
///
/// # Errors
/// - `InvalidArgument` for negative input
/// - `Overflow` when the product exceeds `u128` (from `35!` on)
pub fn factorial(value: i64) -> NumericResult<u128> {
    if value < 0 {
        return Err(NumericError::InvalidArgument(
            "cannot find factorial of negative numbers",
        ));
    }
    if value <= 1 {
        return Ok(1);
    }

    let mut output: u128 = 1;
    for i in (1..=value as u128).rev() {
        output = output.checked_mul(i).ok_or(NumericError::Overflow)?;
    }
    Ok(output)
}

/// Integer power `base^power`.
///
/// Results are computed in `i128`; anything outside that range is reported
/// instead of wrapping.
///
/// A negative power has no integer result, so it is rejected rather than
/// producing a fraction.
///
/// # Errors
/// - `InvalidArgument` for a negative power
/// - `Overflow` when the result leaves `i128`
pub fn exponent(base: i64, power: i64) -> NumericResult<i128> {
    if power < 0 {
        return Err(NumericError::InvalidArgument(
            "integer exponent requires a non-negative power",
        ));
    }
    let power = u32::try_from(power).map_err(|_| NumericError::Overflow)?;
    i128::from(base)
        .checked_pow(power)
        .ok_or(NumericError::Overflow)
}

/// The n-th root `x^(1/n)`.
///
/// Negative `x` is not guarded: an even root of a negative number is NaN.
///
/// # Errors
/// Returns `InvalidArgument` when `n` is zero.
pub fn nth_root(x: f64, n: f64) -> NumericResult<f64> {
    if n == 0.0 {
        return Err(NumericError::InvalidArgument("root degree cannot be zero"));
    }
    Ok(x.powf(1.0 / n))
}

// ============================================================================
// Sine
// ============================================================================

/// Sine from the first `terms` terms of its Taylor series:
/// `x - x^3/3! + x^5/5! - ...`
///
/// No convergence check is made; accuracy depends only on `terms`.
///
/// # Errors
/// Returns `Overflow` when a term's factorial exceeds `u128`, i.e. for more
/// than 17 terms.
pub fn sine_taylor(x: f64, terms: u32) -> NumericResult<f64> {
    let mut sin_x = 0.0;
    for k in 0..terms {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        let odd = 2 * k + 1;
        let denominator = factorial(i64::from(odd))? as f64;
        sin_x += sign * x.powi(odd as i32) / denominator;
    }
    Ok(sin_x)
}

// ============================================================================
// Logarithm
// ============================================================================

/// Integer logarithm: the smallest `c` in `0..LOGARITHM_SEARCH_LIMIT` with
/// `base^c == value`, or `None` if there is none.
///
/// # Errors
/// Returns `InvalidArgument` for the degenerate bases 0 and 1.
pub fn logarithm(value: i64, base: i64) -> NumericResult<Option<u32>> {
    logarithm_within(value, base, LOGARITHM_SEARCH_LIMIT)
}

/// Integer logarithm searching exponents `0..limit`.
///
/// # Errors
/// Returns `InvalidArgument` for the degenerate bases 0 and 1.
pub fn logarithm_within(value: i64, base: i64, limit: u32) -> NumericResult<Option<u32>> {
    if base == 0 || base == 1 {
        return Err(NumericError::InvalidArgument(
            "logarithm base cannot be 0 or 1",
        ));
    }

    let target = i128::from(value);
    let base = i128::from(base);
    let mut power: i128 = 1;
    for c in 0..limit {
        if power == target {
            return Ok(Some(c));
        }
        // |power| only grows for |base| >= 2; once past i128 it cannot equal an i64
        power = match power.checked_mul(base) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(None)
}
