// ============================================================================
// Numeric Module
// Stateless numeric function library behind the calculator
// ============================================================================
//
// This module provides:
// - Basic arithmetic: add, subtract, multiply, divide
// - Advanced functions: Babylonian square root, factorial, integer exponent,
//   n-th root, Taylor-series sine, integer logarithm search
// - Financial functions: EMI, percentage, loan totals, currency rounding
// - NumericError: failure kinds shared by all of the above
//
// Design principles:
// - Pure functions only, no shared mutable state
// - Every precondition is checked and reported through NumericResult
// - Integer results use checked fixed-width arithmetic (no silent wraparound)

mod advanced;
mod basic;
mod errors;
mod financial;

pub use advanced::{
    exponent, factorial, logarithm, logarithm_within, nth_root, sine_taylor, square_root,
    square_root_with, DEFAULT_SINE_TERMS, DEFAULT_TOLERANCE, LOGARITHM_SEARCH_LIMIT,
    MAX_SQRT_ITERATIONS,
};
pub use basic::{add, divide, multiply, subtract};
pub use errors::{NumericError, NumericResult};
pub use financial::{
    emi, loan_summary, percentage, round_currency, LoanSummary, CURRENCY_DECIMAL_PLACES,
};
