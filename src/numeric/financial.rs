// ============================================================================
// Financial Functions
// Loan installments, percentages and currency rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Decimal places used when presenting currency amounts
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Equated Monthly Installment of a loan.
///
/// With monthly rate `r = annual_interest_rate / 1200` and
/// `a = (1 + r)^duration_months` the installment is
/// `loan_amount * r * a / (a - 1)`, evaluated as the equivalent
/// `loan_amount * r / (1 - (1 + r)^-duration_months)`. The `ln_1p`/`exp_m1`
/// form keeps the denominator non-zero for rates too small to change `1 + r`
/// and finite for durations where `a` would overflow. A zero rate makes the
/// formula divide by zero, so an interest-free loan is simply split into
/// equal parts.
///
/// # Arguments
/// - `loan_amount`: principal, must be positive and finite
/// - `annual_interest_rate`: percent per year (8.5 means 8.5%), must be finite
///   and not negative
/// - `duration_months`: number of installments, must be positive
///
/// # Errors
/// Returns `InvalidArgument` when any of the constraints above is violated.
pub fn emi(loan_amount: f64, annual_interest_rate: f64, duration_months: i64) -> NumericResult<f64> {
    validate_loan(loan_amount, annual_interest_rate, duration_months)?;

    let months = duration_months as f64;
    let r = annual_interest_rate / 1200.0;
    if r == 0.0 {
        return Ok(loan_amount / months);
    }

    // 1 - (1 + r)^-n
    let denominator = -(-months * r.ln_1p()).exp_m1();
    Ok(loan_amount * r / denominator)
}

/// `pct` percent of `num`
#[inline]
pub fn percentage(pct: f64, num: f64) -> f64 {
    (pct * num) / 100.0
}

/// Totals over the whole life of a loan
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LoanSummary {
    /// Monthly installment
    pub installment: f64,
    /// Sum of all installments
    pub total_payment: f64,
    /// Part of the total payment that is interest
    pub total_interest: f64,
}

/// Installment plus total payment and total interest of a loan.
///
/// # Errors
/// Same as [`emi`].
pub fn loan_summary(
    loan_amount: f64,
    annual_interest_rate: f64,
    duration_months: i64,
) -> NumericResult<LoanSummary> {
    let installment = emi(loan_amount, annual_interest_rate, duration_months)?;
    let total_payment = installment * duration_months as f64;
    Ok(LoanSummary {
        installment,
        total_payment,
        total_interest: total_payment - loan_amount,
    })
}

/// Convert an amount to a `Decimal` rounded half away from zero.
///
/// # Errors
/// Returns `Overflow` for NaN, infinities and values outside the `Decimal` range.
pub fn round_currency(value: f64, decimal_places: u32) -> NumericResult<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(NumericError::Overflow)
}

fn validate_loan(
    loan_amount: f64,
    annual_interest_rate: f64,
    duration_months: i64,
) -> NumericResult<()> {
    if !loan_amount.is_finite() || loan_amount <= 0.0 {
        return Err(NumericError::InvalidArgument(
            "loan amount must be a finite number greater than zero",
        ));
    }
    if duration_months <= 0 {
        return Err(NumericError::InvalidArgument(
            "duration must be greater than zero",
        ));
    }
    if !annual_interest_rate.is_finite() || annual_interest_rate < 0.0 {
        return Err(NumericError::InvalidArgument(
            "interest rate must be a finite non-negative number",
        ));
    }
    Ok(())
}
