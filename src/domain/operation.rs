// ============================================================================
// Operation Domain Model
// One user action: a library function together with its operands
// ============================================================================

use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationId(Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three calculators offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorKind {
    /// +, -, *, /
    Basic,
    /// Square root, factorial, exponent, n-th root, logarithm, sine
    Advanced,
    /// EMI and percentage
    Financial,
}

impl CalculatorKind {
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::Basic => "Basic calculator",
            CalculatorKind::Advanced => "Advanced Calculator",
            CalculatorKind::Financial => "Financial Calculator",
        }
    }
}

// ============================================================================
// Operation
// ============================================================================

/// A single calculation request
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add { a: f64, b: f64 },
    Subtract { a: f64, b: f64 },
    Multiply { a: f64, b: f64 },
    Divide { a: f64, b: f64 },

    SquareRoot { value: f64 },
    Factorial { value: i64 },
    Exponent { base: i64, power: i64 },
    NthRoot { x: f64, n: f64 },
    /// Smallest `c` with `base^c == value`
    Logarithm { value: i64, base: i64 },
    /// Term count comes from the calculator configuration
    Sine { x: f64 },

    Emi {
        loan_amount: f64,
        annual_interest_rate: f64,
        duration_months: i64,
    },
    Percentage { pct: f64, num: f64 },
}

impl Operation {
    /// Build a basic operation from its operator symbol
    pub fn from_operator(a: f64, operator: &str, b: f64) -> Option<Self> {
        match operator.trim() {
            "+" => Some(Operation::Add { a, b }),
            "-" => Some(Operation::Subtract { a, b }),
            "*" => Some(Operation::Multiply { a, b }),
            "/" => Some(Operation::Divide { a, b }),
            _ => None,
        }
    }

    pub fn category(&self) -> CalculatorKind {
        match self {
            Operation::Add { .. }
            | Operation::Subtract { .. }
            | Operation::Multiply { .. }
            | Operation::Divide { .. } => CalculatorKind::Basic,
            Operation::SquareRoot { .. }
            | Operation::Factorial { .. }
            | Operation::Exponent { .. }
            | Operation::NthRoot { .. }
            | Operation::Logarithm { .. }
            | Operation::Sine { .. } => CalculatorKind::Advanced,
            Operation::Emi { .. } | Operation::Percentage { .. } => CalculatorKind::Financial,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "addition",
            Operation::Subtract { .. } => "subtraction",
            Operation::Multiply { .. } => "multiplication",
            Operation::Divide { .. } => "division",
            Operation::SquareRoot { .. } => "square root",
            Operation::Factorial { .. } => "factorial",
            Operation::Exponent { .. } => "exponent",
            Operation::NthRoot { .. } => "nth root",
            Operation::Logarithm { .. } => "logarithm",
            Operation::Sine { .. } => "sine",
            Operation::Emi { .. } => "EMI",
            Operation::Percentage { .. } => "percentage",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add { a, b } => write!(f, "{} + {}", a, b),
            Operation::Subtract { a, b } => write!(f, "{} - {}", a, b),
            Operation::Multiply { a, b } => write!(f, "{} * {}", a, b),
            Operation::Divide { a, b } => write!(f, "{} / {}", a, b),
            Operation::SquareRoot { value } => write!(f, "square root({})", value),
            Operation::Factorial { value } => write!(f, "factorial({})", value),
            Operation::Exponent { base, power } => write!(f, "exponent({}, {})", base, power),
            Operation::NthRoot { x, n } => write!(f, "nth root({}, {})", x, n),
            Operation::Logarithm { value, base } => write!(f, "logarithm({}, {})", value, base),
            Operation::Sine { x } => write!(f, "Sin({})", x),
            Operation::Emi {
                loan_amount,
                annual_interest_rate,
                duration_months,
            } => write!(
                f,
                "EMI({} at {}% for {} months)",
                loan_amount, annual_interest_rate, duration_months
            ),
            Operation::Percentage { pct, num } => write!(f, "{}% of {}", pct, num),
        }
    }
}
