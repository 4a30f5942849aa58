// ============================================================================
// Calculator Configuration
// Tuning constants for the iterative and truncated numeric methods
// ============================================================================

use crate::numeric::{
    CURRENCY_DECIMAL_PLACES, DEFAULT_SINE_TERMS, DEFAULT_TOLERANCE, LOGARITHM_SEARCH_LIMIT,
    MAX_SQRT_ITERATIONS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest Taylor term count whose factorials still fit in `u128`
pub const MAX_SINE_TERMS: u32 = 17;

/// Configuration shared by every evaluation of a calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Babylonian square root stops once successive guesses differ by less
    pub tolerance: f64,

    /// Safety cap on square root iterations
    pub max_sqrt_iterations: usize,

    /// Number of Taylor terms summed for the sine
    pub sine_terms: u32,

    /// Exponents tried by the integer logarithm, `0..logarithm_search_limit`
    pub logarithm_search_limit: u32,

    /// Decimal places used when displaying currency amounts
    pub currency_decimal_places: u32,
}

impl CalculatorConfig {
    /// Create a configuration with the default constants
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_sqrt_iterations: MAX_SQRT_ITERATIONS,
            sine_terms: DEFAULT_SINE_TERMS,
            logarithm_search_limit: LOGARITHM_SEARCH_LIMIT,
            currency_decimal_places: CURRENCY_DECIMAL_PLACES,
        }
    }

    /// Builder method: Set square root tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: Set square root iteration cap
    pub fn with_max_sqrt_iterations(mut self, iterations: usize) -> Self {
        self.max_sqrt_iterations = iterations;
        self
    }

    /// Builder method: Set number of sine terms
    pub fn with_sine_terms(mut self, terms: u32) -> Self {
        self.sine_terms = terms;
        self
    }

    /// Builder method: Set logarithm search limit
    pub fn with_logarithm_search_limit(mut self, limit: u32) -> Self {
        self.logarithm_search_limit = limit;
        self
    }

    /// Builder method: Set currency decimal places
    pub fn with_currency_decimal_places(mut self, places: u32) -> Self {
        self.currency_decimal_places = places;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err("Tolerance must be a positive finite number".to_string());
        }

        if self.max_sqrt_iterations == 0 {
            return Err("Square root iteration cap must be positive".to_string());
        }

        if self.sine_terms == 0 || self.sine_terms > MAX_SINE_TERMS {
            return Err(format!(
                "Sine terms must be between 1 and {}",
                MAX_SINE_TERMS
            ));
        }

        if self.logarithm_search_limit == 0 {
            return Err("Logarithm search limit must be positive".to_string());
        }

        // rust_decimal keeps at most 28 fractional digits
        if self.currency_decimal_places > 28 {
            return Err("Currency decimal places cannot exceed 28".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Behaviour of the classic menu calculator
    /// - Tolerance 1e-6
    /// - 5 sine terms
    /// - Logarithm search over 0..500
    pub fn classic() -> Self {
        Self::new()
    }

    /// Tighter numerics for callers that want more digits
    /// - Tolerance 1e-12
    /// - 12 sine terms
    /// - Currency shown with 4 decimals
    pub fn precise() -> Self {
        Self::new()
            .with_tolerance(1e-12)
            .with_sine_terms(12)
            .with_currency_decimal_places(4)
    }
}
