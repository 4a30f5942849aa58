// ============================================================================
// Advanced Calculator Library
// Numeric-method and financial functions behind an interactive menu
// ============================================================================

//! # Advanced Calculator
//!
//! A calculator built around a stateless library of numeric functions.
//!
//! ## Features
//!
//! - **Basic arithmetic** with explicit division-by-zero reporting
//! - **Numeric methods**: Babylonian square root, factorial, integer exponent,
//!   n-th root, Taylor-series sine and an integer logarithm search
//! - **Financial formulas**: EMI, percentage, loan totals and currency rounding
//! - **Typed failures** through [`NumericError`](numeric::NumericError)
//! - **Interactive shell** over any `BufRead`/`Write` pair
//!
//! ## Example
//!
//! ```rust
//! use advanced_calculator::prelude::*;
//! use advanced_calculator::numeric;
//! use std::sync::Arc;
//!
//! // Pure functions can be called directly
//! assert_eq!(numeric::factorial(5), Ok(120));
//! assert_eq!(numeric::logarithm(8, 2), Ok(Some(3)));
//!
//! // The calculator adds configuration, events and the last result
//! let mut calculator = Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler));
//! let value = calculator.evaluate(Operation::Exponent { base: 2, power: 10 }).unwrap();
//! assert_eq!(value, CalcValue::Integer(1024));
//! assert_eq!(calculator.last_result(), Some(value));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod shell;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalcValue, CalculationId, CalculatorConfig, CalculatorKind, Operation,
    };
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{NumericError, NumericResult};
    pub use crate::shell::Shell;
}
