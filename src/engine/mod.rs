// ============================================================================
// Engine Module
// Contains the calculator that drives the numeric library
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
