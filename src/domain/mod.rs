// ============================================================================
// Domain Models Module
// Contains the calculator's configuration, requests and results
// ============================================================================

pub mod config;
pub mod operation;
pub mod value;

pub use config::{CalculatorConfig, MAX_SINE_TERMS};
pub use operation::{CalculationId, CalculatorKind, Operation};
pub use value::CalcValue;
