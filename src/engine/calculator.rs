// ============================================================================
// Calculator
// Dispatches operations to the numeric library and owns the last result
// ============================================================================

use crate::domain::{CalcValue, CalculationId, CalculatorConfig, Operation};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{self, NumericResult};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Stateful front of the stateless numeric library.
///
/// The numeric functions never hold state; the most recent successful result
/// lives here instead.
pub struct Calculator {
    /// Tuning constants for the numeric methods
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Most recent successful result
    last_result: Option<CalcValue>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
            last_result: None,
        }
    }

    /// Evaluate one operation.
    ///
    /// On success the value becomes the last result. A failure leaves the last
    /// result untouched. Either way exactly one event is emitted.
    pub fn evaluate(&mut self, operation: Operation) -> NumericResult<CalcValue> {
        let id = CalculationId::new();
        let outcome = self.dispatch(&operation);

        let event = match outcome {
            Ok(value) => {
                tracing::debug!(%id, %operation, %value, "evaluated");
                self.last_result = Some(value);
                CalculationEvent::Evaluated {
                    id,
                    operation,
                    value,
                    timestamp: Utc::now(),
                }
            },
            Err(error) => {
                tracing::debug!(%id, %operation, %error, "evaluation failed");
                CalculationEvent::Failed {
                    id,
                    operation,
                    error,
                    timestamp: Utc::now(),
                }
            },
        };
        self.event_handler.on_event(event);

        outcome
    }

    /// Round an amount for display with the configured currency precision
    pub fn format_currency(&self, amount: f64) -> NumericResult<Decimal> {
        numeric::round_currency(amount, self.config.currency_decimal_places)
    }

    /// Most recent successful result
    pub fn last_result(&self) -> Option<CalcValue> {
        self.last_result
    }

    /// Forget the last result
    pub fn clear(&mut self) {
        self.last_result = None;
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn dispatch(&self, operation: &Operation) -> NumericResult<CalcValue> {
        let config = &self.config;
        let value = match *operation {
            Operation::Add { a, b } => CalcValue::Float(numeric::add(a, b)),
            Operation::Subtract { a, b } => CalcValue::Float(numeric::subtract(a, b)),
            Operation::Multiply { a, b } => CalcValue::Float(numeric::multiply(a, b)),
            Operation::Divide { a, b } => CalcValue::Float(numeric::divide(a, b)?),

            Operation::SquareRoot { value } => CalcValue::Float(numeric::square_root_with(
                value,
                config.tolerance,
                config.max_sqrt_iterations,
            )?),
            Operation::Factorial { value } => CalcValue::Natural(numeric::factorial(value)?),
            Operation::Exponent { base, power } => {
                CalcValue::Integer(numeric::exponent(base, power)?)
            },
            Operation::NthRoot { x, n } => CalcValue::Float(numeric::nth_root(x, n)?),
            Operation::Logarithm { value, base } => {
                match numeric::logarithm_within(value, base, config.logarithm_search_limit)? {
                    Some(c) => CalcValue::Integer(i128::from(c)),
                    None => CalcValue::NotFound,
                }
            },
            Operation::Sine { x } => CalcValue::Float(numeric::sine_taylor(x, config.sine_terms)?),

            Operation::Emi {
                loan_amount,
                annual_interest_rate,
                duration_months,
            } => CalcValue::Float(numeric::emi(
                loan_amount,
                annual_interest_rate,
                duration_months,
            )?),
            Operation::Percentage { pct, num } => CalcValue::Float(numeric::percentage(pct, num)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};
    use crate::numeric::NumericError;

    fn calculator() -> Calculator {
        Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }

    #[test]
    fn test_evaluate_each_category() {
        let mut calc = calculator();

        assert_eq!(
            calc.evaluate(Operation::Subtract { a: 5.0, b: 7.5 }),
            Ok(CalcValue::Float(-2.5))
        );
        assert_eq!(
            calc.evaluate(Operation::Factorial { value: 5 }),
            Ok(CalcValue::Natural(120))
        );
        assert_eq!(
            calc.evaluate(Operation::Exponent { base: 2, power: 10 }),
            Ok(CalcValue::Integer(1024))
        );
        assert_eq!(
            calc.evaluate(Operation::Logarithm { value: 8, base: 2 }),
            Ok(CalcValue::Integer(3))
        );
        assert_eq!(
            calc.evaluate(Operation::Percentage {
                pct: 50.0,
                num: 200.0
            }),
            Ok(CalcValue::Float(100.0))
        );
    }

    #[test]
    fn test_logarithm_not_found_is_a_value() {
        let mut calc = calculator();
        assert_eq!(
            calc.evaluate(Operation::Logarithm { value: 7, base: 2 }),
            Ok(CalcValue::NotFound)
        );
        assert_eq!(calc.last_result(), Some(CalcValue::NotFound));
    }

    #[test]
    fn test_last_result_tracks_successes_only() {
        let mut calc = calculator();
        assert_eq!(calc.last_result(), None);

        calc.evaluate(Operation::Add { a: 1.0, b: 2.0 }).unwrap();
        assert_eq!(calc.last_result(), Some(CalcValue::Float(3.0)));

        let err = calc.evaluate(Operation::Divide { a: 1.0, b: 0.0 });
        assert_eq!(err, Err(NumericError::DivisionByZero));
        assert_eq!(calc.last_result(), Some(CalcValue::Float(3.0)));

        calc.clear();
        assert_eq!(calc.last_result(), None);
    }

    #[test]
    fn test_config_is_applied() {
        let config = CalculatorConfig::new()
            .with_sine_terms(1)
            .with_logarithm_search_limit(3);
        let mut calc = Calculator::new(config, Arc::new(NoOpEventHandler));

        // One term of the series is x itself
        assert_eq!(
            calc.evaluate(Operation::Sine { x: 0.5 }),
            Ok(CalcValue::Float(0.5))
        );
        assert_eq!(
            calc.evaluate(Operation::Logarithm { value: 8, base: 2 }),
            Ok(CalcValue::NotFound)
        );
    }

    #[test]
    fn test_one_event_per_evaluation() {
        let handler = Arc::new(RecordingEventHandler::new());
        let mut calc = Calculator::new(CalculatorConfig::default(), handler.clone());

        calc.evaluate(Operation::SquareRoot { value: 4.0 }).unwrap();
        let _ = calc.evaluate(Operation::SquareRoot { value: -4.0 });

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], CalculationEvent::Evaluated { .. }));
        assert!(matches!(
            events[1],
            CalculationEvent::Failed {
                error: NumericError::InvalidArgument(_),
                ..
            }
        ));
        assert_ne!(events[0].id(), events[1].id());
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let mut calc = calculator();
        let op = Operation::Emi {
            loan_amount: 100_000.0,
            annual_interest_rate: 10.0,
            duration_months: 12,
        };
        let first = calc.evaluate(op);
        let second = calc.evaluate(op);
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_currency() {
        let calc = calculator();
        assert_eq!(calc.format_currency(8791.588).unwrap().to_string(), "8791.59");
    }
}
