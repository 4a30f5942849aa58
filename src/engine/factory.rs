// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::{EventHandler, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use advanced_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::precise();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calculator.config().sine_terms, 12);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;
    Ok(Calculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent builder for calculators
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    event_handler: Option<Arc<dyn EventHandler>>,
}

impl CalculatorBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            event_handler: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set square root tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set number of sine terms
    pub fn sine_terms(mut self, terms: u32) -> Self {
        self.config.sine_terms = terms;
        self
    }

    /// Set logarithm search limit
    pub fn logarithm_search_limit(mut self, limit: u32) -> Self {
        self.config.logarithm_search_limit = limit;
        self
    }

    /// Set event handler
    pub fn event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = Some(handler);
        self
    }

    /// Build the calculator
    pub fn build(self) -> Result<Calculator, String> {
        let handler = self
            .event_handler
            .unwrap_or_else(|| Arc::new(NoOpEventHandler));
        create_from_config(self.config, handler)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalcValue, Operation};
    use crate::interfaces::LoggingEventHandler;

    #[test]
    fn test_create_from_config() {
        let calculator = create_from_config(CalculatorConfig::classic(), Arc::new(NoOpEventHandler));
        assert!(calculator.is_ok());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = CalculatorConfig::new().with_sine_terms(40);
        let result = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let mut calculator = CalculatorBuilder::new()
            .sine_terms(10)
            .logarithm_search_limit(100)
            .event_handler(Arc::new(LoggingEventHandler))
            .build()
            .unwrap();

        assert_eq!(calculator.config().sine_terms, 10);
        assert_eq!(
            calculator.evaluate(Operation::Logarithm {
                value: 1 << 40,
                base: 2
            }),
            Ok(CalcValue::Integer(40))
        );
    }

    #[test]
    fn test_builder_validation() {
        assert!(CalculatorBuilder::new().tolerance(-1.0).build().is_err());
    }
}
