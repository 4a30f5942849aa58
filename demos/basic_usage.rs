// ============================================================================
// Basic Usage Example
// ============================================================================

use advanced_calculator::numeric;
use advanced_calculator::prelude::*;
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

fn main() {
    println!("=== Advanced Calculator Example ===\n");

    // Pure functions straight from the numeric library
    println!("square_root(2)     = {:?}", numeric::square_root(2.0));
    println!("factorial(10)      = {:?}", numeric::factorial(10));
    println!("logarithm(1024, 2) = {:?}", numeric::logarithm(1024, 2));
    println!("logarithm(7, 2)    = {:?}", numeric::logarithm(7, 2));
    println!("divide(1, 0)       = {:?}", numeric::divide(1.0, 0.0));

    // A calculator with more sine terms and logged events
    let mut calculator = CalculatorBuilder::new()
        .sine_terms(10)
        .event_handler(Arc::new(LoggingEventHandler))
        .build()
        .expect("valid configuration");

    println!("\n=== Evaluating Operations ===");
    let operations = [
        Operation::Add { a: 2.5, b: 4.0 },
        Operation::Sine { x: FRAC_PI_2 },
        Operation::NthRoot { x: 27.0, n: 3.0 },
        Operation::Exponent { base: 2, power: 64 },
        Operation::SquareRoot { value: -9.0 },
        Operation::Percentage {
            pct: 15.0,
            num: 240.0,
        },
    ];

    for operation in operations {
        match calculator.evaluate(operation) {
            Ok(value) => println!("  {} = {}", operation, value),
            Err(err) => println!("  {} failed: {}", operation, err),
        }
    }
    println!("\nLast result: {:?}", calculator.last_result());

    // Loan totals, rounded for display
    println!("\n=== Loan Summary ===");
    match numeric::loan_summary(250_000.0, 8.5, 240) {
        Ok(summary) => {
            let show = |amount: f64| {
                calculator
                    .format_currency(amount)
                    .map(|d| d.to_string())
                    .unwrap_or_else(|_| amount.to_string())
            };
            println!("  Installment:    {}", show(summary.installment));
            println!("  Total payment:  {}", show(summary.total_payment));
            println!("  Total interest: {}", show(summary.total_interest));
        },
        Err(err) => println!("  failed: {}", err),
    }
}
