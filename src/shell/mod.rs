// ============================================================================
// Interactive Shell
// Menu loop reading operands from a line-oriented input
// ============================================================================

mod menu;

pub use menu::{AdvancedChoice, FinancialChoice, MenuSelection};

use crate::domain::{CalcValue, CalculatorKind, Operation};
use crate::engine::Calculator;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Reasons a menu action stops before evaluating anything
enum Interrupt {
    /// Input ended
    Eof,
    /// A value could not be understood; the loop goes on
    BadInput(String),
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

type Step<T> = Result<T, Interrupt>;

/// Interactive calculator over any line reader and writer.
///
/// Library failures and unreadable input are reported and the loop returns to
/// the top menu; only the end of input, `quit`/`exit` or an I/O error end it.
pub struct Shell<R, W> {
    calculator: Calculator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(calculator: Calculator, input: R, output: W) -> Self {
        Self {
            calculator,
            input,
            output,
        }
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner()?;

        loop {
            let line = match self.prompt_line("\nEnter your calculator type : ")? {
                Some(line) => line,
                None => break,
            };

            let kind = match MenuSelection::parse(&line) {
                Some(MenuSelection::Quit) => break,
                Some(MenuSelection::Calculator(kind)) => kind,
                None => {
                    writeln!(self.output, "Give valid option!!!")?;
                    continue;
                },
            };

            let outcome = match kind {
                CalculatorKind::Basic => self.basic(),
                CalculatorKind::Advanced => self.advanced(),
                CalculatorKind::Financial => self.financial(),
            };

            match outcome {
                Ok(()) => {},
                Err(Interrupt::Eof) => break,
                Err(Interrupt::Io(err)) => return Err(err),
                Err(Interrupt::BadInput(message)) => {
                    tracing::warn!(reason = %message, "rejected shell input");
                    writeln!(self.output, "Invalid input: {}", message)?;
                },
            }
        }

        writeln!(self.output, "Exiting calculator. Goodbye!")?;
        self.output.flush()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Give back the calculator and the writer
    pub fn into_parts(self) -> (Calculator, W) {
        (self.calculator, self.output)
    }

    // ========================================================================
    // Calculators
    // ========================================================================

    fn basic(&mut self) -> Step<()> {
        writeln!(self.output, "\n{}", menu::BASIC_MENU)?;

        let a: f64 = self.prompt_value("Enter the num 1: ")?;
        let operator = self.prompt_operand("Enter the operator: ")?;
        let b: f64 = self.prompt_value("Enter the num 2: ")?;

        let operation = Operation::from_operator(a, &operator, b)
            .ok_or_else(|| Interrupt::BadInput(format!("unknown operator '{}'", operator.trim())))?;
        self.evaluate_and_print(operation)
    }

    fn advanced(&mut self) -> Step<()> {
        writeln!(self.output, "\n{}", menu::ADVANCED_MENU)?;

        let number: u8 = self.prompt_value("Enter the operator: ")?;
        let choice = AdvancedChoice::from_number(number)
            .ok_or_else(|| Interrupt::BadInput(format!("no advanced operation {}", number)))?;

        let operation = match choice {
            AdvancedChoice::SquareRoot => Operation::SquareRoot {
                value: self.prompt_value("Enter the val: ")?,
            },
            AdvancedChoice::Factorial => Operation::Factorial {
                value: self.prompt_value("Enter the val: ")?,
            },
            AdvancedChoice::Exponent => Operation::Exponent {
                base: self.prompt_value("Enter the base: ")?,
                power: self.prompt_value("Enter the power: ")?,
            },
            AdvancedChoice::NthRoot => Operation::NthRoot {
                x: self.prompt_value("Enter the number: ")?,
                n: self.prompt_value("Enter the degree: ")?,
            },
            AdvancedChoice::Logarithm => Operation::Logarithm {
                value: self.prompt_value("Enter the number: ")?,
                base: self.prompt_value("Enter the base: ")?,
            },
            AdvancedChoice::Sine => Operation::Sine {
                x: self.prompt_value("Enter the angle in radians: ")?,
            },
        };
        self.evaluate_and_print(operation)
    }

    fn financial(&mut self) -> Step<()> {
        writeln!(self.output, "\n{}", menu::FINANCIAL_MENU)?;

        let number: u8 = self.prompt_value("Enter the operator: ")?;
        let choice = FinancialChoice::from_number(number)
            .ok_or_else(|| Interrupt::BadInput(format!("no financial operation {}", number)))?;

        let operation = match choice {
            FinancialChoice::Emi => Operation::Emi {
                loan_amount: self.prompt_value("Enter the loan amount : ")?,
                annual_interest_rate: self.prompt_value("Enter the annual interest : ")?,
                duration_months: self.prompt_value("Enter the duration in months : ")?,
            },
            FinancialChoice::Percentage => Operation::Percentage {
                pct: self.prompt_value("Enter the percentage : ")?,
                num: self.prompt_value("Enter the num : ")?,
            },
        };
        self.evaluate_and_print(operation)
    }

    fn evaluate_and_print(&mut self, operation: Operation) -> Step<()> {
        let value = match self.calculator.evaluate(operation) {
            Ok(value) => value,
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                return Ok(());
            },
        };

        match (operation, value) {
            (Operation::Emi { .. }, CalcValue::Float(amount)) => {
                match self.calculator.format_currency(amount) {
                    Ok(rounded) => writeln!(self.output, "EMI amount: {}", rounded)?,
                    Err(_) => writeln!(self.output, "EMI amount: {}", amount)?,
                }
            },
            (Operation::Percentage { pct, num }, _) => {
                writeln!(self.output, "{}% of {} is {}", pct, num, value)?
            },
            _ => writeln!(self.output, "\nResult: {} = {}\n", operation, value)?,
        }
        Ok(())
    }

    // ========================================================================
    // Input helpers
    // ========================================================================

    /// Trimmed answer to `label`, `None` once input has ended
    fn prompt_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_operand(&mut self, label: &str) -> Step<String> {
        self.prompt_line(label)?.ok_or(Interrupt::Eof)
    }

    fn prompt_value<T: FromStr>(&mut self, label: &str) -> Step<T> {
        let line = self.prompt_operand(label)?;
        line.parse()
            .map_err(|_| Interrupt::BadInput(format!("'{}' is not a valid number", line)))
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let rule = "-".repeat(40);
        writeln!(self.output, "{}", menu::TITLE)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "{}", menu::INTRO)?;
        writeln!(self.output, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalculatorConfig;
    use crate::interfaces::NoOpEventHandler;
    use std::io::{BufReader, Cursor, Read};
    use std::sync::Arc;

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        }
    }

    fn run_session(script: &str) -> (String, Calculator) {
        let calculator = Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler));
        let mut shell = Shell::new(calculator, Cursor::new(script.as_bytes()), Vec::new());
        shell.run().unwrap();
        let (calculator, output) = shell.into_parts();
        (String::from_utf8(output).unwrap(), calculator)
    }

    #[test]
    fn test_basic_session() {
        let (output, calculator) = run_session("a\n2\n+\n3\nquit\n");
        assert!(output.starts_with(menu::TITLE));
        assert!(output.contains("Result: 2 + 3 = 5"));
        assert!(output.ends_with("Exiting calculator. Goodbye!\n"));
        assert_eq!(calculator.last_result(), Some(CalcValue::Float(5.0)));
    }

    #[test]
    fn test_advanced_session() {
        let (output, _) = run_session("b\n2\n5\nb\n5\n7\n2\nb\n3\n2\n10\nexit\n");
        assert!(output.contains("Result: factorial(5) = 120"));
        assert!(output.contains("Result: logarithm(7, 2) = not found"));
        assert!(output.contains("Result: exponent(2, 10) = 1024"));
    }

    #[test]
    fn test_financial_session() {
        let (output, _) = run_session("c\n1\n100000\n10\n12\nc\n2\n50\n200\nquit\n");
        assert!(output.contains("EMI amount: 8791.59"));
        assert!(output.contains("50% of 200 is 100"));
    }

    #[test]
    fn test_errors_do_not_end_the_loop() {
        let (output, calculator) = run_session("a\n1\n/\n0\nb\n1\n-4\na\n1\n+\n1\nquit\n");
        assert!(output.contains("Error: unable to divide by zero"));
        assert!(output.contains("Error: invalid argument: cannot calculate square root"));
        assert!(output.contains("Result: 1 + 1 = 2"));
        assert_eq!(calculator.last_result(), Some(CalcValue::Float(2.0)));
    }

    #[test]
    fn test_bad_input_returns_to_menu() {
        let (output, _) = run_session("x\na\nten\nb\n9\nc\n1\n1000\n5\nsix\na\n4\n^\n2\nquit\n");
        assert!(output.contains("Give valid option!!!"));
        assert!(output.contains("Invalid input: 'ten' is not a valid number"));
        assert!(output.contains("Invalid input: no advanced operation 9"));
        assert!(output.contains("Invalid input: 'six' is not a valid number"));
        assert!(output.contains("Invalid input: unknown operator '^'"));
        assert!(output.ends_with("Exiting calculator. Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (output, calculator) = run_session("a\n3\n*");
        assert!(output.ends_with("Exiting calculator. Goodbye!\n"));
        assert_eq!(calculator.last_result(), None);

        let (output, _) = run_session("");
        assert!(output.ends_with("Exiting calculator. Goodbye!\n"));
    }

    #[test]
    fn test_read_error_stops_the_loop() {
        let calculator = Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler));
        let mut shell = Shell::new(calculator, BufReader::new(BrokenInput), Vec::new());

        let err = shell.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let (_, output) = shell.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("Goodbye"));
    }
}
