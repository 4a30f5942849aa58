// ============================================================================
// Menu Definitions
// Texts and selections of the interactive calculator
// ============================================================================

use crate::domain::CalculatorKind;

pub const TITLE: &str = "Advanced CLI Calculator";

pub const INTRO: &str = "We support different types of calculators:

a) Basic calculator-> +, -, *, /
b) Advanced Calculator -> Square root, Factorial, Exponent, nth root, Sine, Logarithm
c) Financial Calculator -> EMI calculator, Percentage calculator

So, select your desired calculator (or type quit/exit)";

pub const BASIC_MENU: &str = "Basic calculator-> +, -, *, /";

pub const ADVANCED_MENU: &str = "Advanced Calculator ->
1. Square root
2. Factorial
3. Exponent
4. nth root
5. Logarithms
6. Sine value";

pub const FINANCIAL_MENU: &str = "Financial Calculator ->
1. EMI calculator
2. Percentage calculator";

/// Answer to the top-level prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Calculator(CalculatorKind),
    Quit,
}

impl MenuSelection {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "a" => Some(MenuSelection::Calculator(CalculatorKind::Basic)),
            "b" => Some(MenuSelection::Calculator(CalculatorKind::Advanced)),
            "c" => Some(MenuSelection::Calculator(CalculatorKind::Financial)),
            "quit" | "exit" => Some(MenuSelection::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancedChoice {
    SquareRoot,
    Factorial,
    Exponent,
    NthRoot,
    Logarithm,
    Sine,
}

impl AdvancedChoice {
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(AdvancedChoice::SquareRoot),
            2 => Some(AdvancedChoice::Factorial),
            3 => Some(AdvancedChoice::Exponent),
            4 => Some(AdvancedChoice::NthRoot),
            5 => Some(AdvancedChoice::Logarithm),
            6 => Some(AdvancedChoice::Sine),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialChoice {
    Emi,
    Percentage,
}

impl FinancialChoice {
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(FinancialChoice::Emi),
            2 => Some(FinancialChoice::Percentage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_selection() {
        assert_eq!(
            MenuSelection::parse(" b \n"),
            Some(MenuSelection::Calculator(CalculatorKind::Advanced))
        );
        assert_eq!(MenuSelection::parse("EXIT"), Some(MenuSelection::Quit));
        assert_eq!(MenuSelection::parse("d"), None);
        assert_eq!(MenuSelection::parse(""), None);
    }

    #[test]
    fn test_numbered_choices() {
        assert_eq!(AdvancedChoice::from_number(6), Some(AdvancedChoice::Sine));
        assert_eq!(AdvancedChoice::from_number(0), None);
        assert_eq!(FinancialChoice::from_number(1), Some(FinancialChoice::Emi));
        assert_eq!(FinancialChoice::from_number(3), None);
    }
}
