//! Calcpad - A keypad calculator with a whitelisted arithmetic evaluator
//!
//! Input passes through three stages: a character gate that only admits
//! digits, `.`, `+ - * / % ( )` and spaces; a parser for a fixed arithmetic
//! grammar; and a recursive evaluator over the resulting expression tree.

pub mod calculator;
pub mod errors;
pub mod expression;
pub mod parser;

// Re-export the main public API
pub use calculator::{Calculator, KEYPAD, Key};
pub use errors::CalcError;
pub use expression::{BinaryOperator, Expression, ExpressionError, Number, UnaryOperator};
pub use parser::{ParseError, parse, validate_characters};

/// Evaluate an arithmetic expression
///
/// # Arguments
///
/// * `expression` - Text using digits, `.`, `+ - * / % ** ( )` and spaces
///
/// # Returns
///
/// * `Ok(Number)` - The value of the expression
/// * `Err(CalcError)` - If the input is rejected or has no value
///
/// # Errors
///
/// This function will return an error if:
/// * The input contains a character outside the calculator alphabet
/// * The input is not a well-formed arithmetic expression
/// * The input uses floor division or call syntax
/// * The value is undefined (division by zero, complex or overflowing power)
///
/// # Examples
///
/// ```
/// use calcpad::{Number, evaluate};
///
/// assert_eq!(evaluate("2+3*4"), Ok(Number::Integer(14)));
/// assert_eq!(evaluate("16/2").map(|n| n.to_string()), Ok("8".to_string()));
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<Number, CalcError> {
    let expr = parse(expression)?;
    Ok(expr.evaluate()?)
}
