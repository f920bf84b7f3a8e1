//! Character gate, lexer and parser for calculator input

pub mod constants;
mod errors;
mod grammar;
mod lexer;
mod token;
mod validation;

use log::debug;

use crate::expression::Expression;

pub use errors::ParseError;
pub use grammar::Parser;
pub use lexer::Lexer;
pub use token::Token;
pub use validation::validate_characters;

/// Checks the input against the character whitelist, then parses it
///
/// # Errors
///
/// Returns [`ParseError::InvalidCharacter`] before any parsing is attempted
/// if the input contains a character outside the calculator alphabet, and
/// otherwise whatever [`Parser::parse`] reports.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    validate_characters(input)?;

    let expr = Parser::new(input).parse()?;
    debug!("Parsed '{}' as: {}", input, expr);
    Ok(expr)
}
