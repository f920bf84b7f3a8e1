use thiserror::Error;

use crate::expression::ExpressionError;
use crate::parser::ParseError;

/// Any reason an input string fails to produce a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
}
