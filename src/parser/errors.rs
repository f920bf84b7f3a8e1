use thiserror::Error;

/// Errors that reject an expression before it is evaluated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Syntax error: {0}")]
    Syntax(String),
    #[error("Unsupported expression: {0}")]
    UnsupportedNode(String),
}
