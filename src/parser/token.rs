use std::fmt;

use crate::expression::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(Number),
    /// '+'
    Plus,
    /// '-'
    Minus,
    /// '*'
    Star,
    /// '**'
    DoubleStar,
    /// '/'
    Slash,
    /// '//', floor division; lexed so the parser can reject it by name
    DoubleSlash,
    /// '%'
    Percent,
    /// '('
    LParen,
    /// ')'
    RParen,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::DoubleStar => write!(f, "'**'"),
            Token::Slash => write!(f, "'/'"),
            Token::DoubleSlash => write!(f, "'//'"),
            Token::Percent => write!(f, "'%'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Eof => write!(f, "end of expression"),
        }
    }
}
