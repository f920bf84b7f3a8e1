//! Scans expression text into tokens. Spaces (only ' ') separate tokens and are
//! otherwise ignored; `**` and `//` are only recognised when adjacent.

use std::iter::Peekable;
use std::str::CharIndices;

use log::trace;

use crate::expression::Number;
use crate::parser::errors::ParseError;
use crate::parser::token::Token;

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    token_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            chars: input.char_indices().peekable(),
            token_start: 0,
        }
    }

    /// Byte offset of the most recently returned token
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// # Errors
    ///
    /// Returns an error for a malformed number literal or a character that
    /// has no meaning in the grammar.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let Some((start, ch)) = self.chars.next() else {
            self.token_start = self.input.len();
            return Ok(Token::Eof);
        };
        self.token_start = start;

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' if self.next_is('*') => Token::DoubleStar,
            '*' => Token::Star,
            '/' if self.next_is('/') => Token::DoubleSlash,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' | '.' => self.read_number(start)?,
            character => {
                return Err(ParseError::InvalidCharacter {
                    character,
                    position: start,
                });
            }
        };

        trace!("Lexed {} at position {}", token, start);
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, c)| c == ' ').is_some() {}
    }

    /// Consumes the next character when it equals `expected`
    fn next_is(&mut self, expected: char) -> bool {
        self.chars.next_if(|&(_, c)| c == expected).is_some()
    }

    fn read_number(&mut self, start: usize) -> Result<Token, ParseError> {
        // The first character, a digit or '.', has already been consumed
        let mut end = start + 1;
        let mut seen_dot = self.input.as_bytes().get(start) == Some(&b'.');

        while let Some(&(i, c)) = self.chars.peek() {
            if c == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            end = i + c.len_utf8();
            self.chars.next();
        }

        let text = self.input.get(start..end).unwrap_or_default();
        parse_literal(text).map(Token::Number).ok_or_else(|| {
            ParseError::Syntax(format!(
                "invalid number literal '{}' at position {}",
                text, start
            ))
        })
    }
}

/// Converts literal text to a number. Integer literals may not carry
/// leading zeros unless every digit is zero; literals too large for an
/// integer become floats.
fn parse_literal(text: &str) -> Option<Number> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    if text.contains('.') {
        return text.parse::<f64>().ok().map(Number::Float);
    }

    if text.len() > 1 && text.starts_with('0') && text.bytes().any(|b| b != b'0') {
        return None;
    }

    match text.parse::<i64>() {
        Ok(n) => Some(Number::Integer(n)),
        Err(_) => text.parse::<f64>().ok().map(Number::Float),
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::parse_literal;
    use crate::expression::Number;

    #[test]
    fn test_parse_literal_forms() {
        assert_eq!(parse_literal("12"), Some(Number::Integer(12)));
        assert_eq!(parse_literal("3.5"), Some(Number::Float(3.5)));
        assert_eq!(parse_literal(".5"), Some(Number::Float(0.5)));
        assert_eq!(parse_literal("5."), Some(Number::Float(5.0)));
        assert_eq!(parse_literal("00"), Some(Number::Integer(0)));
        assert_eq!(parse_literal("01.5"), Some(Number::Float(1.5)));
    }

    #[test]
    fn test_parse_literal_rejects() {
        assert_eq!(parse_literal("."), None);
        assert_eq!(parse_literal("012"), None);
    }

    #[test]
    fn test_parse_literal_huge_integer() {
        assert_eq!(
            parse_literal("100000000000000000000"),
            Some(Number::Float(1e20))
        );
    }
}
