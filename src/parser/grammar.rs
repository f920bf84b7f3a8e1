//! Recursive descent parser for the whitelisted arithmetic grammar.
//!
//! GRAMMAR (loosest binding first):
//!   additive       --> multiplicative (("+" | "-") multiplicative)*
//!   multiplicative --> unary (("*" | "/" | "%") unary)*
//!   unary          --> ("+" | "-") unary | power
//!   power          --> postfix ("**" unary)?
//!   postfix        --> primary
//!   primary        --> NUMBER | "(" additive ")"
//!
//! `//` and call syntax (`primary "(" additive? ")"`) are recognised so that
//! they are reported as unsupported constructs rather than syntax errors.
//! They never produce a tree node.

use log::{debug, trace};

use crate::expression::{BinaryOperator, Expression, UnaryOperator};
use crate::parser::constants::{MAX_NESTING_DEPTH, MAX_TREE_HEIGHT};
use crate::parser::errors::ParseError;
use crate::parser::lexer::Lexer;
use crate::parser::token::Token;

/// A parsed subtree and the number of levels it spans
struct Node {
    expr: Expression,
    height: usize,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    position: usize,
    depth: usize,
    /// First non-whitelisted construct seen, reported once parsing succeeds
    unsupported: Option<String>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input),
            current_token: Token::Eof,
            position: 0,
            depth: 0,
            unsupported: None,
        }
    }

    /// Parses the whole input into a single expression.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] when the input is not a well-formed
    /// arithmetic expression, and [`ParseError::UnsupportedNode`] when it is
    /// well-formed but uses floor division or call syntax.
    pub fn parse(mut self) -> Result<Expression, ParseError> {
        self.advance()?;

        if self.current_token == Token::Eof {
            return Err(ParseError::Syntax("empty expression".to_string()));
        }

        let Node { expr, .. } = self.parse_additive()?;

        if self.current_token != Token::Eof {
            return Err(self.unexpected());
        }

        if let Some(construct) = self.unsupported {
            debug!("Rejecting unsupported construct: {}", construct);
            return Err(ParseError::UnsupportedNode(construct));
        }

        Ok(expr)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.position = self.lexer.token_start();
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.current_token == expected {
            self.advance()
        } else {
            Err(ParseError::Syntax(format!(
                "expected {}, found {} at position {}",
                expected, self.current_token, self.position
            )))
        }
    }

    fn unexpected(&self) -> ParseError {
        ParseError::Syntax(format!(
            "unexpected {} at position {}",
            self.current_token, self.position
        ))
    }

    fn mark_unsupported(&mut self, construct: &str) {
        trace!("Found {} at position {}", construct, self.position);
        if self.unsupported.is_none() {
            self.unsupported = Some(format!("{} at position {}", construct, self.position));
        }
    }

    /// Rejects subtrees taller than the evaluator can walk
    fn check_height(&self, height: usize) -> Result<(), ParseError> {
        if height > MAX_TREE_HEIGHT {
            return Err(ParseError::Syntax(format!(
                "expression nested too deeply at position {}",
                self.position
            )));
        }
        Ok(())
    }

    fn combine(&self, op: BinaryOperator, left: Node, right: Node) -> Result<Node, ParseError> {
        let height = left.height.max(right.height) + 1;
        self.check_height(height)?;
        Ok(Node {
            expr: Expression::binary(op, left.expr, right.expr),
            height,
        })
    }

    fn parse_additive(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = self.combine(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token {
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
                Token::Percent => BinaryOperator::Mod,
                Token::DoubleSlash => {
                    self.mark_unsupported("floor division '//'");
                    self.advance()?;
                    self.parse_unary()?;
                    continue;
                }
                _ => break,
            };

            self.advance()?;
            let right = self.parse_unary()?;
            left = self.combine(op, left, right)?;
        }

        Ok(left)
    }

    /// Every level of nesting (parentheses, prefix signs, exponents) passes
    /// through here, so this is where the recursion limit is enforced.
    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::Syntax(format!(
                "expression nested too deeply at position {}",
                self.position
            )));
        }

        let op = match self.current_token {
            Token::Plus => Some(UnaryOperator::Pos),
            Token::Minus => Some(UnaryOperator::Neg),
            _ => None,
        };

        let result = match op {
            Some(op) => {
                self.advance()?;
                self.parse_unary().and_then(|operand| {
                    let height = operand.height + 1;
                    self.check_height(height)?;
                    Ok(Node {
                        expr: Expression::unary(op, operand.expr),
                        height,
                    })
                })
            }
            None => self.parse_power(),
        };

        self.depth -= 1;
        result
    }

    fn parse_power(&mut self) -> Result<Node, ParseError> {
        let base = self.parse_postfix()?;

        if self.current_token == Token::DoubleStar {
            self.advance()?;
            let exponent = self.parse_unary()?;
            return self.combine(BinaryOperator::Pow, base, exponent);
        }

        Ok(base)
    }

    fn parse_postfix(&mut self) -> Result<Node, ParseError> {
        let node = self.parse_primary()?;

        while self.current_token == Token::LParen {
            self.mark_unsupported("function call");
            self.advance()?;
            if self.current_token != Token::RParen {
                self.parse_additive()?;
            }
            self.expect(Token::RParen)?;
        }

        Ok(node)
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.current_token {
            Token::Number(value) => {
                self.advance()?;
                Ok(Node {
                    expr: Expression::Literal(value),
                    height: 1,
                })
            }
            Token::LParen => {
                let open = self.position;
                self.advance()?;
                if self.current_token == Token::RParen {
                    return Err(ParseError::Syntax(format!(
                        "empty parentheses at position {}",
                        open
                    )));
                }
                let node = self.parse_additive()?;
                self.expect(Token::RParen)?;
                Ok(node)
            }
            _ => Err(self.unexpected()),
        }
    }
}
