//! Expression tree, numeric values and evaluation

mod ast;
mod display;
mod errors;
mod eval;
mod number;

pub use ast::{BinaryOperator, Expression, UnaryOperator};
pub use errors::ExpressionError;
pub use number::Number;

#[cfg(test)]
mod tests;
