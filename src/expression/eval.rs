use log::{debug, trace};

use crate::expression::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::expression::errors::ExpressionError;
use crate::expression::number::Number;

impl UnaryOperator {
    pub fn apply(self, operand: Number) -> Number {
        match self {
            UnaryOperator::Pos => operand,
            UnaryOperator::Neg => -operand,
        }
    }
}

impl BinaryOperator {
    /// # Errors
    ///
    /// Returns an error when the operation has no real, finite result for
    /// the given operands (see [`Number::divide`], [`Number::modulo`] and
    /// [`Number::power`]).
    pub fn apply(self, left: Number, right: Number) -> Result<Number, ExpressionError> {
        match self {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => left.divide(right),
            BinaryOperator::Mod => left.modulo(right),
            BinaryOperator::Pow => left.power(right),
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division or modulo by zero, or raising zero to a negative power
    /// - Raising a negative base to a fractional exponent (complex result)
    /// - Exponentiation whose result overflows
    pub fn evaluate(&self) -> Result<Number, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = self.evaluate_node();

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    fn evaluate_node(&self) -> Result<Number, ExpressionError> {
        match self {
            Expression::Literal(value) => Ok(*value),
            Expression::UnaryOp { op, operand } => {
                let value = operand.evaluate_node()?;
                Ok(op.apply(value))
            }
            Expression::BinaryOp { op, left, right } => {
                let lhs = left.evaluate_node()?;
                let rhs = right.evaluate_node()?;
                let result = op.apply(lhs, rhs);
                if let Err(e) = &result {
                    trace!("{:?} {} {:?} failed: {}", lhs, op.symbol(), rhs, e);
                }
                result
            }
        }
    }
}
