use std::fmt;

use crate::expression::ast::{BinaryOperator, Expression};
use crate::expression::number::Number;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::BinaryOp { op, .. } => match op {
                    BinaryOperator::Add | BinaryOperator::Sub => 1,
                    BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 2,
                    BinaryOperator::Pow => 4,
                },
                Expression::UnaryOp { .. } => 3,
                // A negative literal prints with a leading sign, like a unary minus
                Expression::Literal(n) if n.as_f64() < 0.0 => 3,
                Expression::Literal(_) => 5,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_literal(f: &mut fmt::Formatter, value: Number) -> fmt::Result {
            match value {
                Number::Integer(n) => write!(f, "{}", n),
                // Keep the decimal point so the text parses back to a float
                Number::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
                Number::Float(v) => write!(f, "{}", v),
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Literal(value) => fmt_literal(f, *value),
                Expression::UnaryOp { op, operand } => {
                    write!(f, "{}", op.symbol())?;
                    write_with_parens(f, operand, precedence(operand) < 3)
                }
                Expression::BinaryOp {
                    op: BinaryOperator::Pow,
                    left,
                    right,
                } => {
                    write_with_parens(f, left, precedence(left) <= 4)?;
                    write!(f, " ** ")?;
                    write_with_parens(f, right, precedence(right) < 3)
                }
                Expression::BinaryOp { op, left, right } => {
                    let p = precedence(expr);
                    write_with_parens(f, left, precedence(left) < p)?;
                    write!(f, " {} ", op.symbol())?;
                    write_with_parens(f, right, precedence(right) <= p)
                }
            }
        }

        fmt_expression(f, self)
    }
}
