use crate::expression::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::expression::errors::ExpressionError;
use crate::expression::number::Number;

fn lit(n: i64) -> Expression {
    Expression::literal(n)
}

fn bin(op: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::binary(op, left, right)
}

#[test]
fn test_literal_evaluates_to_itself() {
    let result = Expression::literal(3.5).evaluate();
    assert_eq!(result, Ok(Number::Float(3.5)));
}

#[test]
fn test_precedence_tree() {
    // 2 + 3 * 4
    let expr = bin(
        BinaryOperator::Add,
        lit(2),
        bin(BinaryOperator::Mul, lit(3), lit(4)),
    );
    assert_eq!(expr.evaluate(), Ok(Number::Integer(14)));
}

#[test]
fn test_unary_operators() {
    let neg = Expression::unary(UnaryOperator::Neg, lit(5));
    assert_eq!(neg.evaluate(), Ok(Number::Integer(-5)));

    let pos = Expression::unary(UnaryOperator::Pos, neg);
    assert_eq!(pos.evaluate(), Ok(Number::Integer(-5)));
}

#[test]
fn test_division_is_never_truncating() {
    let expr = bin(BinaryOperator::Div, lit(7), lit(2));
    assert_eq!(expr.evaluate(), Ok(Number::Float(3.5)));

    let expr = bin(BinaryOperator::Div, lit(16), lit(2));
    assert_eq!(expr.evaluate(), Ok(Number::Float(8.0)));
}

#[test]
fn test_division_by_zero() {
    let expr = bin(BinaryOperator::Div, lit(5), lit(0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));

    let expr = bin(BinaryOperator::Div, lit(5), Expression::literal(0.0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_modulo_by_zero() {
    let expr = bin(BinaryOperator::Mod, lit(5), lit(0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_modulo_sign_follows_divisor() {
    let cases = [(7, 3, 1), (-7, 3, 2), (7, -3, -2), (-7, -3, -1)];
    for (a, b, expected) in cases {
        let expr = bin(BinaryOperator::Mod, lit(a), lit(b));
        assert_eq!(expr.evaluate(), Ok(Number::Integer(expected)), "{a} % {b}");
    }
}

#[test]
fn test_float_modulo() {
    let expr = bin(BinaryOperator::Mod, Expression::literal(-7.5), lit(2));
    assert_eq!(expr.evaluate(), Ok(Number::Float(0.5)));
}

#[test]
fn test_integer_power() {
    let expr = bin(BinaryOperator::Pow, lit(2), lit(10));
    assert_eq!(expr.evaluate(), Ok(Number::Integer(1024)));
}

#[test]
fn test_negative_exponent_gives_float() {
    let expr = bin(BinaryOperator::Pow, lit(2), lit(-1));
    assert_eq!(expr.evaluate(), Ok(Number::Float(0.5)));
}

#[test]
fn test_zero_to_negative_power() {
    let expr = bin(BinaryOperator::Pow, lit(0), lit(-1));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_negative_base_fractional_exponent() {
    let expr = bin(BinaryOperator::Pow, lit(-8), Expression::literal(0.5));
    assert_eq!(expr.evaluate(), Err(ExpressionError::ComplexResult));
}

#[test]
fn test_negative_base_integral_float_exponent() {
    let expr = bin(BinaryOperator::Pow, lit(-2), Expression::literal(3.0));
    assert_eq!(expr.evaluate(), Ok(Number::Float(-8.0)));
}

#[test]
fn test_power_overflow() {
    let expr = bin(BinaryOperator::Pow, Expression::literal(10.0), lit(400));
    assert_eq!(expr.evaluate(), Err(ExpressionError::Overflow));
}

#[test]
fn test_integer_overflow_falls_back_to_float() {
    let expr = bin(BinaryOperator::Mul, lit(i64::MAX), lit(2));
    let result = expr.evaluate();
    assert!(matches!(result, Ok(Number::Float(_))));
    if let Ok(value) = result {
        assert!((value.as_f64() - 2.0 * i64::MAX as f64).abs() < 1e3);
    }

    let expr = Expression::unary(UnaryOperator::Neg, lit(i64::MIN));
    assert!(matches!(expr.evaluate(), Ok(Number::Float(_))));
}

#[test]
fn test_error_stops_evaluation() {
    // (1 / 0) + 2 fails as a whole rather than yielding a partial value
    let expr = bin(
        BinaryOperator::Add,
        bin(BinaryOperator::Div, lit(1), lit(0)),
        lit(2),
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_number_display_collapses_whole_floats() {
    assert_eq!(Number::Float(8.0).to_string(), "8");
    assert_eq!(Number::Float(-3.0).to_string(), "-3");
    assert_eq!(Number::Float(-0.0).to_string(), "0");
    assert_eq!(Number::Float(1e20).to_string(), "100000000000000000000");
    assert_eq!(Number::Float(2.5).to_string(), "2.5");
    assert_eq!(Number::Float(0.1 + 0.2).to_string(), "0.30000000000000004");
    assert_eq!(Number::Integer(-42).to_string(), "-42");
}

#[test]
fn test_number_display_non_finite() {
    assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
    assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-inf");
    assert_eq!(Number::Float(f64::NAN).to_string(), "nan");
}

#[test]
fn test_expression_display_minimal_parens() {
    let expr = bin(
        BinaryOperator::Mul,
        bin(BinaryOperator::Add, lit(2), lit(3)),
        lit(4),
    );
    assert_eq!(expr.to_string(), "(2 + 3) * 4");

    let expr = bin(
        BinaryOperator::Sub,
        lit(1),
        bin(BinaryOperator::Sub, lit(2), lit(3)),
    );
    assert_eq!(expr.to_string(), "1 - (2 - 3)");
}

#[test]
fn test_expression_display_power() {
    let expr = bin(
        BinaryOperator::Pow,
        Expression::unary(UnaryOperator::Neg, lit(2)),
        lit(2),
    );
    assert_eq!(expr.to_string(), "(-2) ** 2");

    let expr = bin(
        BinaryOperator::Pow,
        lit(2),
        Expression::unary(UnaryOperator::Neg, lit(1)),
    );
    assert_eq!(expr.to_string(), "2 ** -1");

    let expr = Expression::unary(
        UnaryOperator::Neg,
        bin(BinaryOperator::Pow, lit(2), lit(2)),
    );
    assert_eq!(expr.to_string(), "-2 ** 2");
}

#[test]
fn test_expression_display_float_literal() {
    assert_eq!(Expression::literal(3.0).to_string(), "3.0");
    assert_eq!(Expression::literal(0.25).to_string(), "0.25");
}
