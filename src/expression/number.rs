use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use log::trace;

use crate::expression::errors::ExpressionError;

/// A calculator value: integral until an operation forces a fractional result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Floor-style remainder: the result takes the sign of the divisor
#[inline]
fn floor_mod(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    if rem == 0.0 {
        0.0_f64.copysign(divisor)
    } else if (rem < 0.0) != (divisor < 0.0) {
        rem + divisor
    } else {
        rem
    }
}

/// Applies an integer operation, falling back to float arithmetic on overflow
#[inline]
fn integer_or_float(
    lhs: Number,
    rhs: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Integer(a), Number::Integer(b)) = (lhs, rhs) {
        if let Some(value) = int_op(a, b) {
            return Number::Integer(value);
        }
        trace!("Integer overflow in {} and {}, using float arithmetic", a, b);
    }
    Number::Float(float_op(lhs.as_f64(), rhs.as_f64()))
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(n) => n == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    /// True division; always produces a float
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when `divisor` is zero.
    pub fn divide(self, divisor: Number) -> Result<Number, ExpressionError> {
        if divisor.is_zero() {
            return Err(ExpressionError::DivisionByZero);
        }
        Ok(Number::Float(self.as_f64() / divisor.as_f64()))
    }

    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when `divisor` is zero.
    pub fn modulo(self, divisor: Number) -> Result<Number, ExpressionError> {
        if divisor.is_zero() {
            return Err(ExpressionError::DivisionByZero);
        }
        if let (Number::Integer(a), Number::Integer(b)) = (self, divisor)
            && let Some(rem) = a.checked_rem(b)
        {
            let rem = if rem != 0 && (rem < 0) != (b < 0) {
                rem + b
            } else {
                rem
            };
            return Ok(Number::Integer(rem));
        }
        Ok(Number::Float(floor_mod(self.as_f64(), divisor.as_f64())))
    }

    /// # Errors
    ///
    /// Returns an error when:
    /// - zero is raised to a negative power
    /// - a negative base is raised to a fractional power
    /// - the result is too large to represent
    pub fn power(self, exponent: Number) -> Result<Number, ExpressionError> {
        if let (Number::Integer(base), Number::Integer(exp)) = (self, exponent)
            && let Ok(exp) = u32::try_from(exp)
            && let Some(value) = base.checked_pow(exp)
        {
            return Ok(Number::Integer(value));
        }

        let base = self.as_f64();
        let exp = exponent.as_f64();

        if base == 0.0 && exp < 0.0 {
            return Err(ExpressionError::DivisionByZero);
        }
        if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
            return Err(ExpressionError::ComplexResult);
        }

        let value = base.powf(exp);
        if value.is_infinite() && base.is_finite() && exp.is_finite() {
            return Err(ExpressionError::Overflow);
        }
        Ok(Number::Float(value))
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        integer_or_float(self, rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        integer_or_float(self, rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        integer_or_float(self, rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(n) => n
                .checked_neg()
                .map_or(Number::Float(-(n as f64)), Number::Integer),
            Number::Float(v) => Number::Float(-v),
        }
    }
}

/// Writes `v` as a shortest mantissa and a signed, two-digit exponent,
/// e.g. `1e-05` or `9.313225746154785e-10`
fn write_scientific(f: &mut fmt::Formatter, v: f64) -> fmt::Result {
    let text = format!("{:e}", v);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => write!(f, "{}", text),
    }
}

/// Formats a result for the calculator display. Whole floats are shown
/// without a fractional part, so `8.0` reads as `8`; very small fractions
/// switch to exponent notation.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(v) if v.is_nan() => write!(f, "nan"),
            Number::Float(v) if v.is_infinite() => {
                if v > 0.0 {
                    write!(f, "inf")
                } else {
                    write!(f, "-inf")
                }
            }
            Number::Float(v) if v == 0.0 => write!(f, "0"),
            Number::Float(v) if v.fract() == 0.0 => write!(f, "{:.0}", v),
            Number::Float(v) if v.abs() < 1e-4 || v.abs() >= 1e16 => write_scientific(f, v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}
