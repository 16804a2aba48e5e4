//! Numeric coercion used by every arithmetic operator.
//!
//! Coercion never fails. Anything that is not numerically meaningful becomes
//! `NaN`, and the handler that consumed it turns that into
//! [`ErrorKind::Value`](crate::ErrorKind::Value) once the arithmetic is done.

use crate::Value;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::{pair, tuple};
use nom::IResult;

/// Coerces an operand into a number.
///
/// * numbers are returned unchanged
/// * text containing a `.` yields its longest leading decimal prefix
///   (fraction and exponent allowed, `Infinity` accepted)
/// * any other text yields its longest leading base-10 integer prefix
/// * text with no numeric prefix, booleans, null and errors yield `NaN`
///
/// # Example
/// ```
/// use formula_interpreter::{to_number, Value};
///
/// assert_eq!(to_number(&Value::from("12.5kg")), 12.5);
/// assert_eq!(to_number(&Value::from("1e3")), 1.0);
/// assert!(to_number(&Value::Bool(true)).is_nan());
/// ```
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::String(s) => {
            let s = s.trim_start();
            let prefix = if s.contains('.') {
                decimal_prefix(s)
            } else {
                integer_prefix(s)
            };
            match prefix {
                Ok((_, digits)) => digits.parse().unwrap_or(f64::NAN),
                Err(_) => f64::NAN,
            }
        }
        Value::Bool(_) | Value::Null | Value::Error(_) => f64::NAN,
    }
}

/// The negation of [`to_number`].
pub fn invert_number(value: &Value) -> f64 {
    -to_number(value)
}

fn integer_prefix(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn decimal_prefix(input: &str) -> IResult<&str, &str> {
    alt((infinity, scientific))(input)
}

fn infinity(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), tag("Infinity")))(input)
}

fn scientific(input: &str) -> IResult<&str, &str> {
    recognize(tuple((opt(one_of("+-")), mantissa, opt(exponent))))(input)
}

// `12`, `12.`, `12.5` or `.5`
fn mantissa(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}
