use crate::{to_number, ErrorKind, Value};
use log::debug;
use std::fmt::{Debug, Formatter};

pub mod add;
pub mod concat;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod rel;
pub mod sub;

/// Signature shared by every operator: one required operand followed by any
/// number of further operands.
pub type Handler = fn(&Value, &[Value]) -> Value;

/// An operator symbol bound to the handler that evaluates it.
#[derive(Clone, Copy)]
pub struct Operator {
    pub symbol: &'static str,
    pub evaluate: Handler,
}

impl Operator {
    pub const fn new(symbol: &'static str, evaluate: Handler) -> Self {
        Operator { symbol, evaluate }
    }

    #[inline(always)]
    pub fn call(&self, first: &Value, rest: &[Value]) -> Value {
        (self.evaluate)(first, rest)
    }
}

impl Debug for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

/// Every built-in infix operator.
pub const OPERATORS: &[Operator] = &[
    add::OPERATOR,
    sub::OPERATOR,
    mul::OPERATOR,
    div::OPERATOR,
    pow::OPERATOR,
    concat::OPERATOR,
    rel::EQUAL,
    rel::NOT_EQUAL,
    rel::GREATER_THAN,
    rel::GREATER_THAN_OR_EQUAL,
    rel::LESS_THAN,
    rel::LESS_THAN_OR_EQUAL,
];

/// Prefix operators. Kept apart from [`OPERATORS`] since `-` is spelled the
/// same in both positions.
pub const UNARY_OPERATORS: &[Operator] = &[neg::OPERATOR];

/// Left fold of `op` over the coerced operands. Intermediate non-finite
/// values carry on into the next step.
#[inline(always)]
pub(crate) fn fold(first: &Value, rest: &[Value], op: fn(f64, f64) -> f64) -> f64 {
    rest.iter()
        .fold(to_number(first), |acc, value| op(acc, to_number(value)))
}

/// Maps a raw arithmetic result onto the formula value space: `NaN` is a
/// `#VALUE!`, any other non-finite result is `overflow`.
pub(crate) fn classify(symbol: &str, result: f64, overflow: ErrorKind) -> Value {
    let kind = if result.is_nan() {
        ErrorKind::Value
    } else if result.is_infinite() {
        overflow
    } else {
        return Value::Number(result);
    };
    debug!("operator '{}' evaluated to {}", symbol, kind);
    Value::Error(kind)
}

/// The first operand that is already an error, if any.
pub(crate) fn first_error<'a>(first: &'a Value, rest: &'a [Value]) -> Option<&'a Value> {
    std::iter::once(first).chain(rest).find(|v| v.is_error())
}
