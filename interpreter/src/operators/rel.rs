use crate::operators::{first_error, Operator};
use crate::{to_number, Value};
use std::cmp::Ordering;

pub const EQUAL: Operator = Operator::new("=", eq);
pub const NOT_EQUAL: Operator = Operator::new("<>", neq);
pub const GREATER_THAN: Operator = Operator::new(">", gt);
pub const GREATER_THAN_OR_EQUAL: Operator = Operator::new(">=", gte);
pub const LESS_THAN: Operator = Operator::new("<", lt);
pub const LESS_THAN_OR_EQUAL: Operator = Operator::new("<=", lte);

/// Applies `test` to the first two operands, a missing right operand being
/// [`Value::Null`]. Error operands win over the comparison.
#[inline(always)]
fn relate(first: &Value, rest: &[Value], test: fn(&Value, &Value) -> bool) -> Value {
    if let Some(error) = first_error(first, rest) {
        return error.clone();
    }
    match rest.first() {
        Some(right) => Value::Bool(test(first, right)),
        None => Value::Bool(test(first, &Value::Null)),
    }
}

/// Text compares with text, everything else compares numerically. `None`
/// when either side is not a number.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (l, r) => to_number(l).partial_cmp(&to_number(r)),
    }
}

/// Equality - delegates to `Value`.
pub fn eq(first: &Value, rest: &[Value]) -> Value {
    relate(first, rest, |l, r| l == r)
}

/// Not equality - delegates to `Value`.
pub fn neq(first: &Value, rest: &[Value]) -> Value {
    relate(first, rest, |l, r| l != r)
}

/// Greater than.
pub fn gt(first: &Value, rest: &[Value]) -> Value {
    relate(first, rest, |l, r| compare(l, r) == Some(Ordering::Greater))
}

/// Greater than equals.
pub fn gte(first: &Value, rest: &[Value]) -> Value {
    relate(first, rest, |l, r| {
        matches!(compare(l, r), Some(Ordering::Greater | Ordering::Equal))
    })
}

/// Less than.
pub fn lt(first: &Value, rest: &[Value]) -> Value {
    relate(first, rest, |l, r| compare(l, r) == Some(Ordering::Less))
}

/// Less than equals.
pub fn lte(first: &Value, rest: &[Value]) -> Value {
    relate(first, rest, |l, r| {
        matches!(compare(l, r), Some(Ordering::Less | Ordering::Equal))
    })
}
