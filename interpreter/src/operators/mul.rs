use crate::operators::{classify, fold, Operator};
use crate::{ErrorKind, Value};

pub const SYMBOL: &str = "*";
pub const OPERATOR: Operator = Operator::new(SYMBOL, mul);

/// The all important multiplication operator.
pub fn mul(first: &Value, rest: &[Value]) -> Value {
    classify(SYMBOL, fold(first, rest, |acc, x| acc * x), ErrorKind::Num)
}
