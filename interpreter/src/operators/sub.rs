use crate::operators::{classify, fold, Operator};
use crate::{ErrorKind, Value};

pub const SYMBOL: &str = "-";
pub const OPERATOR: Operator = Operator::new(SYMBOL, sub);

/// The all important subtraction operator.
pub fn sub(first: &Value, rest: &[Value]) -> Value {
    classify(SYMBOL, fold(first, rest, |acc, x| acc - x), ErrorKind::Num)
}
