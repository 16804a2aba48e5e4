use crate::operators::{classify, Operator};
use crate::{invert_number, ErrorKind, Value};

pub const SYMBOL: &str = "-";
pub const OPERATOR: Operator = Operator::new(SYMBOL, neg);

/// Unary minus. Only `first` is used.
pub fn neg(first: &Value, _: &[Value]) -> Value {
    classify(SYMBOL, invert_number(first), ErrorKind::Num)
}
