use crate::operators::{classify, fold, Operator};
use crate::{ErrorKind, Value};

pub const SYMBOL: &str = "+";
pub const OPERATOR: Operator = Operator::new(SYMBOL, add);

/// The all important add operator.
///
/// Sums every operand left to right. Non-numeric operands give `#VALUE!`,
/// an overflowing sum gives `#NUM!`.
pub fn add(first: &Value, rest: &[Value]) -> Value {
    classify(SYMBOL, fold(first, rest, |acc, x| acc + x), ErrorKind::Num)
}
