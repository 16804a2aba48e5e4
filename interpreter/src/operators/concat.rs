use crate::operators::{first_error, Operator};
use crate::Value;

pub const SYMBOL: &str = "&";
pub const OPERATOR: Operator = Operator::new(SYMBOL, concat);

/// Text concatenation of every operand's display form. An operand that is
/// already an error is returned instead.
pub fn concat(first: &Value, rest: &[Value]) -> Value {
    if let Some(error) = first_error(first, rest) {
        return error.clone();
    }
    let text = std::iter::once(first)
        .chain(rest)
        .map(|value| value.to_string())
        .collect::<String>();
    Value::String(text)
}
