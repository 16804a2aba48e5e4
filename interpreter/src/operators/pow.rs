use crate::operators::{classify, Operator};
use crate::{to_number, ErrorKind, Value};

pub const SYMBOL: &str = "^";
pub const OPERATOR: Operator = Operator::new(SYMBOL, pow);

/// The all important exponentiation operator.
///
/// Raises `first` to the first of `rest`; further operands are ignored. A
/// missing or non-numeric operand is `#VALUE!`. An infinite result is
/// `#DIV/0!` for a zero base (`0 ^ -1`) and `#NUM!` otherwise.
pub fn pow(first: &Value, rest: &[Value]) -> Value {
    let base = to_number(first);
    let exponent = rest.first().map(to_number).unwrap_or(f64::NAN);
    // powf maps 1 ^ NaN and NaN ^ 0 to 1, which would hide a bad operand
    if base.is_nan() || exponent.is_nan() {
        return classify(SYMBOL, f64::NAN, ErrorKind::Num);
    }
    let overflow = if base == 0.0 {
        ErrorKind::DivZero
    } else {
        ErrorKind::Num
    };
    classify(SYMBOL, base.powf(exponent), overflow)
}
