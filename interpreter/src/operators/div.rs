use crate::operators::{classify, fold, Operator};
use crate::{ErrorKind, Value};

pub const SYMBOL: &str = "/";
pub const OPERATOR: Operator = Operator::new(SYMBOL, div);

/// The all important divide operator.
///
/// Divides `first` by each of `rest` in turn, `a / b / c` being `(a / b) / c`.
/// The whole chain is computed before the result is looked at, so an
/// infinity from an early zero divisor survives later steps.
///
/// * `NaN` (a non-numeric operand, or `0 / 0`) is `#VALUE!`
/// * any other non-finite result is `#DIV/0!`
///
/// # Example
/// ```
/// use formula_interpreter::operators::div::div;
/// use formula_interpreter::{ErrorKind, Value};
///
/// let ten = Value::from(10);
/// assert_eq!(div(&ten, &[Value::from(4)]), Value::Number(2.5));
/// assert_eq!(div(&ten, &[Value::from(0)]), Value::Error(ErrorKind::DivZero));
/// ```
pub fn div(first: &Value, rest: &[Value]) -> Value {
    classify(SYMBOL, fold(first, rest, |acc, x| acc / x), ErrorKind::DivZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn numbers(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Number).collect()
    }

    #[rstest]
    #[case(10.0, 2.0)]
    #[case(1.0, 3.0)]
    #[case(-7.5, 2.5)]
    #[case(0.0, -4.0)]
    #[case(1e-300, 1e10)]
    #[case(123456.789, -0.001)]
    fn matches_float_division(#[case] a: f64, #[case] b: f64) {
        let result = div(&Value::Number(a), &numbers(&[b]));
        assert_eq!(result, Value::Number(a / b));
        let n = result.as_number().unwrap();
        assert!(n.is_finite());
    }

    #[rstest]
    #[case(1.0)]
    #[case(-1.0)]
    #[case(0.5)]
    fn nonzero_over_zero_is_div_zero(#[case] a: f64) {
        assert_eq!(
            div(&Value::Number(a), &numbers(&[0.0])),
            Value::Error(ErrorKind::DivZero)
        );
    }

    #[test]
    fn zero_over_zero_is_value_error() {
        assert_eq!(
            div(&Value::Number(0.0), &numbers(&[0.0])),
            Value::Error(ErrorKind::Value)
        );
    }

    #[test]
    fn single_operand_is_returned_unchanged() {
        assert_eq!(div(&Value::Number(7.25), &[]), Value::Number(7.25));
        assert_eq!(div(&Value::from("12"), &[]), Value::Number(12.0));
    }

    #[test]
    fn single_non_numeric_operand_is_value_error() {
        assert_eq!(div(&Value::from("abc"), &[]), Value::Error(ErrorKind::Value));
        assert_eq!(div(&Value::Null, &[]), Value::Error(ErrorKind::Value));
    }

    #[test]
    fn chained_division_folds_left() {
        assert_eq!(div(&Value::Number(100.0), &numbers(&[5.0, 4.0])), Value::Number(5.0));
        assert_eq!(div(&Value::Number(8.0), &numbers(&[2.0, 2.0, 2.0])), Value::Number(1.0));
    }

    #[test]
    fn zero_divisor_late_in_chain() {
        assert_eq!(
            div(&Value::Number(10.0), &numbers(&[2.0, 0.0])),
            Value::Error(ErrorKind::DivZero)
        );
    }

    #[test]
    fn infinity_divided_by_zero_stays_infinite() {
        // (10 / 0) / 0 is Infinity / 0, which is Infinity rather than NaN
        assert!((f64::INFINITY / 0.0).is_infinite());
        assert_eq!(
            div(&Value::Number(10.0), &numbers(&[0.0, 0.0])),
            Value::Error(ErrorKind::DivZero)
        );
    }

    #[test]
    fn infinite_divisor_after_zero_divisor_is_value_error() {
        // Infinity / Infinity is NaN, classified on the final value only
        assert_eq!(
            div(&Value::Number(1.0), &[Value::Number(0.0), Value::Number(f64::INFINITY)]),
            Value::Error(ErrorKind::Value)
        );
    }

    #[test]
    fn non_numeric_anywhere_in_chain_is_value_error() {
        assert_eq!(
            div(&Value::Number(10.0), &[Value::Number(0.0), Value::from("abc")]),
            Value::Error(ErrorKind::Value)
        );
        assert_eq!(
            div(&Value::from("abc"), &numbers(&[0.0])),
            Value::Error(ErrorKind::Value)
        );
    }

    #[test]
    fn numeric_text_is_coerced() {
        assert_eq!(
            div(&Value::from("10"), &[Value::from("4")]),
            Value::Number(2.5)
        );
        assert_eq!(
            div(&Value::from("1.5"), &[Value::from("0.5")]),
            Value::Number(3.0)
        );
    }

    #[test]
    fn error_operands_are_not_numbers() {
        assert_eq!(
            div(&Value::Error(ErrorKind::Ref), &numbers(&[1.0])),
            Value::Error(ErrorKind::Value)
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let rest = numbers(&[3.0, 0.0]);
        let first = div(&Value::Number(9.0), &rest);
        for _ in 0..3 {
            assert_eq!(div(&Value::Number(9.0), &rest), first);
        }
    }

    #[test]
    fn exposes_its_symbol() {
        assert_eq!(SYMBOL, "/");
        assert_eq!(OPERATOR.symbol, "/");
        assert_eq!(OPERATOR.call(&Value::Number(9.0), &numbers(&[3.0])), Value::Number(3.0));
    }

    fn nonzero_finite() -> prop::num::f64::Any {
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL
    }

    fn operand() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<f64>().prop_map(Value::Number),
            "[-+ 0-9a-z.eE]{0,8}".prop_map(Value::String),
            any::<bool>().prop_map(Value::Bool),
            Just(Value::Null),
            Just(Value::Error(ErrorKind::Ref)),
        ]
    }

    proptest! {
        #[test]
        fn finite_quotients_match_float_division(
            a in nonzero_finite() | prop::num::f64::ZERO,
            b in nonzero_finite(),
        ) {
            prop_assume!((a / b).is_finite());
            let result = div(&Value::Number(a), &[Value::Number(b)]);
            prop_assert_eq!(result.clone(), Value::Number(a / b));
            prop_assert!(result.as_number().unwrap().is_finite());
        }

        #[test]
        fn nonzero_over_zero_is_always_div_zero(a in nonzero_finite()) {
            prop_assert_eq!(
                div(&Value::Number(a), &[Value::Number(0.0)]),
                Value::Error(ErrorKind::DivZero)
            );
        }

        #[test]
        fn identical_operands_give_identical_results(
            first in operand(),
            rest in prop::collection::vec(operand(), 0..6),
        ) {
            let once = div(&first, &rest);
            let twice = div(&first, &rest);
            prop_assert_eq!(once.clone(), twice);
            // classification never leaks a NaN or an infinity
            if let Value::Number(n) = once {
                prop_assert!(n.is_finite());
            }
        }
    }
}
