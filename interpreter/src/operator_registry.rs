use crate::operators::{first_error, Operator, OPERATORS};
use crate::{ExecutionError, Value};
use log::trace;
use std::collections::HashMap;

/// A lookup table from operator symbol to operator record.
///
/// The table is built explicitly and never changes behind the caller's back.
/// [`OperatorRegistry::default`] holds every built-in infix operator, while
/// [`OperatorRegistry::empty`] starts blank for hosts that only want a subset
/// or their own handlers.
///
/// # Example
/// ```
/// use formula_interpreter::{ErrorKind, OperatorRegistry, Value};
///
/// let registry = OperatorRegistry::default();
/// let result = registry.evaluate("/", &[Value::from(10), Value::from(0)]).unwrap();
/// assert_eq!(result, Value::Error(ErrorKind::DivZero));
/// ```
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    operators: HashMap<&'static str, Operator>,
}

impl OperatorRegistry {
    /// Constructs a registry with no operators at all.
    pub fn empty() -> Self {
        OperatorRegistry {
            operators: HashMap::new(),
        }
    }

    /// Registers `operator` under its own symbol, replacing any operator
    /// already registered with that symbol.
    pub fn add(&mut self, operator: Operator) {
        trace!("registering operator '{}'", operator.symbol);
        self.operators.insert(operator.symbol, operator);
    }

    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.operators.get(symbol)
    }

    pub fn has(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Registered symbols, sorted.
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut symbols: Vec<_> = self.operators.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    /// Applies the operator registered as `symbol` to `operands`.
    ///
    /// The first error among the operands is returned untouched without
    /// running the handler. Only host faults, an unknown symbol or an empty
    /// operand list, surface as `Err`.
    pub fn evaluate(&self, symbol: &str, operands: &[Value]) -> Result<Value, ExecutionError> {
        let operator = self
            .get(symbol)
            .ok_or_else(|| ExecutionError::undefined_operator(symbol))?;
        let (first, rest) = operands
            .split_first()
            .ok_or_else(|| ExecutionError::missing_operand(operator.symbol))?;
        if let Some(error) = first_error(first, rest) {
            trace!("operator '{}' short-circuited on {}", operator.symbol, error);
            return Ok(error.clone());
        }
        Ok(operator.call(first, rest))
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        let mut registry = OperatorRegistry::empty();
        for operator in OPERATORS {
            registry.add(*operator);
        }
        registry
    }
}
