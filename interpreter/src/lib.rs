use thiserror::Error;

pub mod error_kind;
pub mod number;
pub mod objects;
mod operator_registry;

// ops!
pub mod operators;

pub use error_kind::ErrorKind;
pub use number::{invert_number, to_number};
pub use objects::{Value, ValueType};
pub use operator_registry::OperatorRegistry;
pub use operators::{Handler, Operator, OPERATORS, UNARY_OPERATORS};

/// Faults raised by the host side of evaluation.
///
/// These are distinct from formula errors: a division by zero is not an
/// `ExecutionError`, it is an ordinary [`Value::Error`] returned by the
/// operator handler.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ExecutionError {
    /// Attempting to use an operator that is not registered.
    #[error("Undefined operator '{0}'")]
    UndefinedOperator(String),
    /// Every operator needs at least its first operand.
    #[error("Operator '{0}' called without operands")]
    MissingOperand(&'static str),
    /// Indicates that a string did not name any known error kind.
    #[error("Unknown error kind '{0}'")]
    UnknownErrorKind(String),
}

impl ExecutionError {
    pub fn undefined_operator<S: ToString>(symbol: S) -> Self {
        ExecutionError::UndefinedOperator(symbol.to_string())
    }

    pub fn missing_operand(symbol: &'static str) -> Self {
        ExecutionError::MissingOperand(symbol)
    }

    pub fn unknown_error_kind<S: ToString>(name: S) -> Self {
        ExecutionError::UnknownErrorKind(name.to_string())
    }
}
