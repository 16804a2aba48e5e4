use crate::ExecutionError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The closed set of formula errors shared by every operator.
///
/// Handlers hand these back inside [`crate::Value::Error`]; they are never
/// raised. Rendering uses the familiar spreadsheet spelling, so
/// `ErrorKind::DivZero` displays as `#DIV/0!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    #[cfg_attr(feature = "serde", serde(rename = "#ERROR!"))]
    Error,
    #[cfg_attr(feature = "serde", serde(rename = "#DIV/0!"))]
    DivZero,
    #[cfg_attr(feature = "serde", serde(rename = "#NAME?"))]
    Name,
    #[cfg_attr(feature = "serde", serde(rename = "#N/A"))]
    NotAvailable,
    #[cfg_attr(feature = "serde", serde(rename = "#NULL!"))]
    Null,
    #[cfg_attr(feature = "serde", serde(rename = "#NUM!"))]
    Num,
    #[cfg_attr(feature = "serde", serde(rename = "#REF!"))]
    Ref,
    #[cfg_attr(feature = "serde", serde(rename = "#VALUE!"))]
    Value,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Error,
        ErrorKind::DivZero,
        ErrorKind::Name,
        ErrorKind::NotAvailable,
        ErrorKind::Null,
        ErrorKind::Num,
        ErrorKind::Ref,
        ErrorKind::Value,
    ];

    /// The bare identifier, e.g. `DIV/0` or `VALUE`.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Error => "ERROR",
            ErrorKind::DivZero => "DIV/0",
            ErrorKind::Name => "NAME",
            ErrorKind::NotAvailable => "N/A",
            ErrorKind::Null => "NULL",
            ErrorKind::Num => "NUM",
            ErrorKind::Ref => "REF",
            ErrorKind::Value => "VALUE",
        }
    }

    /// The rendered form, e.g. `#DIV/0!`.
    pub fn rendered(&self) -> &'static str {
        match self {
            ErrorKind::Error => "#ERROR!",
            ErrorKind::DivZero => "#DIV/0!",
            ErrorKind::Name => "#NAME?",
            ErrorKind::NotAvailable => "#N/A",
            ErrorKind::Null => "#NULL!",
            ErrorKind::Num => "#NUM!",
            ErrorKind::Ref => "#REF!",
            ErrorKind::Value => "#VALUE!",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered())
    }
}

impl FromStr for ErrorKind {
    type Err = ExecutionError;

    /// Accepts either spelling: `VALUE` or `#VALUE!`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ErrorKind::ALL
            .iter()
            .find(|kind| kind.code() == s || kind.rendered() == s)
            .copied()
            .ok_or_else(|| ExecutionError::unknown_error_kind(s))
    }
}
