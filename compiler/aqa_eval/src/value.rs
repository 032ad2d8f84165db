//! Runtime values.

use std::fmt;

use crate::EvalError;

/// A runtime value.
///
/// `Error` is an ordinary value: the public entry point reports failure
/// through it, and the operator functions propagate it when they find
/// one among their operands.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    /// Joined argument names, produced only by argument lists.
    String(String),
    /// Result of a call to a subroutine without a return expression.
    Void,
    Error(EvalError),
}

impl Value {
    /// Value of statements evaluated for their effect on the environment.
    pub const SENTINEL: Value = Value::Number(0.0);

    /// Name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Void => "void",
            Value::Error(_) => "error",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Turn an `Error` value back into an `Err`.
    pub fn into_result(self) -> Result<Value, EvalError> {
        match self {
            Value::Error(err) => Err(err),
            other => Ok(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
            Value::String(s) => f.write_str(s),
            Value::Void => f.write_str("Void"),
            Value::Error(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(test)]
mod tests;
