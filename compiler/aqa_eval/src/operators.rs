//! Binary and relational operator implementations.
//!
//! The value set is fixed, so dispatch is a direct match on the operand
//! pair. Operands that are already `Value::Error` propagate, left first,
//! before any kind check.

use std::cmp::Ordering;

use aqa_ir::{BinaryOp, RelOp};

use crate::errors::{invalid_operator, non_numeric_relation, type_mismatch};
use crate::{EvalResult, Value};

/// Evaluate a binary arithmetic or logical operation.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let (left, right) = propagate_errors(left, right)?;
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Boolean(a), Value::Boolean(b)) => eval_bool_binary(*a, *b, op),
        _ => Err(type_mismatch(
            op.mnemonic(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Evaluate a relation. Both operands must be numbers.
pub fn evaluate_relation(left: Value, right: Value, op: RelOp) -> EvalResult {
    let (left, right) = propagate_errors(left, right)?;
    let (Value::Number(a), Value::Number(b)) = (&left, &right) else {
        return Err(non_numeric_relation(
            op.mnemonic(),
            left.type_name(),
            right.type_name(),
        ));
    };

    // partial_cmp keeps IEEE 754 semantics: every comparison with NaN
    // other than NEQ is false.
    let ordering = a.partial_cmp(b);
    let result = match op {
        RelOp::Eq => ordering == Some(Ordering::Equal),
        RelOp::NotEq => ordering != Some(Ordering::Equal),
        RelOp::Lt => ordering == Some(Ordering::Less),
        RelOp::Gt => ordering == Some(Ordering::Greater),
        RelOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        RelOp::GtEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
    };
    Ok(Value::Boolean(result))
}

/// Return the leftmost `Error` operand, if any.
fn propagate_errors(left: Value, right: Value) -> Result<(Value, Value), crate::EvalError> {
    let left = left.into_result()?;
    let right = right.into_result()?;
    Ok((left, right))
}

/// Arithmetic on numbers. Division follows IEEE 754, so dividing by
/// zero yields an infinity or NaN rather than an error.
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Number(a + b)),
        BinaryOp::Sub => Ok(Value::Number(a - b)),
        BinaryOp::Mul => Ok(Value::Number(a * b)),
        BinaryOp::Div => Ok(Value::Number(a / b)),
        BinaryOp::Nop => Ok(Value::Number(a)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_operator(op.mnemonic(), "numbers")),
    }
}

/// Logic on booleans. Both operands are already evaluated, so there is
/// no short-circuiting.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Boolean(a && b)),
        BinaryOp::Or => Ok(Value::Boolean(a || b)),
        BinaryOp::Nop => Ok(Value::Boolean(a)),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            Err(invalid_operator(op.mnemonic(), "booleans"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
