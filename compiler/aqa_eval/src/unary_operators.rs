//! Unary operator implementations for the evaluator.

use aqa_ir::UnaryOp;

use crate::errors::invalid_operator;
use crate::{EvalResult, Value};

/// Evaluate a unary operation. An `Error` operand propagates unchanged.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value.into_result()?, op) {
        (Value::Number(n), UnaryOp::Sub) => Ok(Value::Number(-n)),
        (Value::Number(n), UnaryOp::Add | UnaryOp::Nop) => Ok(Value::Number(n)),
        (Value::Boolean(b), UnaryOp::Not) => Ok(Value::Boolean(!b)),
        (Value::Boolean(b), UnaryOp::Nop) => Ok(Value::Boolean(b)),
        (other, op) => Err(invalid_unary_op(&other, op)),
    }
}

#[cold]
fn invalid_unary_op(value: &Value, op: UnaryOp) -> crate::EvalError {
    let operand = match value {
        Value::Number(_) => "numbers",
        Value::Boolean(_) => "booleans",
        Value::String(_) => "strings",
        Value::Void => "void",
        Value::Error(_) => "errors",
    };
    invalid_operator(op.mnemonic(), operand)
}
