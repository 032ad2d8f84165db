use pretty_assertions::assert_eq;

use super::*;
use crate::errors::undefined_variable;

#[test]
fn numbers_display_shortest_form() {
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(-0.125).to_string(), "-0.125");
}

#[test]
fn other_values_display() {
    assert_eq!(Value::Boolean(true).to_string(), "True");
    assert_eq!(Value::Boolean(false).to_string(), "False");
    assert_eq!(Value::String("a, b".into()).to_string(), "a, b");
    assert_eq!(Value::Void.to_string(), "Void");
    assert_eq!(
        Value::Error(undefined_variable("x")).to_string(),
        "undefined variable `x`"
    );
}

#[test]
fn sentinel_is_zero() {
    assert_eq!(Value::SENTINEL, Value::Number(0.0));
}

#[test]
fn into_result_splits_errors() {
    assert_eq!(Value::Number(1.0).into_result(), Ok(Value::Number(1.0)));
    assert_eq!(
        Value::Error(undefined_variable("y")).into_result(),
        Err(undefined_variable("y"))
    );
}

#[test]
fn classification() {
    assert!(Value::Error(undefined_variable("x")).is_error());
    assert!(!Value::Void.is_error());
    assert_eq!(Value::Number(4.0).as_number(), Some(4.0));
    assert_eq!(Value::Boolean(true).as_number(), None);
    assert_eq!(Value::Boolean(true).as_bool(), Some(true));
    assert_eq!(Value::Void.type_name(), "void");
}
