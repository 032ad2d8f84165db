use pretty_assertions::assert_eq;

use super::*;

fn var(value: f64, constant: bool) -> Binding {
    Binding::Variable {
        value: Value::Number(value),
        constant,
    }
}

#[test]
fn test_define_and_get() {
    let mut env = Environment::new();
    assert!(env.is_empty());
    env.define_variable(Name::from("x"), Value::Number(42.0), false);
    assert_eq!(env.get("x"), Some(&var(42.0, false)));
    assert!(env.contains("x"));
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_assign_mutable_and_unbound() {
    let mut env = Environment::new();
    assert_eq!(env.assign(&Name::from("x"), Value::Number(1.0), false), Ok(()));
    assert_eq!(env.assign(&Name::from("x"), Value::Number(2.0), false), Ok(()));
    assert_eq!(env.get("x"), Some(&var(2.0, false)));
}

#[test]
fn test_mutable_variable_can_become_constant() {
    let mut env = Environment::new();
    env.define_variable(Name::from("x"), Value::Number(1.0), false);
    assert_eq!(env.assign(&Name::from("x"), Value::Number(2.0), true), Ok(()));
    assert!(env.get("x").is_some_and(Binding::is_constant));
}

#[test]
fn test_assign_constant_refused() {
    let mut env = Environment::new();
    env.define_variable(Name::from("k"), Value::Number(5.0), true);
    assert_eq!(
        env.assign(&Name::from("k"), Value::Number(7.0), false),
        Err(AssignError::Immutable)
    );
    assert_eq!(env.get("k"), Some(&var(5.0, true)));
}

#[test]
fn test_assign_subroutine_refused() {
    let mut env = Environment::new();
    env.define_subroutine(Name::from("f"), Some(ExprId::new(0)), vec![], None);
    assert_eq!(
        env.assign(&Name::from("f"), Value::Number(7.0), false),
        Err(AssignError::Subroutine)
    );
    assert!(env.get("f").is_some_and(Binding::is_subroutine));
}

#[test]
fn test_restore_after_call_unmasks_parameters() {
    let mut caller = Environment::new();
    caller.define_variable(Name::from("a"), Value::Number(1.0), false);
    caller.define_variable(Name::from("g"), Value::Number(10.0), false);

    let mut frame = caller.clone();
    frame.define_variable(Name::from("a"), Value::Number(99.0), false);
    frame.define_variable(Name::from("b"), Value::Number(2.0), false);
    // body effects: one caller-visible change, one new name
    frame.define_variable(Name::from("g"), Value::Number(11.0), false);
    frame.define_variable(Name::from("t"), Value::Number(3.0), false);

    frame.restore_after_call(&caller, &[Name::from("a"), Name::from("b")]);

    assert_eq!(frame.get("a"), Some(&var(1.0, false)));
    assert_eq!(frame.get("b"), None);
    assert_eq!(frame.get("g"), Some(&var(11.0, false)));
    assert_eq!(frame.get("t"), Some(&var(3.0, false)));
}

#[test]
fn test_restore_brings_back_masked_constant() {
    let mut caller = Environment::new();
    caller.define_variable(Name::from("k"), Value::Number(5.0), true);

    let mut frame = caller.clone();
    frame.define_variable(Name::from("k"), Value::Number(1.0), false);
    frame.restore_after_call(&caller, &[Name::from("k")]);

    assert_eq!(frame, caller);
}

#[test]
fn test_snapshot_is_sorted() {
    let mut env = Environment::new();
    for name in ["zeta", "alpha", "mid"] {
        env.define_variable(Name::from(name), Value::Boolean(true), false);
    }
    let names: Vec<&str> = env.snapshot().into_iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_binding_display() {
    assert_eq!(var(3.0, false).to_string(), "3");
    assert_eq!(var(3.0, true).to_string(), "3 (constant)");
    let sub = Binding::Subroutine {
        body: Some(ExprId::new(0)),
        params: vec![Name::from("a"), Name::from("b")],
        ret: None,
    };
    assert_eq!(sub.to_string(), "SUBROUTINE(a, b)");
}
