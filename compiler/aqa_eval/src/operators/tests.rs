use aqa_ir::{BinaryOp, RelOp};
use proptest::prelude::*;

use super::*;
use crate::errors::undefined_variable;
use crate::EvalErrorKind;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn boolean(b: bool) -> Value {
    Value::Boolean(b)
}

mod arithmetic {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn number_ops() {
        assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Add).unwrap(), num(5.0));
        assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Sub).unwrap(), num(-1.0));
        assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Mul).unwrap(), num(6.0));
        assert_eq!(evaluate_binary(num(3.0), num(2.0), BinaryOp::Div).unwrap(), num(1.5));
        assert_eq!(evaluate_binary(num(7.0), num(3.0), BinaryOp::Nop).unwrap(), num(7.0));
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(
            evaluate_binary(num(1.0), num(0.0), BinaryOp::Div).unwrap(),
            num(f64::INFINITY)
        );
    }

    #[test]
    fn logical_op_on_numbers_is_invalid() {
        let err = evaluate_binary(num(1.0), num(2.0), BinaryOp::And).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::InvalidOperator {
                op: "AND",
                operand: "numbers"
            }
        );
    }
}

mod logic {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn boolean_ops() {
        assert_eq!(
            evaluate_binary(boolean(true), boolean(false), BinaryOp::And).unwrap(),
            boolean(false)
        );
        assert_eq!(
            evaluate_binary(boolean(true), boolean(false), BinaryOp::Or).unwrap(),
            boolean(true)
        );
        assert_eq!(
            evaluate_binary(boolean(false), boolean(true), BinaryOp::Nop).unwrap(),
            boolean(false)
        );
    }

    #[test]
    fn arithmetic_on_booleans_is_invalid() {
        let err = evaluate_binary(boolean(true), boolean(true), BinaryOp::Add).unwrap_err();
        assert_eq!(err.to_string(), "operator ADD is not defined for booleans");
    }
}

mod mismatches {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mixed_kinds() {
        let err = evaluate_binary(num(1.0), boolean(true), BinaryOp::Add).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                op: "ADD",
                left: "number",
                right: "boolean"
            }
        );
    }

    #[test]
    fn void_and_strings_are_rejected() {
        assert!(evaluate_binary(Value::Void, num(1.0), BinaryOp::Add).is_err());
        assert!(evaluate_binary(
            Value::String("a".into()),
            Value::String("b".into()),
            BinaryOp::Add
        )
        .is_err());
    }
}

mod relations {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_comparisons() {
        let cases = [
            (RelOp::Eq, 2.0, 2.0, true),
            (RelOp::Eq, 2.0, 3.0, false),
            (RelOp::NotEq, 2.0, 3.0, true),
            (RelOp::Lt, 2.0, 3.0, true),
            (RelOp::Gt, 2.0, 3.0, false),
            (RelOp::LtEq, 3.0, 3.0, true),
            (RelOp::GtEq, 2.0, 3.0, false),
        ];
        for (op, a, b, expected) in cases {
            assert_eq!(
                evaluate_relation(num(a), num(b), op).unwrap(),
                boolean(expected),
                "{a} {} {b}",
                op.as_symbol()
            );
        }
    }

    #[test]
    fn nan_compares_unequal() {
        let nan = num(f64::NAN);
        assert_eq!(evaluate_relation(nan.clone(), nan.clone(), RelOp::Eq).unwrap(), boolean(false));
        assert_eq!(evaluate_relation(nan.clone(), nan, RelOp::NotEq).unwrap(), boolean(true));
    }

    #[test]
    fn booleans_are_not_comparable() {
        let err = evaluate_relation(boolean(true), boolean(true), RelOp::Eq).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::NonNumericRelation {
                op: "EQ",
                left: "boolean",
                right: "boolean"
            }
        );
    }
}

fn any_plain_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        any::<bool>().prop_map(Value::Boolean),
        Just(Value::Void),
        "[a-z]{1,3}".prop_map(Value::String),
    ]
}

fn any_error() -> impl Strategy<Value = Value> {
    "[a-z]{1,4}".prop_map(|name| Value::Error(undefined_variable(&name)))
}

fn any_binary_op() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::And),
        Just(BinaryOp::Or),
        Just(BinaryOp::Nop),
    ]
}

fn any_rel_op() -> impl Strategy<Value = RelOp> {
    prop_oneof![
        Just(RelOp::Eq),
        Just(RelOp::NotEq),
        Just(RelOp::Lt),
        Just(RelOp::Gt),
        Just(RelOp::LtEq),
        Just(RelOp::GtEq),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn binary_left_error_wins(
        left in any_error(),
        right in prop_oneof![any_plain_value(), any_error()],
        op in any_binary_op(),
    ) {
        let Value::Error(expected) = left.clone() else { unreachable!() };
        prop_assert_eq!(evaluate_binary(left, right, op), Err(expected));
    }

    #[test]
    fn binary_right_error_propagates(
        left in any_plain_value(),
        right in any_error(),
        op in any_binary_op(),
    ) {
        let Value::Error(expected) = right.clone() else { unreachable!() };
        prop_assert_eq!(evaluate_binary(left, right, op), Err(expected));
    }

    #[test]
    fn relation_errors_propagate_leftmost(
        left in prop_oneof![any_plain_value(), any_error()],
        right in prop_oneof![any_plain_value(), any_error()],
        op in any_rel_op(),
    ) {
        let expected = match (&left, &right) {
            (Value::Error(e), _) | (_, Value::Error(e)) => Some(e.clone()),
            _ => None,
        };
        let result = evaluate_relation(left, right, op);
        if let Some(expected) = expected {
            prop_assert_eq!(result, Err(expected));
        }
    }

    #[test]
    fn number_results_never_error(a in -1.0e6..1.0e6f64, b in -1.0e6..1.0e6f64) {
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            prop_assert!(matches!(evaluate_binary(num(a), num(b), op), Ok(Value::Number(_))));
        }
        for op in [RelOp::Eq, RelOp::NotEq, RelOp::Lt, RelOp::Gt, RelOp::LtEq, RelOp::GtEq] {
            prop_assert!(matches!(evaluate_relation(num(a), num(b), op), Ok(Value::Boolean(_))));
        }
    }
}
