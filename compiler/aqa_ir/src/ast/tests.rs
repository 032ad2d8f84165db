use super::*;
use crate::{ExprArena, ExprId, Span};

#[test]
fn arena_round_trips_nodes() {
    let mut arena = ExprArena::new();
    let one = arena.alloc(
        ExprKind::Number {
            significand: "1".into(),
        },
        Span::new(5, 6),
    );
    let assign = arena.alloc(
        ExprKind::Assignment {
            name: "x".into(),
            constant: false,
            value: one,
        },
        Span::new(0, 6),
    );

    assert_eq!(arena.len(), 2);
    assert_eq!(arena.span(one), Span::new(5, 6));
    assert!(matches!(
        arena.kind(assign),
        Some(ExprKind::Assignment { value, .. }) if *value == one
    ));
}

#[test]
fn arena_lookup_of_invalid_id_is_none() {
    let arena = ExprArena::new();
    assert!(arena.get(ExprId::INVALID).is_none());
    assert!(arena.get(ExprId::new(0)).is_none());
    assert_eq!(arena.span(ExprId::INVALID), Span::DUMMY);
}

#[test]
fn node_kind_classification() {
    let kind = ExprKind::Binary {
        op: BinaryOp::Add,
        left: ExprId::INVALID,
        right: ExprId::INVALID,
    };
    assert_eq!(kind.node_kind(), NodeKind::BinaryOperation);
    assert_eq!(ExprKind::Unknown.node_kind().name(), "unknown instruction");
}

#[test]
fn operator_classes() {
    assert!(BinaryOp::Div.is_arithmetic());
    assert!(!BinaryOp::Div.is_logical());
    assert!(BinaryOp::Or.is_logical());
    assert!(!BinaryOp::Nop.is_arithmetic() && !BinaryOp::Nop.is_logical());
    assert_eq!(RelOp::LtEq.mnemonic(), "LEQ");
    assert_eq!(UnaryOp::Sub.as_symbol(), "-");
}
