use pretty_assertions::assert_eq;

use super::*;
use crate::{BinaryOp, Name, RelOp, Span};

fn num(arena: &mut ExprArena, text: &str) -> ExprId {
    arena.alloc(
        ExprKind::Number {
            significand: text.into(),
        },
        Span::DUMMY,
    )
}

fn var(arena: &mut ExprArena, name: &str) -> ExprId {
    arena.alloc(ExprKind::Variable { name: name.into() }, Span::DUMMY)
}

#[test]
fn renders_assignments_and_sequences() {
    let mut arena = ExprArena::new();
    let one = num(&mut arena, "1");
    let two = num(&mut arena, "2");
    let sum = arena.alloc(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: one,
            right: two,
        },
        Span::DUMMY,
    );
    let x = arena.alloc(
        ExprKind::Assignment {
            name: "x".into(),
            constant: false,
            value: sum,
        },
        Span::DUMMY,
    );
    let three = num(&mut arena, "3");
    let k = arena.alloc(
        ExprKind::Assignment {
            name: Name::from("k"),
            constant: true,
            value: three,
        },
        Span::DUMMY,
    );
    let seq = arena.alloc(ExprKind::Sequence { left: x, right: k }, Span::DUMMY);

    assert_eq!(render(&arena, seq), "[x: ADD(1, 2), k{3}]");
}

#[test]
fn brackets_are_transparent() {
    let mut arena = ExprArena::new();
    let x = var(&mut arena, "x");
    let inner = arena.alloc(ExprKind::Bracket { inner: x }, Span::DUMMY);
    let three = num(&mut arena, "3");
    let rel = arena.alloc(
        ExprKind::Relation {
            op: RelOp::Lt,
            left: inner,
            right: three,
        },
        Span::DUMMY,
    );
    assert_eq!(render(&arena, rel), "LT(x, 3)");
}

#[test]
fn renders_subroutine_and_call() {
    let mut arena = ExprArena::new();
    let b = arena.alloc(
        ExprKind::Parameters {
            name: "b".into(),
            next: None,
        },
        Span::DUMMY,
    );
    let params = arena.alloc(
        ExprKind::Parameters {
            name: "a".into(),
            next: Some(b),
        },
        Span::DUMMY,
    );
    let a = var(&mut arena, "a");
    let body = arena.alloc(ExprKind::Output { value: a }, Span::DUMMY);
    let ret = var(&mut arena, "b");
    let sub = arena.alloc(
        ExprKind::Subroutine {
            name: "f".into(),
            params: Some(params),
            body: Some(body),
            ret: Some(ret),
        },
        Span::DUMMY,
    );
    assert_eq!(render(&arena, sub), "SUB f(a, b)(OUTPUT(a), RETURN b)");

    let x = var(&mut arena, "x");
    let y = var(&mut arena, "y");
    let args = arena.alloc(ExprKind::Arguments { left: x, right: y }, Span::DUMMY);
    let call = arena.alloc(
        ExprKind::Call {
            name: "f".into(),
            args: Some(args),
        },
        Span::DUMMY,
    );
    assert_eq!(render(&arena, call), "CALL f(x, y)");
}

#[test]
fn missing_slots_render_as_question_marks() {
    let mut arena = ExprArena::new();
    let out = arena.alloc(
        ExprKind::Output {
            value: ExprId::INVALID,
        },
        Span::DUMMY,
    );
    let empty = arena.alloc(
        ExprKind::Number {
            significand: "".into(),
        },
        Span::DUMMY,
    );
    assert_eq!(render(&arena, out), "OUTPUT(?)");
    assert_eq!(render(&arena, empty), "NaN");
    assert_eq!(render(&arena, ExprId::new(99)), "?");
}

#[test]
fn renders_return_only_subroutine() {
    let mut arena = ExprArena::new();
    let params = arena.alloc(
        ExprKind::Parameters {
            name: "a".into(),
            next: None,
        },
        Span::DUMMY,
    );
    let a = var(&mut arena, "a");
    let sub = arena.alloc(
        ExprKind::Subroutine {
            name: "id".into(),
            params: Some(params),
            body: None,
            ret: Some(a),
        },
        Span::DUMMY,
    );
    assert_eq!(render(&arena, sub), "SUB id(a)(RETURN a)");
}

#[test]
fn renders_very_deep_trees() {
    let mut arena = ExprArena::new();
    let mut acc = num(&mut arena, "1");
    for _ in 0..100_000 {
        acc = arena.alloc(
            ExprKind::Unary {
                op: crate::UnaryOp::Sub,
                operand: acc,
            },
            Span::DUMMY,
        );
    }
    let rendered = render(&arena, acc);
    assert!(rendered.starts_with("SUB(SUB("));
    assert_eq!(rendered.matches("SUB(").count(), 100_000);
    assert!(rendered.ends_with("(1)))"));
}
