//! Evaluation errors and their constructors.
//!
//! Every failure the evaluator can report is an `EvalErrorKind`; the
//! constructors below are the only way the rest of the crate builds them,
//! so message wording lives in one place.

use aqa_ir::{NodeKind, Span};

use crate::Value;

/// Result of evaluating one node.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category. `Display` produces the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// A required child slot or property is absent or unusable.
    #[error("malformed {node}: {detail}")]
    MalformedNode { node: &'static str, detail: String },

    #[error("type mismatch: cannot apply {op} to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("operator {op} is not defined for {operand}")]
    InvalidOperator {
        op: &'static str,
        operand: &'static str,
    },

    #[error("relation {op} requires two numbers, got {left} and {right}")]
    NonNumericRelation {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("non-boolean condition: expected a boolean, got {got}")]
    NonBooleanCondition { got: &'static str },

    #[error("cannot reassign constant `{name}`")]
    ImmutableBinding { name: String },

    #[error("`{name}` is a subroutine, not a variable")]
    NotAVariable { name: String },

    #[error("`{name}` is not a subroutine")]
    NotASubroutine { name: String },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("subroutine `{name}` expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded { limit: usize },

    #[error("a parameter list cannot be evaluated on its own")]
    ParametersEvaluated,

    #[error("unknown instruction")]
    UnknownInstruction,
}

/// Evaluation error with the location of the innermost failing node.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a location unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Malformed trees

#[cold]
pub fn malformed(node: NodeKind, detail: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::MalformedNode {
        node: node.name(),
        detail: detail.into(),
    })
}

/// A required child slot is empty or points outside the arena.
#[cold]
pub fn missing_child(node: NodeKind, slot: &'static str) -> EvalError {
    malformed(node, format!("missing {slot}"))
}

#[cold]
pub fn missing_root() -> EvalError {
    EvalError::new(EvalErrorKind::MalformedNode {
        node: "program",
        detail: "missing root node".to_string(),
    })
}

#[cold]
pub fn parameters_evaluated() -> EvalError {
    EvalError::new(EvalErrorKind::ParametersEvaluated)
}

#[cold]
pub fn unknown_instruction() -> EvalError {
    EvalError::new(EvalErrorKind::UnknownInstruction)
}

// Operators

#[cold]
pub fn type_mismatch(op: &'static str, left: &'static str, right: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch { op, left, right })
}

#[cold]
pub fn invalid_operator(op: &'static str, operand: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidOperator { op, operand })
}

#[cold]
pub fn non_numeric_relation(
    op: &'static str,
    left: &'static str,
    right: &'static str,
) -> EvalError {
    EvalError::new(EvalErrorKind::NonNumericRelation { op, left, right })
}

#[cold]
pub fn non_boolean_condition(got: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NonBooleanCondition { got })
}

// Bindings

#[cold]
pub fn immutable_binding(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::ImmutableBinding {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotAVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_subroutine(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotASubroutine {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

// Calls

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::CallDepthExceeded { limit })
}
