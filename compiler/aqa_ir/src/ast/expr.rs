//! Syntax tree nodes.

use std::fmt;

use super::operators::{BinaryOp, ConditionalStyle, LoopStyle, RelOp, UnaryOp};
use crate::{ExprId, Name, Span, Spanned};

/// Spelling of the true literal. Boolean significands are compared
/// against it; every other spelling reads as false.
pub const TRUE_LITERAL: &str = "True";

/// Spelling of the false literal.
pub const FALSE_LITERAL: &str = "False";

/// A syntax tree node: its variant plus where it came from.
#[derive(Clone, Eq, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Node variants.
///
/// Required children are plain `ExprId`s and may be `ExprId::INVALID` when
/// the producer had nothing to put there; optional children are
/// `Option<ExprId>`. Names and literal text may be empty for the same
/// reason. The evaluator reports all of these as malformed nodes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Two statements run in order.
    Sequence { left: ExprId, right: ExprId },

    /// `name <- value`, or `CONSTANT name <- value` when `constant`.
    Assignment {
        name: Name,
        constant: bool,
        value: ExprId,
    },

    /// Subroutine definition. `params` heads a `Parameters` chain; `body`
    /// is absent when the subroutine is only a `RETURN`.
    Subroutine {
        name: Name,
        params: Option<ExprId>,
        body: Option<ExprId>,
        ret: Option<ExprId>,
    },

    /// Subroutine call. `args` is a `Variable` or an `Arguments` chain.
    Call { name: Name, args: Option<ExprId> },

    /// `IF cond THEN .. (ELSE ..) ENDIF`
    Conditional {
        style: ConditionalStyle,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `WHILE cond .. ENDWHILE` or `REPEAT .. UNTIL cond`
    Loop {
        style: LoopStyle,
        cond: ExprId,
        body: ExprId,
    },

    Relation {
        op: RelOp,
        left: ExprId,
        right: ExprId,
    },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    Unary { op: UnaryOp, operand: ExprId },

    /// `OUTPUT value`
    Output { value: ExprId },

    /// Call argument list link.
    Arguments { left: ExprId, right: ExprId },

    /// Formal parameter list link.
    Parameters { name: Name, next: Option<ExprId> },

    /// Parenthesised expression.
    Bracket { inner: ExprId },

    Variable { name: Name },

    /// Numeric literal, kept as its source text.
    Number { significand: Box<str> },

    /// Boolean literal, kept as its source text.
    Boolean { significand: Box<str> },

    /// Anything the tree producer could not classify.
    Unknown,
}

impl ExprKind {
    /// Classification of this node.
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Self::Sequence { .. } => NodeKind::Sequence,
            Self::Assignment { .. } => NodeKind::Assignment,
            Self::Subroutine { .. } => NodeKind::Subroutine,
            Self::Call { .. } => NodeKind::Call,
            Self::Conditional { .. } => NodeKind::Conditional,
            Self::Loop { .. } => NodeKind::Loop,
            Self::Relation { .. } => NodeKind::Relation,
            Self::Binary { .. } => NodeKind::BinaryOperation,
            Self::Unary { .. } => NodeKind::UnaryOperation,
            Self::Output { .. } => NodeKind::Output,
            Self::Arguments { .. } => NodeKind::Arguments,
            Self::Parameters { .. } => NodeKind::Parameters,
            Self::Bracket { .. } => NodeKind::Bracket,
            Self::Variable { .. } => NodeKind::Variable,
            Self::Number { .. } => NodeKind::Number,
            Self::Boolean { .. } => NodeKind::Boolean,
            Self::Unknown => NodeKind::Unknown,
        }
    }
}

/// Fieldless node classification, for messages and dispatch tables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Sequence,
    Assignment,
    Subroutine,
    Call,
    Conditional,
    Loop,
    Relation,
    BinaryOperation,
    UnaryOperation,
    Output,
    Arguments,
    Parameters,
    Bracket,
    Variable,
    Number,
    Boolean,
    Unknown,
}

impl NodeKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Assignment => "assignment",
            Self::Subroutine => "subroutine definition",
            Self::Call => "call",
            Self::Conditional => "conditional",
            Self::Loop => "loop",
            Self::Relation => "relation",
            Self::BinaryOperation => "binary operation",
            Self::UnaryOperation => "unary operation",
            Self::Output => "output",
            Self::Arguments => "argument list",
            Self::Parameters => "parameter list",
            Self::Bracket => "bracket",
            Self::Variable => "variable access",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Unknown => "unknown instruction",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
