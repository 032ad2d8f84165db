//! Syntax tree for the pseudocode language.
//!
//! Nodes are produced by the parser (or built directly in tests) and are
//! never mutated afterwards.

mod expr;
mod operators;

pub use expr::{Expr, ExprKind, NodeKind, FALSE_LITERAL, TRUE_LITERAL};
pub use operators::{BinaryOp, ConditionalStyle, LoopStyle, RelOp, UnaryOp};

#[cfg(test)]
mod tests;
