//! AQA IR - syntax tree types shared by every stage.
//!
//! - Spans for source locations
//! - Names for identifiers
//! - Tokens and `TokenList` for lexer output
//! - Flat syntax tree (`ExprKind` nodes in an `ExprArena`, linked by `ExprId`)
//! - One-line tree rendering for diagnostics
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Absent is explicit**: a required child that the producer could not
//!   supply is `ExprId::INVALID`, optional children are `Option<ExprId>`
//! - **Immutable once built**: the evaluator only reads the arena

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod name;
pub mod render;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, ConditionalStyle, Expr, ExprKind, LoopStyle, NodeKind, RelOp, UnaryOp,
    FALSE_LITERAL, TRUE_LITERAL,
};
pub use expr_id::ExprId;
pub use name::Name;
pub use span::{LineCol, Span, SpanError};
pub use token::{Token, TokenKind, TokenList};

/// Trait for types that carry a source location.
pub trait Spanned {
    fn span(&self) -> Span;
}
