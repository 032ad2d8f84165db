//! Contiguous storage for syntax tree nodes.

use crate::{Expr, ExprId, ExprKind, Span};

/// Owns every node of one parsed program.
///
/// Nodes are appended during parsing and only read afterwards. Lookups
/// with an id the arena never issued (including `ExprId::INVALID`)
/// return `None` rather than panicking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(capacity),
        }
    }

    /// Append a node and return its id.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .unwrap_or_else(|| panic!("expression arena exceeded {} nodes", u32::MAX - 1));
        self.exprs.push(Expr::new(kind, span));
        ExprId::new(index)
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> Option<&ExprKind> {
        self.get(id).map(|expr| &expr.kind)
    }

    /// Span of `id`, or `Span::DUMMY` for ids not in this arena.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).map_or(Span::DUMMY, |expr| expr.span)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
