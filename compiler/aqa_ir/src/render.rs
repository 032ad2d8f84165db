//! One-line textual rendering of a syntax tree.
//!
//! Used by `aqa parse` and the REPL to show what the parser built:
//!
//! ```text
//! x <- 1 + 2          =>  x: ADD(1, 2)
//! CONSTANT k <- 3     =>  k{3}
//! a <- 1 \n b <- a    =>  [a: 1, b: a]
//! WHILE x < 3 ...     =>  WHILE(LT(x, 3), x: ADD(x, 1))
//! ```
//!
//! Brackets are transparent. Slots that point outside the arena render
//! as `?` so malformed trees can still be inspected. Each level runs under
//! `ensure_sufficient_stack`, so trees the parser accepts always render.

use std::fmt;

use aqa_stack::ensure_sufficient_stack;

use crate::{ConditionalStyle, ExprArena, ExprId, ExprKind, LoopStyle};

/// Render the tree rooted at `root` to a string.
pub fn render(arena: &ExprArena, root: ExprId) -> String {
    Rendered { arena, id: root }.to_string()
}

/// `Display` adapter for a subtree.
#[derive(Clone, Copy)]
pub struct Rendered<'a> {
    pub arena: &'a ExprArena,
    pub id: ExprId,
}

impl<'a> Rendered<'a> {
    fn child(&self, id: ExprId) -> Rendered<'a> {
        Rendered {
            arena: self.arena,
            id,
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(kind) = self.arena.kind(self.id) else {
            return f.write_str("?");
        };

        match kind {
            ExprKind::Number { significand } => {
                if significand.is_empty() {
                    f.write_str("NaN")
                } else {
                    f.write_str(significand)
                }
            }
            ExprKind::Boolean { significand } => f.write_str(significand),
            ExprKind::Variable { name } => write!(f, "{name}"),
            ExprKind::Assignment {
                name,
                constant,
                value,
            } => {
                if *constant {
                    write!(f, "{name}{{{}}}", self.child(*value))
                } else {
                    write!(f, "{name}: {}", self.child(*value))
                }
            }
            ExprKind::Sequence { left, right } => {
                write!(f, "[{}, {}]", self.child(*left), self.child(*right))
            }
            ExprKind::Bracket { inner } => write!(f, "{}", self.child(*inner)),
            ExprKind::Binary { op, left, right } => write!(
                f,
                "{}({}, {})",
                op.mnemonic(),
                self.child(*left),
                self.child(*right)
            ),
            ExprKind::Relation { op, left, right } => write!(
                f,
                "{}({}, {})",
                op.mnemonic(),
                self.child(*left),
                self.child(*right)
            ),
            ExprKind::Unary { op, operand } => {
                write!(f, "{}({})", op.mnemonic(), self.child(*operand))
            }
            ExprKind::Output { value } => write!(f, "OUTPUT({})", self.child(*value)),
            ExprKind::Conditional {
                style,
                cond,
                then_branch,
                else_branch,
            } => {
                write!(f, "IF({}, {}", self.child(*cond), self.child(*then_branch))?;
                match (style, else_branch) {
                    (ConditionalStyle::IfThenElse, Some(other)) => {
                        write!(f, ", {})", self.child(*other))
                    }
                    (ConditionalStyle::IfThenElse, None) => f.write_str(", ?)"),
                    (ConditionalStyle::IfThen, _) => f.write_str(")"),
                }
            }
            ExprKind::Loop { style, cond, body } => match style {
                LoopStyle::While => {
                    write!(f, "WHILE({}, {})", self.child(*cond), self.child(*body))
                }
                LoopStyle::Repeat => {
                    write!(f, "REPEAT({}, {})", self.child(*body), self.child(*cond))
                }
            },
            ExprKind::Subroutine {
                name,
                params,
                body,
                ret,
            } => {
                write!(f, "SUB {name}(")?;
                if let Some(params) = params {
                    write!(f, "{}", self.child(*params))?;
                }
                f.write_str(")(")?;
                if let Some(body) = body {
                    write!(f, "{}", self.child(*body))?;
                    if ret.is_some() {
                        f.write_str(", ")?;
                    }
                }
                if let Some(ret) = ret {
                    write!(f, "RETURN {}", self.child(*ret))?;
                }
                f.write_str(")")
            }
            ExprKind::Call { name, args } => {
                write!(f, "CALL {name}(")?;
                if let Some(args) = args {
                    write!(f, "{}", self.child(*args))?;
                }
                f.write_str(")")
            }
            ExprKind::Arguments { left, right } => {
                write!(f, "{}, {}", self.child(*left), self.child(*right))
            }
            ExprKind::Parameters { name, next } => {
                write!(f, "{name}")?;
                if let Some(next) = next {
                    write!(f, ", {}", self.child(*next))?;
                }
                Ok(())
            }
            ExprKind::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_node(f))
    }
}

#[cfg(test)]
mod tests;
