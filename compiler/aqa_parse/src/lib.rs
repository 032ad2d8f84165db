//! Recursive descent parser for AQA pseudocode.
//!
//! Produces a flat syntax tree in an `ExprArena`. The parser stops at the
//! first error; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use aqa_ir::{ExprArena, ExprId, ExprKind, Span, TokenList};

/// A successfully parsed program.
#[derive(Debug)]
pub struct ParsedProgram {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    /// Nesting depth of statement blocks; subroutines are only legal at 0.
    block_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(tokens.len()),
            block_depth: 0,
        }
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> Result<ParsedProgram, ParseError> {
        let root = self
            .parse_top_level()
            .map_err(|e| e.in_context(ErrorContext::Program))?;
        Ok(ParsedProgram {
            arena: self.arena,
            root,
        })
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc(kind, span)
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}

/// Lex and parse `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParsedProgram, ParseError> {
    let tokens = aqa_lexer::lex(source);
    parse_tokens(&tokens)
}

/// Parse an already-lexed token list.
pub fn parse_tokens(tokens: &TokenList) -> Result<ParsedProgram, ParseError> {
    let result = Parser::new(tokens).parse_program();
    if let Err(err) = &result {
        tracing::debug!(error = %err.message(), span = ?err.span, "parse failed");
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
