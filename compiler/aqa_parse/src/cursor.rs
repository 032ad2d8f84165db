//! Token navigation for the parser.

use aqa_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::{ParseError, ParseErrorKind};

/// Fallback for an empty token list; `lex` always appends `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor over a token list. Never advances past the final `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.as_slice().last())
            .unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    pub fn peek_kind(&self) -> &'a TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(&EOF_TOKEN.kind, |token| &token.kind)
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).map_or(Span::DUMMY, |t| t.span),
            None => Span::point(self.current_span().start),
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Compare by variant only, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tracing::trace!(token = ?token.kind, pos = self.pos, "advance");
        token
    }

    /// Consume `kind` or fail with "expected {expected}".
    pub fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name.clone(), span))
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Skip newlines, returning how many were consumed.
    pub fn skip_newlines(&mut self) -> usize {
        let mut skipped = 0;
        while self.check(&TokenKind::Newline) {
            self.advance();
            skipped += 1;
        }
        skipped
    }

    /// Build an error for the current token. Lexer error tokens are
    /// reported as unrecognised input rather than an unexpected token.
    #[cold]
    #[inline(never)]
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        let kind = match &token.kind {
            TokenKind::Error => ParseErrorKind::UnrecognisedInput,
            found => ParseErrorKind::UnexpectedToken {
                expected,
                found: found.clone(),
            },
        };
        ParseError::new(kind, token.span)
    }
}
