//! Expression precedence chain.
//!
//! Lowest to highest: `OR`, `AND`, `NOT`, relations (non-associative),
//! `+ -`, `* /`, unary `+ -`, primaries. Binary operators are left
//! associative.

use aqa_ir::{
    BinaryOp, ExprId, ExprKind, Name, RelOp, Span, TokenKind, UnaryOp, FALSE_LITERAL,
    TRUE_LITERAL,
};
use aqa_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply parenthesised input does
    /// not overflow the stack.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_or())
            .map_err(|e| e.in_context(ErrorContext::Expression))
    }

    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.arena.span(left).merge(self.arena.span(right));
        self.alloc(ExprKind::Binary { op, left, right }, span)
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_and()?;
        while self.cursor.check(&TokenKind::Or) {
            self.cursor.advance();
            let right = self.parse_and()?;
            left = self.binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_not()?;
        while self.cursor.check(&TokenKind::And) {
            self.cursor.advance();
            let right = self.parse_not()?;
            left = self.binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<ExprId, ParseError> {
        if !self.cursor.check(&TokenKind::Not) {
            return self.parse_relation();
        }
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_not())?;
        let span = self.span_from(start);
        Ok(self.alloc(
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand,
            },
            span,
        ))
    }

    fn match_rel_op(&self) -> Option<RelOp> {
        match self.cursor.current_kind() {
            TokenKind::Eq => Some(RelOp::Eq),
            TokenKind::NotEq => Some(RelOp::NotEq),
            TokenKind::Lt => Some(RelOp::Lt),
            TokenKind::Gt => Some(RelOp::Gt),
            TokenKind::LtEq => Some(RelOp::LtEq),
            TokenKind::GtEq => Some(RelOp::GtEq),
            _ => None,
        }
    }

    fn parse_relation(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_additive()?;
        let Some(op) = self.match_rel_op() else {
            return Ok(left);
        };
        self.cursor.advance();
        let right = self.parse_additive()?;

        let span = self.arena.span(left).merge(self.arena.span(right));
        Ok(self.alloc(ExprKind::Relation { op, left, right }, span))
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_term()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn parse_term(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => UnaryOp::Sub,
            TokenKind::Plus => UnaryOp::Add,
            _ => return self.parse_primary(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = self.span_from(start);
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        match &token.kind {
            TokenKind::Number(text) => {
                self.cursor.advance();
                Ok(self.alloc(
                    ExprKind::Number {
                        significand: text.clone(),
                    },
                    token.span,
                ))
            }
            TokenKind::True | TokenKind::False => {
                let literal = if token.kind == TokenKind::True {
                    TRUE_LITERAL
                } else {
                    FALSE_LITERAL
                };
                self.cursor.advance();
                Ok(self.alloc(
                    ExprKind::Boolean {
                        significand: literal.into(),
                    },
                    token.span,
                ))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen, "`)`")?;
                let span = self.span_from(token.span);
                Ok(self.alloc(ExprKind::Bracket { inner }, span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                if self.cursor.check(&TokenKind::LParen) {
                    self.parse_call(name.clone(), token.span)
                        .map_err(|e| e.in_context(ErrorContext::Call))
                } else {
                    Ok(self.alloc(ExprKind::Variable { name: name.clone() }, token.span))
                }
            }
            _ => Err(self.cursor.unexpected("expression")),
        }
    }

    /// `IDENT '(' (IDENT (',' IDENT)*)? ')'`, with the name already consumed.
    fn parse_call(&mut self, name: Name, start: Span) -> Result<ExprId, ParseError> {
        self.cursor.advance();

        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            args.push(self.parse_argument()?);
            while self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
                args.push(self.parse_argument()?);
            }
        }
        self.cursor.expect(&TokenKind::RParen, "`,` or `)`")?;

        let args = self.fold_arguments(args);
        let span = self.span_from(start);
        Ok(self.alloc(ExprKind::Call { name, args }, span))
    }

    fn parse_argument(&mut self) -> Result<ExprId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.cursor.advance().span;
                Ok(self.alloc(ExprKind::Variable { name: name.clone() }, span))
            }
            TokenKind::Number(_)
            | TokenKind::True
            | TokenKind::False
            | TokenKind::LParen
            | TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::Not => Err(ParseError::new(
                ParseErrorKind::NonNameArgument,
                self.cursor.current_span(),
            )),
            _ => Err(self.cursor.unexpected("identifier")),
        }
    }

    /// One argument stays a `Variable`; more become a right-nested
    /// `Arguments` chain.
    fn fold_arguments(&mut self, args: Vec<ExprId>) -> Option<ExprId> {
        let mut rev = args.into_iter().rev();
        let mut acc = rev.next()?;
        for left in rev {
            let span = self.arena.span(left).merge(self.arena.span(acc));
            acc = self.alloc(ExprKind::Arguments { left, right: acc }, span);
        }
        Some(acc)
    }
}
