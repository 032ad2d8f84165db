//! Statements, blocks and the program itself.
//!
//! A statement list folds into a right-nested `Sequence` chain, so
//! `a`, `b`, `c` becomes `[a, [b, c]]`.

use aqa_ir::{ConditionalStyle, ExprId, ExprKind, LoopStyle, TokenKind};

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `program := NL* stmt (NL+ stmt)* NL* EOF`
    pub(crate) fn parse_top_level(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.skip_newlines();
        if self.cursor.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyProgram,
                self.cursor.current_span(),
            ));
        }

        let mut stmts = Vec::new();
        loop {
            stmts.push(self.parse_stmt()?);
            if self.cursor.is_at_end() {
                break;
            }
            self.expect_separator()?;
            if self.cursor.is_at_end() {
                break;
            }
        }
        Ok(self.fold_sequence(stmts))
    }

    /// A non-empty statement list ending at a block-closing keyword.
    fn parse_block(&mut self, construct: &'static str) -> Result<ExprId, ParseError> {
        self.cursor.skip_newlines();
        if self.cursor.current_kind().ends_block() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyBlock { construct },
                self.cursor.current_span(),
            ));
        }

        self.block_depth += 1;
        let result = self.parse_block_stmts();
        self.block_depth -= 1;
        result
    }

    fn parse_block_stmts(&mut self) -> Result<ExprId, ParseError> {
        let mut stmts = Vec::new();
        loop {
            stmts.push(self.parse_stmt()?);
            if self.cursor.current_kind().ends_block() {
                break;
            }
            self.expect_separator()?;
            if self.cursor.current_kind().ends_block() {
                break;
            }
        }
        Ok(self.fold_sequence(stmts))
    }

    /// One or more newlines.
    fn expect_separator(&mut self) -> Result<(), ParseError> {
        if self.cursor.skip_newlines() == 0 {
            return Err(self.cursor.unexpected("newline"));
        }
        Ok(())
    }

    fn fold_sequence(&mut self, stmts: Vec<ExprId>) -> ExprId {
        let mut rev = stmts.into_iter().rev();
        let Some(mut acc) = rev.next() else {
            return ExprId::INVALID;
        };
        for left in rev {
            let span = self.arena.span(left).merge(self.arena.span(acc));
            acc = self.alloc(ExprKind::Sequence { left, right: acc }, span);
        }
        acc
    }

    fn parse_stmt(&mut self) -> Result<ExprId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Constant => self
                .parse_assignment(true)
                .map_err(|e| e.in_context(ErrorContext::Assignment)),
            TokenKind::Ident(_) if matches!(self.cursor.peek_kind(), TokenKind::Arrow) => self
                .parse_assignment(false)
                .map_err(|e| e.in_context(ErrorContext::Assignment)),
            TokenKind::If => self
                .parse_conditional()
                .map_err(|e| e.in_context(ErrorContext::Conditional)),
            TokenKind::While => self
                .parse_while()
                .map_err(|e| e.in_context(ErrorContext::WhileLoop)),
            TokenKind::Repeat => self
                .parse_repeat()
                .map_err(|e| e.in_context(ErrorContext::RepeatLoop)),
            TokenKind::Subroutine => self
                .parse_subroutine()
                .map_err(|e| e.in_context(ErrorContext::Subroutine)),
            TokenKind::Output => self
                .parse_output()
                .map_err(|e| e.in_context(ErrorContext::Output)),
            _ => self.parse_expr(),
        }
    }

    /// `'CONSTANT'? IDENT '<-' expr`
    fn parse_assignment(&mut self, constant: bool) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        if constant {
            self.cursor.advance();
        }
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::Arrow, "`<-`")?;
        let value = self.parse_expr()?;

        let span = self.span_from(start);
        Ok(self.alloc(
            ExprKind::Assignment {
                name,
                constant,
                value,
            },
            span,
        ))
    }

    /// `'IF' expr 'THEN' block ('ELSE' block)? 'ENDIF'`
    fn parse_conditional(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_expr()?;
        self.cursor.expect(&TokenKind::Then, "THEN")?;
        let then_branch = self.parse_block("the THEN branch")?;

        let else_branch = if self.cursor.check(&TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_block("the ELSE branch")?)
        } else {
            None
        };
        self.cursor.expect(&TokenKind::EndIf, "ENDIF")?;

        let style = if else_branch.is_some() {
            ConditionalStyle::IfThenElse
        } else {
            ConditionalStyle::IfThen
        };
        let span = self.span_from(start);
        Ok(self.alloc(
            ExprKind::Conditional {
                style,
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// `'WHILE' expr block 'ENDWHILE'`
    fn parse_while(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_expr()?;
        let body = self.parse_block("the WHILE loop")?;
        self.cursor.expect(&TokenKind::EndWhile, "ENDWHILE")?;

        let span = self.span_from(start);
        Ok(self.alloc(
            ExprKind::Loop {
                style: LoopStyle::While,
                cond,
                body,
            },
            span,
        ))
    }

    /// `'REPEAT' block 'UNTIL' expr`
    fn parse_repeat(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let body = self.parse_block("the REPEAT loop")?;
        self.cursor.expect(&TokenKind::Until, "UNTIL")?;
        let cond = self.parse_expr()?;

        let span = self.span_from(start);
        Ok(self.alloc(
            ExprKind::Loop {
                style: LoopStyle::Repeat,
                cond,
                body,
            },
            span,
        ))
    }

    /// `'SUBROUTINE' IDENT '(' params? ')' block? ('RETURN' expr NL*)? 'ENDSUBROUTINE'`
    ///
    /// The block may only be left out when a `RETURN` follows.
    fn parse_subroutine(&mut self) -> Result<ExprId, ParseError> {
        if self.block_depth > 0 {
            return Err(ParseError::new(
                ParseErrorKind::NestedSubroutine,
                self.cursor.current_span(),
            ));
        }

        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let params = self.parse_params()?;
        self.cursor.expect(&TokenKind::RParen, "`)`")?;
        self.cursor.skip_newlines();
        let body = if self.cursor.check(&TokenKind::Return) {
            None
        } else {
            Some(self.parse_block("the subroutine body")?)
        };

        let ret = if self.cursor.check(&TokenKind::Return) {
            self.cursor.advance();
            let value = self.parse_expr()?;
            self.cursor.skip_newlines();
            Some(value)
        } else {
            None
        };
        self.cursor.expect(&TokenKind::EndSubroutine, "ENDSUBROUTINE")?;

        let span = self.span_from(start);
        Ok(self.alloc(
            ExprKind::Subroutine {
                name,
                params,
                body,
                ret,
            },
            span,
        ))
    }

    /// Formal parameters as a `Parameters` chain, `None` when empty.
    fn parse_params(&mut self) -> Result<Option<ExprId>, ParseError> {
        if self.cursor.check(&TokenKind::RParen) {
            return Ok(None);
        }

        let mut names = vec![self.cursor.expect_ident()?];
        while self.cursor.check(&TokenKind::Comma) {
            self.cursor.advance();
            names.push(self.cursor.expect_ident()?);
        }

        let mut next = None;
        for (name, span) in names.into_iter().rev() {
            next = Some(self.alloc(ExprKind::Parameters { name, next }, span));
        }
        Ok(next)
    }

    /// `'OUTPUT' expr`
    fn parse_output(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let value = self.parse_expr()?;
        let span = self.span_from(start);
        Ok(self.alloc(ExprKind::Output { value }, span))
    }
}
