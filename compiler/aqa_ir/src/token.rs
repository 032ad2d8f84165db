//! Lexer output: tokens and token lists.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span, Spanned};

/// A token with its source location.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// Token kinds of the pseudocode surface syntax.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// Digits with an optional fraction, kept as written.
    Number(Box<str>),
    Ident(Name),

    // Keywords
    Constant,
    If,
    Then,
    Else,
    EndIf,
    While,
    EndWhile,
    Repeat,
    Until,
    Subroutine,
    EndSubroutine,
    Return,
    Output,
    And,
    Or,
    Not,
    True,
    False,

    // Operators
    /// `<-` or `←`
    Arrow,
    Plus,
    Minus,
    Star,
    Slash,
    /// `=`
    Eq,
    /// `!=` or `≠`
    NotEq,
    Lt,
    Gt,
    /// `<=` or `≤`
    LtEq,
    /// `>=` or `≥`
    GtEq,

    // Delimiters
    LParen,
    RParen,
    Comma,

    /// Statement separator.
    Newline,
    /// Character sequence the lexer does not recognise.
    Error,
    Eof,
}

impl TokenKind {
    /// Name used in "expected X, found Y" messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Constant => "CONSTANT",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::EndIf => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::EndWhile => "ENDWHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::Subroutine => "SUBROUTINE",
            TokenKind::EndSubroutine => "ENDSUBROUTINE",
            TokenKind::Return => "RETURN",
            TokenKind::Output => "OUTPUT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Arrow => "<-",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Newline => "newline",
            TokenKind::Error => "unrecognised input",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this token closes a block (and so ends a statement list).
    pub fn ends_block(&self) -> bool {
        matches!(
            self,
            TokenKind::Else
                | TokenKind::EndIf
                | TokenKind::EndWhile
                | TokenKind::Until
                | TokenKind::Return
                | TokenKind::EndSubroutine
                | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(text) => write!(f, "number `{text}`"),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            other => write!(f, "`{}`", other.display_name()),
        }
    }
}

/// Lexer output. Always terminated by a single `Eof` token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
