//! Lexer for the AQA pseudocode language, built on logos.
//!
//! Horizontal whitespace and `#` comments are dropped; newlines are kept
//! because they separate statements. Unrecognised input becomes an
//! `Error` token so the parser can report it with a location, which means
//! lexing itself never fails.

use aqa_ir::{Name, Span, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos, before conversion to `TokenKind`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    // Keywords
    #[token("CONSTANT")]
    Constant,
    #[token("IF")]
    If,
    #[token("THEN")]
    Then,
    #[token("ELSE")]
    Else,
    #[token("ENDIF")]
    EndIf,
    #[token("WHILE")]
    While,
    #[token("ENDWHILE")]
    EndWhile,
    #[token("REPEAT")]
    Repeat,
    #[token("UNTIL")]
    Until,
    #[token("SUBROUTINE")]
    Subroutine,
    #[token("ENDSUBROUTINE")]
    EndSubroutine,
    #[token("RETURN")]
    Return,
    #[token("OUTPUT")]
    Output,
    #[token("AND")]
    And,
    #[token("OR")]
    Or,
    #[token("NOT")]
    Not,
    #[token("True")]
    True,
    #[token("False")]
    False,

    // Operators
    #[token("<-")]
    #[token("←")]
    Arrow,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("!=")]
    #[token("≠")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    #[token("≤")]
    LtEq,
    #[token(">=")]
    #[token("≥")]
    GtEq,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex `source` into a `TokenList` ending in `Eof`.
///
/// # Panics
/// Panics if `source` is longer than `u32::MAX` bytes.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = to_span(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => {
                if let Some(kind) = convert_token(raw, slice) {
                    result.push(Token::new(kind, span));
                }
            }
            Err(()) => result.push(Token::new(TokenKind::Error, span)),
        }
    }

    result.push(Token::new(TokenKind::Eof, to_span(source.len()..source.len())));
    result
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or_else(|e| panic!("source too large to lex: {e}"))
}

/// Convert a raw token, dropping trivia.
fn convert_token(raw: RawToken, slice: &str) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Comment => return None,

        RawToken::Number => TokenKind::Number(slice.into()),
        RawToken::Ident => TokenKind::Ident(Name::from(slice)),
        RawToken::Newline => TokenKind::Newline,

        RawToken::Constant => TokenKind::Constant,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::EndIf => TokenKind::EndIf,
        RawToken::While => TokenKind::While,
        RawToken::EndWhile => TokenKind::EndWhile,
        RawToken::Repeat => TokenKind::Repeat,
        RawToken::Until => TokenKind::Until,
        RawToken::Subroutine => TokenKind::Subroutine,
        RawToken::EndSubroutine => TokenKind::EndSubroutine,
        RawToken::Return => TokenKind::Return,
        RawToken::Output => TokenKind::Output,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
