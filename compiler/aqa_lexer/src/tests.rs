use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|t| t.kind.clone()).collect()
}

#[test]
fn test_lex_assignment() {
    assert_eq!(
        kinds("x <- 42"),
        vec![
            TokenKind::Ident(Name::from("x")),
            TokenKind::Arrow,
            TokenKind::Number("42".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_constant_and_decimal() {
    assert_eq!(
        kinds("CONSTANT PI <- 3.14"),
        vec![
            TokenKind::Constant,
            TokenKind::Ident(Name::from("PI")),
            TokenKind::Arrow,
            TokenKind::Number("3.14".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_relations() {
    assert_eq!(
        kinds("= != < > <= >= ≠ ≤ ≥"),
        vec![
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_unicode_arrow() {
    let tokens = lex("x ← 1");
    assert_eq!(tokens[1].kind, TokenKind::Arrow);
    // `←` is three bytes long
    assert_eq!(tokens[1].span, Span::new(2, 5));
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = lex("WHILE while True true");
    assert_eq!(tokens[0].kind, TokenKind::While);
    assert_eq!(tokens[1].kind, TokenKind::Ident(Name::from("while")));
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::Ident(Name::from("true")));
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = lex("ENDIFx IFfy");
    assert_eq!(tokens[0].kind, TokenKind::Ident(Name::from("ENDIFx")));
    assert_eq!(tokens[1].kind, TokenKind::Ident(Name::from("IFfy")));
}

#[test]
fn test_comments_and_newlines() {
    assert_eq!(
        kinds("a <- 1 # set a\nOUTPUT a\n"),
        vec![
            TokenKind::Ident(Name::from("a")),
            TokenKind::Arrow,
            TokenKind::Number("1".into()),
            TokenKind::Newline,
            TokenKind::Output,
            TokenKind::Ident(Name::from("a")),
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unrecognised_input_is_error_token() {
    let tokens = lex("x <- 1 $ 2");
    assert_eq!(tokens[3].kind, TokenKind::Error);
    assert_eq!(tokens[3].span, Span::new(7, 8));
    assert_eq!(tokens[4].kind, TokenKind::Number("2".into()));
}

#[test]
fn test_eof_span_at_end() {
    let tokens = lex("OUTPUT 1");
    let eof = &tokens[tokens.len() - 1];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(8));
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}
