use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(Span::point(4).is_empty());
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_try_from_range_overflow() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
    assert_eq!(Span::try_from_range(3..7), Ok(Span::new(3, 7)));
}

#[test]
fn test_line_col_first_line() {
    let source = "x <- 1";
    assert_eq!(
        Span::new(5, 6).line_col(source),
        LineCol { line: 1, column: 6 }
    );
}

#[test]
fn test_line_col_later_line() {
    let source = "x <- 1\ny <- 2\nOUTPUT z";
    let offset = u32::try_from(source.find('z').unwrap()).unwrap();
    let pos = Span::point(offset).line_col(source);
    assert_eq!(pos, LineCol { line: 3, column: 8 });
    assert_eq!(pos.to_string(), "3:8");
}

#[test]
fn test_line_col_clamps_past_end() {
    let pos = Span::point(100).line_col("ab\ncd");
    assert_eq!(pos, LineCol { line: 2, column: 3 });
}
