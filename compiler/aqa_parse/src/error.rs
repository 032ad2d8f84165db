//! Parse error types.

use aqa_ir::{Span, TokenKind};

/// What was being parsed when an error occurred, for
/// "while parsing X" messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Program,
    Assignment,
    Conditional,
    WhileLoop,
    RepeatLoop,
    Subroutine,
    Output,
    Expression,
    Call,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Program => "the program",
            Self::Assignment => "an assignment",
            Self::Conditional => "an IF statement",
            Self::WhileLoop => "a WHILE loop",
            Self::RepeatLoop => "a REPEAT loop",
            Self::Subroutine => "a subroutine definition",
            Self::Output => "an OUTPUT statement",
            Self::Expression => "an expression",
            Self::Call => "a subroutine call",
        }
    }
}

/// Parse failure categories.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },

    #[error("unrecognised input")]
    UnrecognisedInput,

    #[error("the program is empty")]
    EmptyProgram,

    #[error("{construct} has no statements")]
    EmptyBlock { construct: &'static str },

    #[error("subroutines can only be defined at the top level")]
    NestedSubroutine,

    #[error("call arguments must be variable names")]
    NonNameArgument,
}

impl ParseErrorKind {
    /// Short headline for reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. } => "UNEXPECTED TOKEN",
            Self::UnrecognisedInput => "UNRECOGNISED INPUT",
            Self::EmptyProgram => "EMPTY PROGRAM",
            Self::EmptyBlock { .. } => "EMPTY BLOCK",
            Self::NestedSubroutine => "NESTED SUBROUTINE",
            Self::NonNameArgument => "INVALID ARGUMENT",
        }
    }
}

/// A parse error with its location and, when known, what was being parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    /// Attach the innermost context; outer contexts do not overwrite it.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// Full message including the parsing context, if any.
    pub fn message(&self) -> String {
        match self.context {
            Some(context) => format!("{} (while parsing {})", self.kind, context.description()),
            None => self.kind.to_string(),
        }
    }
}
