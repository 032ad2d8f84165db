//! Source text in, printable text out.

use aqa_eval::{Environment, EvalError, InterpreterBuilder, SharedPrintHandler, Value};
use aqa_parse::ParseError;

/// Parse and evaluate `source` against a fresh environment.
///
/// `OUTPUT` goes to `handler`. Runtime failures come back inside the
/// returned `Value`; only a parse failure is an `Err`.
pub fn run_source(
    source: &str,
    handler: SharedPrintHandler,
) -> Result<(Value, Environment), ParseError> {
    let program = aqa_parse::parse(source)?;
    let mut interpreter = InterpreterBuilder::new(&program.arena)
        .print_handler(handler)
        .build();
    Ok(interpreter.evaluate(program.root, Environment::new()))
}

/// Parse `source` and render its tree on one line.
pub fn render_source(source: &str) -> Result<String, ParseError> {
    let program = aqa_parse::parse(source)?;
    Ok(aqa_ir::render::render(&program.arena, program.root))
}

/// One line per token: position, then the token.
pub fn token_lines(source: &str) -> Vec<String> {
    aqa_lexer::lex(source)
        .iter()
        .map(|token| format!("{} {}", token.span.line_col(source), token.kind))
        .collect()
}

/// Bindings in name order, one `name = binding` line each.
pub fn binding_lines(env: &Environment) -> Vec<String> {
    env.snapshot()
        .into_iter()
        .map(|(name, binding)| format!("{name} = {binding}"))
        .collect()
}

pub fn parse_error_report(source: &str, err: &ParseError) -> String {
    format!("error: {} at {}", err.message(), err.span.line_col(source))
}

pub fn eval_error_report(source: &str, err: &EvalError) -> String {
    match err.span {
        Some(span) => format!("error: {err} at {}", span.line_col(source)),
        None => format!("error: {err}"),
    }
}
