//! AQA Eval - tree-walking evaluator for AQA pseudocode.
//!
//! # Architecture
//!
//! - `Interpreter`: dispatch over `ExprKind`, control flow, subroutine calls
//! - `Environment`: flat name to `Binding` map, cloned per call frame
//! - `evaluate_binary` / `evaluate_relation` / `evaluate_unary`: pure
//!   operator semantics on `Value`s
//! - `PrintHandlerImpl`: destination for `OUTPUT`
//!
//! `Interpreter::evaluate` is the single entry point and never fails:
//! errors come back as `Value::Error` alongside the environment.
//!
//! ```text
//! let program = aqa_parse::parse("x <- 1 + 2\nOUTPUT x")?;
//! let mut interpreter = InterpreterBuilder::new(&program.arena)
//!     .print_handler(buffer_handler())
//!     .build();
//! let (value, env) = interpreter.evaluate(program.root, Environment::new());
//! ```

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{AssignError, Binding, Environment};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, evaluate_relation};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
