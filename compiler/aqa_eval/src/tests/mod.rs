//! End-to-end evaluator tests: source text through the parser and
//! into the interpreter.


use crate::{buffer_handler, silent_handler, Environment, InterpreterBuilder, Value};

struct Run {
    value: Value,
    env: Environment,
    output: String,
}

fn run(source: &str) -> Run {
    let program = aqa_parse::parse(source)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {}", err.message()));
    let handler = buffer_handler();
    let (value, env) = InterpreterBuilder::new(&program.arena)
        .print_handler(handler.clone())
        .build()
        .evaluate(program.root, Environment::new());
    Run {
        value,
        env,
        output: handler.get_output(),
    }
}

/// Run without capturing output, rendering everything observable.
fn observe(source: &str) -> String {
    let program = aqa_parse::parse(source).unwrap();
    let (value, env) = InterpreterBuilder::new(&program.arena)
        .print_handler(silent_handler())
        .build()
        .evaluate(program.root, Environment::new());
    let bindings: Vec<String> = env
        .snapshot()
        .into_iter()
        .map(|(name, binding)| format!("{name}={binding}"))
        .collect();
    format!("{value} | {}", bindings.join(" "))
}

fn number(env: &Environment, name: &str) -> Option<f64> {
    match env.get(name)? {
        crate::Binding::Variable { value, .. } => value.as_number(),
        crate::Binding::Subroutine { .. } => None,
    }
}
