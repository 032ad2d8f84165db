
use aqa_ir::render::render;

use crate::{parse, ParseError, ParsedProgram};

fn parse_ok(source: &str) -> ParsedProgram {
    match parse(source) {
        Ok(program) => program,
        Err(err) => panic!("failed to parse {source:?}: {}", err.message()),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(program) => panic!(
            "expected an error for {source:?}, got {}",
            render(&program.arena, program.root)
        ),
        Err(err) => err,
    }
}

fn rendered(source: &str) -> String {
    let program = parse_ok(source);
    render(&program.arena, program.root)
}
