//! Debug commands: `parse` and `lex` for inspecting the front end.

use super::read_file;
use crate::{parse_error_report, render_source, token_lines};

/// Parse a file and print its tree.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    match render_source(&source) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            eprintln!("{}", parse_error_report(&source, &err));
            std::process::exit(1);
        }
    }
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    for line in token_lines(&source) {
        println!("{line}");
    }
}
