//! The `run` command: parse and evaluate a source file.

use aqa_eval::{stdout_handler, Value};

use super::read_file;
use crate::{eval_error_report, parse_error_report, run_source};

/// Run a file with `OUTPUT` going to stdout.
pub fn run_file(path: &str) {
    let source = read_file(path);
    tracing::debug!(path, len = source.len(), "running file");
    match run_source(&source, stdout_handler()) {
        Ok((Value::Error(err), _)) => {
            eprintln!("{}", eval_error_report(&source, &err));
            std::process::exit(1);
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("{}", parse_error_report(&source, &err));
            std::process::exit(1);
        }
    }
}
