//! Line-buffered interactive session.
//!
//! Lines accumulate until one of the commands `parse`, `run` or `quit`
//! arrives on a line of its own. `parse` and `run` consume the buffer;
//! nothing carries over from one run to the next.

use std::io::{self, BufRead, Write};

use aqa_eval::{buffer_handler, Value};

use crate::pipeline::{
    binding_lines, eval_error_report, parse_error_report, render_source, run_source,
};

const PROMPT: &str = "aqa> ";

/// What the session did with one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The line was added to the buffer.
    Buffered,
    /// A command ran and produced this text.
    Output(String),
    Quit,
}

#[derive(Default)]
pub struct Repl {
    buffer: String,
}

impl Repl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source accumulated since the last `parse` or `run`.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn feed(&mut self, line: &str) -> Outcome {
        match line.trim() {
            "quit" => Outcome::Quit,
            "parse" => {
                let source = std::mem::take(&mut self.buffer);
                Outcome::Output(match render_source(&source) {
                    Ok(rendered) => rendered,
                    Err(err) => parse_error_report(&source, &err),
                })
            }
            "run" => {
                let source = std::mem::take(&mut self.buffer);
                Outcome::Output(run_buffer(&source))
            }
            _ => {
                self.buffer.push_str(line);
                self.buffer.push('\n');
                Outcome::Buffered
            }
        }
    }

    /// Drive the session until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        for line in input.lines() {
            match self.feed(&line?) {
                Outcome::Buffered => {}
                Outcome::Output(text) => writeln!(output, "{text}")?,
                Outcome::Quit => return Ok(()),
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        writeln!(output)
    }
}

/// Program output first, then either the error or the final bindings.
fn run_buffer(source: &str) -> String {
    let handler = buffer_handler();
    let (value, env) = match run_source(source, handler.clone()) {
        Ok(result) => result,
        Err(err) => return parse_error_report(source, &err),
    };

    let printed = handler.get_output();
    let mut lines: Vec<String> = printed.lines().map(str::to_owned).collect();
    match value {
        Value::Error(err) => lines.push(eval_error_report(source, &err)),
        _ => lines.extend(binding_lines(&env)),
    }
    lines.join("\n")
}
