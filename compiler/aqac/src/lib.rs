//! AQA pseudocode driver.
//!
//! The `aqa` binary is a thin argument dispatcher over `commands`. The
//! source-to-text pipeline and the REPL live in the library so they can be
//! exercised without spawning a process.

pub mod commands;
mod pipeline;
mod repl;

pub use pipeline::{
    binding_lines, eval_error_report, parse_error_report, render_source, run_source, token_lines,
};
pub use repl::{Outcome, Repl};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set, e.g. `RUST_LOG=aqa_eval=debug`
/// or `RUST_LOG=aqa_parse=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
