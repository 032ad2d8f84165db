use crate::Repl;

/// Interactive session on stdin and stdout.
pub fn run_repl() {
    let stdin = std::io::stdin();
    if let Err(e) = Repl::new().run(stdin.lock(), std::io::stdout()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
