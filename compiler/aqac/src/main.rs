//! AQA pseudocode CLI.

use aqac::commands::{lex_file, parse_file, run_file, run_repl};

fn main() {
    aqac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: aqa run <file>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: aqa parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: aqa lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("aqa {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("AQA pseudocode interpreter");
    println!();
    println!("Usage: aqa <command> [args]");
    println!();
    println!("Commands:");
    println!("  run <file>     Evaluate a program");
    println!("  parse <file>   Print the syntax tree");
    println!("  lex <file>     Print the token stream");
    println!("  repl           Start an interactive session");
    println!("  help           Show this message");
    println!("  version        Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=aqa_eval=debug) to enable tracing.");
}
