//! Pact CLI
//!
//! Front-end tooling for Pact source files.

use pactc::commands::{lex_file, parse_lex_options};

fn main() {
    pactc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            let mut file_path = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    flags.push(arg.clone());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: pactc lex <file.pact> [--trivia] [--indent=<n>] [--no-locations]");
                std::process::exit(1);
            };

            let options = parse_lex_options(&flags);
            lex_file(path, &options);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Pact - front-end tooling for the Pact contract language");
    println!();
    println!("Usage: pactc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>    Print the token stream of a source file");
    println!("  help          Show this message");
    println!();
    println!("Lex options:");
    println!("  --trivia            Include whitespace and comment tokens");
    println!("  --indent=<n>        Spaces per brace level (default: 2)");
    println!("  --locations         Show line:column for each token (default)");
    println!("  --no-locations      Hide token locations");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=pact_lexer=trace) for debug logging.");
}
