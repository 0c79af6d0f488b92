//! The `lex` command: print the token stream of a source file.
//!
//! Significant tokens are printed one per line, indented by the number of
//! currently open `{` symbols.

use std::fmt::Write as _;

use pact_lexer::{LexResult, Scanner, Symbol};
use tracing::debug;

use super::read_file;

/// Options for `pactc lex`, parsed from command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOptions {
    /// Print whitespace and comment tokens too (--trivia)
    pub trivia: bool,
    /// Spaces per brace level (--indent=<n>, at most 255)
    pub indent_width: u8,
    /// Append `@ line:column` to each token (--locations / --no-locations)
    pub locations: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            trivia: false,
            indent_width: 2,
            locations: true,
        }
    }
}

/// Parse `lex` options from command line arguments.
///
/// Unknown flags and malformed values produce a warning and are otherwise
/// ignored.
pub fn parse_lex_options(args: &[String]) -> LexOptions {
    let mut options = LexOptions::default();

    for arg in args {
        if arg == "--trivia" {
            options.trivia = true;
        } else if arg == "--locations" {
            options.locations = true;
        } else if arg == "--no-locations" {
            options.locations = false;
        } else if let Some(width) = arg.strip_prefix("--indent=") {
            if let Ok(n) = width.parse() {
                options.indent_width = n;
            } else {
                eprintln!(
                    "warning: invalid indent width '{width}' (expected 0-{}), using {}",
                    u8::MAX,
                    options.indent_width
                );
            }
        } else {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// Lex `source` and render the listing.
///
/// Stops at the first lexical error.
pub fn render_tokens(source: &str, options: &LexOptions) -> LexResult<String> {
    let mut out = String::new();
    let mut depth = 0usize;

    for token in Scanner::new(source) {
        let token = token?;
        if token.is_trivia() && !options.trivia {
            continue;
        }
        if token.is_symbol(Symbol::RBrace) {
            depth = depth.saturating_sub(1);
        }

        let indent = depth.saturating_mul(usize::from(options.indent_width));
        out.push_str(&" ".repeat(indent));
        // Writing to a `String` cannot fail.
        let _ = write!(out, "{token}");
        if options.locations {
            let _ = write!(out, " @ {}", token.location());
        }
        out.push('\n');

        if token.is_symbol(Symbol::LBrace) {
            depth += 1;
        }
    }

    Ok(out)
}

/// Lex a file and print the token listing to stdout.
///
/// Lexical errors are reported as `path:line:column: error: message` and
/// exit the process with status 1.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);
    debug!(path, bytes = content.len(), "lexing file");
    match render_tokens(&content, options) {
        Ok(listing) => print!("{listing}"),
        Err(err) => {
            eprintln!("{path}:{}: error: {err}", err.location());
            if let Some(help) = err.help() {
                eprintln!("  help: {help}");
            }
            std::process::exit(1);
        }
    }
}
