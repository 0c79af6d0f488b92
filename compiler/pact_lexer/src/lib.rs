//! Tokenizer for the Pact contract language.
//!
//! Converts source text into a pull sequence of located [`Token`]s for the
//! parser. The stream is lossless: whitespace and comments are tokens too,
//! and consumers filter them by tag (see [`Token::is_trivia`]).
//!
//! # Example
//!
//! ```
//! use pact_lexer::{Keyword, Location, Scanner, Token};
//!
//! let mut scanner = Scanner::new("def x");
//! assert_eq!(
//!     scanner.next_token(),
//!     Ok(Some(Token::keyword(Keyword::Def, Location::new(1, 1))))
//! );
//! ```
//!
//! # Modules
//!
//! - [`token`]: token kinds and source locations
//! - [`cursor`]: character cursor with line/column tracking
//! - [`keywords`]: reserved-word table
//! - [`escape`]: string escape table
//! - [`scanner`]: the scanner itself

pub mod cursor;
pub mod escape;
pub mod keywords;
mod lex_error;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexResult};
pub use scanner::Scanner;
pub use token::{Keyword, LiteralKind, Location, Symbol, Token, TokenKind};

/// Lex the whole of `source`, trivia included.
///
/// Stops at the first lexical error.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source).collect()
}

/// Lex `source` and drop whitespace and comment tokens.
pub fn significant(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source)
        .filter(|tok| !matches!(tok, Ok(t) if t.is_trivia()))
        .collect()
}
