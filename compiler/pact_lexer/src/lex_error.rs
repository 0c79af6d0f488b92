//! Lexical error taxonomy.
//!
//! Every error is fatal: the scanner stops at the first one and reports it
//! to its caller. The location and the variant are the whole diagnostic
//! payload; rendering (file names, colours, snippets) is the consumer's job.

use thiserror::Error;

use crate::token::Location;

/// Result alias for scanner operations.
pub type LexResult<T> = Result<T, LexError>;

/// A lexical error that ends the scanning session.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// The current character starts no token.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char, location: Location },

    /// The character can start a symbol but no symbol production matches
    /// (bare `+`, `*`, `/`, `<`, `>`, or `-` not followed by `>`).
    #[error("unexpected symbol {found:?}")]
    UnexpectedSymbol { found: char, location: Location },

    /// A backslash inside a string literal is followed by a character outside
    /// `n t r " \`. The location points at that character.
    #[error("invalid escape sequence `\\{found}` in string literal")]
    InvalidEscapeSequence { found: char, location: Location },

    /// Input ended before the closing `"`. The location points at the
    /// opening quote.
    #[error("unterminated string literal")]
    UnterminatedStringLiteral { location: Location },
}

impl LexError {
    /// Where the error was detected.
    pub fn location(&self) -> Location {
        match self {
            LexError::UnexpectedCharacter { location, .. }
            | LexError::UnexpectedSymbol { location, .. }
            | LexError::InvalidEscapeSequence { location, .. }
            | LexError::UnterminatedStringLiteral { location } => *location,
        }
    }

    /// Stable name of the error variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            LexError::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            LexError::InvalidEscapeSequence { .. } => "InvalidEscapeSequence",
            LexError::UnterminatedStringLiteral { .. } => "UnterminatedStringLiteral",
        }
    }

    /// Suggested fix, when one is obvious.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::InvalidEscapeSequence { .. } => {
                Some(r#"valid escapes are: \n, \t, \r, \", \\"#)
            }
            LexError::UnterminatedStringLiteral { .. } => Some("add closing `\"`"),
            LexError::UnexpectedSymbol { found: '-', .. } => {
                Some("`-` is only valid as part of `->`")
            }
            LexError::UnexpectedSymbol { found: '/', .. } => {
                Some("`/` is only valid as part of `//` comments")
            }
            LexError::UnexpectedSymbol { .. } | LexError::UnexpectedCharacter { .. } => None,
        }
    }

    #[cold]
    pub(crate) fn unexpected_character(found: char, location: Location) -> Self {
        LexError::UnexpectedCharacter { found, location }
    }

    #[cold]
    pub(crate) fn unexpected_symbol(found: char, location: Location) -> Self {
        LexError::UnexpectedSymbol { found, location }
    }

    #[cold]
    pub(crate) fn invalid_escape(found: char, location: Location) -> Self {
        LexError::InvalidEscapeSequence { found, location }
    }

    #[cold]
    pub(crate) fn unterminated_string(location: Location) -> Self {
        LexError::UnterminatedStringLiteral { location }
    }
}
