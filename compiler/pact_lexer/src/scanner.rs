//! Pull-based scanner producing one [`Token`] per call.
//!
//! The scanner dispatches on the current character (and one character of
//! lookahead) to exactly one reading rule. Each rule captures the
//! [`Location`] before consuming anything, consumes at least one character,
//! and returns one token. End of input is reported as `Ok(None)`, never as a
//! token.
//!
//! # Dispatch Order
//!
//! First match wins:
//!
//! 1. whitespace: one maximal run
//! 2. `//`: line comment up to (not including) `\n`
//! 3. symbol-start characters: `@ : = , . < > ( ) { } [ ] + - * /`
//! 4. letter or `_`: identifier, or keyword if the text is reserved
//! 5. ASCII digit: number literal, optionally with one `.digits` fraction
//! 6. `"`: string literal with escape decoding
//! 7. anything else: [`LexError::UnexpectedCharacter`]
//!
//! # Errors
//!
//! Every error is fatal. Once an error has been returned the session is
//! finished and further calls return the same error again.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::escape::resolve_string_escape;
use crate::keywords;
use crate::lex_error::{LexError, LexResult};
use crate::token::{Location, Symbol, Token};

/// Scanner over one in-memory source text.
///
/// Not shareable between callers: every call mutates the cursor. Each lexing
/// session needs its own scanner.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// First error reported, replayed on every later call.
    error: Option<LexError>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            error: None,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` at end of input, and keeps returning it on every
    /// subsequent call.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let Some(c) = self.cursor.current() else {
            return Ok(None);
        };

        match self.dispatch(c) {
            Ok(token) => {
                trace!(
                    kind = token.kind().display_name(),
                    line = token.location().line,
                    column = token.location().column,
                    "token"
                );
                Ok(Some(token))
            }
            Err(err) => {
                debug!(
                    kind = err.kind_name(),
                    line = err.location().line,
                    column = err.location().column,
                    "lexing stopped: {err}"
                );
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Position of the next character to be read.
    #[inline]
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Returns `true` once the whole input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_eof()
    }

    fn dispatch(&mut self, c: char) -> LexResult<Token> {
        if c.is_whitespace() {
            Ok(self.whitespace())
        } else if c == '/' && self.cursor.peek() == Some('/') {
            Ok(self.comment())
        } else if is_symbol_start(c) {
            self.symbol(c)
        } else if is_ident_start(c) {
            Ok(self.identifier_or_keyword())
        } else if c.is_ascii_digit() {
            Ok(self.number())
        } else if c == '"' {
            self.string()
        } else {
            Err(LexError::unexpected_character(c, self.cursor.location()))
        }
    }

    // ─── Trivia ─────────────────────────────────────────────────────────

    fn whitespace(&mut self) -> Token {
        let start = self.cursor.location();
        let text = self.cursor.eat_while(char::is_whitespace);
        Token::whitespace(text, start)
    }

    fn comment(&mut self) -> Token {
        let start = self.cursor.location();
        let text = self.cursor.eat_until_newline_or_eof();
        Token::comment(text, start)
    }

    // ─── Symbols ────────────────────────────────────────────────────────

    fn symbol(&mut self, c: char) -> LexResult<Token> {
        let start = self.cursor.location();
        let symbol = match c {
            '-' if self.cursor.peek() == Some('>') => {
                self.cursor.bump(); // consume '-'
                Symbol::Arrow
            }
            '@' => Symbol::At,
            ':' => Symbol::Colon,
            '=' => Symbol::Equal,
            ',' => Symbol::Comma,
            '.' => Symbol::Dot,
            '(' => Symbol::LParen,
            ')' => Symbol::RParen,
            '{' => Symbol::LBrace,
            '}' => Symbol::RBrace,
            '[' => Symbol::LBracket,
            ']' => Symbol::RBracket,
            // `+ - * / < >` are reserved: they start a symbol but form none.
            _ => return Err(LexError::unexpected_symbol(c, start)),
        };
        self.cursor.bump();
        Ok(Token::symbol(symbol, start))
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.cursor.location();
        let text = self.cursor.eat_while(is_ident_continue);
        match keywords::lookup(text) {
            Some(kw) => Token::keyword(kw, start),
            None => Token::identifier(text, start),
        }
    }

    // ─── Literals ───────────────────────────────────────────────────────

    /// `digits` or `digits.digits`. A `.` not followed by a digit is left
    /// for the next call, so `123.` lexes as `123` then `Dot`.
    fn number(&mut self) -> Token {
        let start = self.cursor.location();
        let begin = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.current() == Some('.')
            && self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.bump(); // consume '.'
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        Token::number(self.cursor.slice(begin, self.cursor.pos()), start)
    }

    fn string(&mut self) -> LexResult<Token> {
        let start = self.cursor.location();
        self.cursor.bump(); // consume opening '"'

        let mut value = String::new();
        loop {
            match self.cursor.current() {
                None => return Err(LexError::unterminated_string(start)),
                Some('"') => {
                    self.cursor.bump();
                    return Ok(Token::string(value, start));
                }
                Some('\\') => {
                    self.cursor.bump(); // consume '\'
                    let escape_at = self.cursor.location();
                    let Some(esc) = self.cursor.bump() else {
                        return Err(LexError::unterminated_string(start));
                    };
                    match resolve_string_escape(esc) {
                        Some(resolved) => value.push(resolved),
                        None => return Err(LexError::invalid_escape(esc, escape_at)),
                    }
                }
                Some(c) => {
                    self.cursor.bump();
                    value.push(c);
                }
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = LexResult<Token>;

    /// Yields tokens until end of input, or a single `Err` after which the
    /// iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        self.next_token().transpose()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Characters accepted by the symbol-start check.
#[inline]
fn is_symbol_start(c: char) -> bool {
    matches!(
        c,
        '@' | ':'
            | '='
            | ','
            | '.'
            | '<'
            | '>'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | '+'
            | '-'
            | '*'
            | '/'
    )
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_ascii_digit()
}
