//! Token model: located, classified units of lexical output.
//!
//! Every [`Token`] pairs a [`TokenKind`] with the [`Location`] of its first
//! character. Tokens own their text and never borrow from the scanner, so a
//! consumer can hold on to them after the source buffer is gone.
//!
//! # Fixed-Identity Symbols
//!
//! A [`Symbol`] carries only its tag. The text is derived from the tag at
//! read time via [`Symbol::glyph()`], so no code path can build a `Comma`
//! token that reads back as `.`.

use std::fmt;

use crate::escape::escape_for;

/// Source position of the first character of a token.
///
/// Both fields are 1-based. The column counts Unicode scalar values, not
/// bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// The position of the first character of any input.
    pub const START: Location = Location { line: 1, column: 1 };

    /// Create a new location.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Reserved words.
///
/// Matching against source text is ASCII case-insensitive (see
/// [`keywords::lookup`](crate::keywords::lookup)); the token value is always
/// the canonical lowercase spelling.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Keyword {
    Def,
    Contract,
    SelfLower,
    For,
    In,
}

impl Keyword {
    /// Every reserved word, in declaration order.
    pub const ALL: [Keyword; 5] = [
        Keyword::Def,
        Keyword::Contract,
        Keyword::SelfLower,
        Keyword::For,
        Keyword::In,
    ];

    /// Canonical lowercase spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Def => "def",
            Keyword::Contract => "contract",
            Keyword::SelfLower => "self",
            Keyword::For => "for",
            Keyword::In => "in",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuation tags.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Symbol {
    /// `@`
    At,
    /// `:`
    Colon,
    /// `->`
    Arrow,
    /// `=`
    Equal,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
}

impl Symbol {
    /// Every symbol tag, in declaration order.
    pub const ALL: [Symbol; 12] = [
        Symbol::At,
        Symbol::Colon,
        Symbol::Arrow,
        Symbol::Equal,
        Symbol::Comma,
        Symbol::Dot,
        Symbol::LParen,
        Symbol::RParen,
        Symbol::LBrace,
        Symbol::RBrace,
        Symbol::LBracket,
        Symbol::RBracket,
    ];

    /// The canonical text for this tag.
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::At => "@",
            Symbol::Colon => ":",
            Symbol::Arrow => "->",
            Symbol::Equal => "=",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::LBrace => "{",
            Symbol::RBrace => "}",
            Symbol::LBracket => "[",
            Symbol::RBracket => "]",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Kind of a literal token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LiteralKind {
    String,
    Number,
}

/// What a token is, together with its text payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier(String),
    Symbol(Symbol),
    /// For strings, `value` is the decoded content without quotes.
    Literal {
        kind: LiteralKind,
        value: String,
    },
    /// One maximal run of whitespace.
    Whitespace(String),
    /// Includes the leading `//`, excludes the terminating newline.
    Comment(String),
}

impl TokenKind {
    /// Human-readable tag name for listings and diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::Symbol(_) => "Symbol",
            TokenKind::Literal {
                kind: LiteralKind::String,
                ..
            } => "String",
            TokenKind::Literal {
                kind: LiteralKind::Number,
                ..
            } => "Number",
            TokenKind::Whitespace(_) => "Whitespace",
            TokenKind::Comment(_) => "Comment",
        }
    }
}

/// A classified, located unit of lexical output.
///
/// Fields are private: tokens are built only through the named factories
/// below and are immutable afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    location: Location,
}

impl Token {
    pub fn keyword(keyword: Keyword, location: Location) -> Self {
        Self::new(TokenKind::Keyword(keyword), location)
    }

    pub fn identifier(text: impl Into<String>, location: Location) -> Self {
        Self::new(TokenKind::Identifier(text.into()), location)
    }

    pub fn symbol(symbol: Symbol, location: Location) -> Self {
        Self::new(TokenKind::Symbol(symbol), location)
    }

    /// A string literal holding already-decoded content.
    pub fn string(value: impl Into<String>, location: Location) -> Self {
        Self::new(
            TokenKind::Literal {
                kind: LiteralKind::String,
                value: value.into(),
            },
            location,
        )
    }

    pub fn number(digits: impl Into<String>, location: Location) -> Self {
        Self::new(
            TokenKind::Literal {
                kind: LiteralKind::Number,
                value: digits.into(),
            },
            location,
        )
    }

    pub fn whitespace(text: impl Into<String>, location: Location) -> Self {
        Self::new(TokenKind::Whitespace(text.into()), location)
    }

    pub fn comment(text: impl Into<String>, location: Location) -> Self {
        Self::new(TokenKind::Comment(text.into()), location)
    }

    #[inline]
    fn new(kind: TokenKind, location: Location) -> Self {
        Token { kind, location }
    }

    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Take ownership of the kind, dropping the location.
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// The token's text value.
    ///
    /// Keywords and symbols yield their canonical spelling, string literals
    /// their decoded content, everything else the raw source run.
    pub fn value(&self) -> &str {
        match &self.kind {
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Symbol(sym) => sym.glyph(),
            TokenKind::Identifier(text)
            | TokenKind::Whitespace(text)
            | TokenKind::Comment(text)
            | TokenKind::Literal { value: text, .. } => text,
        }
    }

    /// Whitespace and comments carry no syntax.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace(_) | TokenKind::Comment(_)
        )
    }

    /// Returns `true` if this is the given symbol.
    #[inline]
    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }

    /// Source spelling of this token.
    ///
    /// String literals are re-quoted and re-escaped; keywords come back in
    /// canonical lowercase regardless of how they were written.
    pub fn source_text(&self) -> String {
        match &self.kind {
            TokenKind::Literal {
                kind: LiteralKind::String,
                value,
            } => {
                let mut out = String::with_capacity(value.len() + 2);
                out.push('"');
                for c in value.chars() {
                    if let Some(esc) = escape_for(c) {
                        out.push('\\');
                        out.push(esc);
                    } else {
                        out.push(c);
                    }
                }
                out.push('"');
                out
            }
            _ => self.value().to_owned(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind.display_name(), self.value())
    }
}
