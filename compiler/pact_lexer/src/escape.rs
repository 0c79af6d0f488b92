//! String literal escape table.
//!
//! Valid escapes inside `"..."`: `\n` `\t` `\r` `\"` `\\`. Anything else after
//! a backslash is an [`InvalidEscapeSequence`](crate::LexError::InvalidEscapeSequence).

/// Resolve the character following a backslash to the character it denotes.
#[inline]
pub fn resolve_string_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Inverse of [`resolve_string_escape`]: the escape letter that encodes `c`
/// inside a string literal, if `c` must be escaped.
#[inline]
pub fn escape_for(c: char) -> Option<char> {
    match c {
        '\n' => Some('n'),
        '\t' => Some('t'),
        '\r' => Some('r'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}
