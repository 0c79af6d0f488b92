//! Reserved-word resolution.
//!
//! A static table, bucketed by length, mapping identifier text to a
//! [`Keyword`]. Matching is ASCII case-insensitive, so `Def`, `DEF` and `def`
//! all resolve to [`Keyword::Def`]. Non-ASCII letters never fold into a
//! reserved word.

use crate::token::Keyword;

/// Look up a reserved word by text.
///
/// Returns `None` for ordinary identifiers. Reserved words are 2-8 bytes
/// and start with an ASCII letter, so anything else is rejected before any
/// comparison.
#[inline]
pub fn lookup(text: &str) -> Option<Keyword> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=8).contains(&len) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    let candidate = match len {
        2 => Keyword::In,
        3 => match bytes[0].to_ascii_lowercase() {
            b'd' => Keyword::Def,
            b'f' => Keyword::For,
            _ => return None,
        },
        4 => Keyword::SelfLower,
        8 => Keyword::Contract,
        _ => return None,
    };

    text.eq_ignore_ascii_case(candidate.as_str())
        .then_some(candidate)
}

#[cfg(test)]
mod tests;
