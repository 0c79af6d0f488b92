//! Character cursor with line/column tracking.
//!
//! The cursor walks a borrowed `&str` one Unicode scalar value at a time.
//! It keeps the byte position (for slicing token text out of the source),
//! the zero-based character offset, and the 1-based line and column.
//!
//! # Advance Law
//!
//! Consuming `\n` increments the line and resets the column to 1. Consuming
//! any other character, `\r` included, increments the column and leaves the
//! line unchanged.

use crate::token::Location;

/// Cursor over the scanner's input text.
///
/// The cursor is [`Copy`], so a scanner can snapshot it to remember where a
/// token started.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte index into `source`. Always on a char boundary.
    pos: usize,
    /// Number of characters consumed so far.
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character one past the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consume the current character, returning it.
    ///
    /// Returns `None` without moving at end of input.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume the maximal run of characters satisfying `pred`, returning the
    /// consumed text (possibly empty).
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        self.slice(start, self.pos)
    }

    /// Consume characters up to, but not including, the next `\n` (or to end
    /// of input), returning the consumed text.
    #[inline]
    pub fn eat_until_newline_or_eof(&mut self) -> &'a str {
        self.eat_while(|c| c != '\n')
    }

    /// Source text between two byte positions previously reported by
    /// [`pos()`](Self::pos).
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end && end <= self.source.len());
        &self.source[start..end]
    }

    /// Position of the current character.
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Current byte position in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Zero-based count of characters consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

#[cfg(test)]
mod tests;
