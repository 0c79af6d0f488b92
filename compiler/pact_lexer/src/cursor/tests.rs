use super::*;
use proptest::prelude::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.location(), Location::START);
}

#[test]
fn bump_moves_forward() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.location(), Location::new(1, 2));
}

#[test]
fn peek_returns_next_char() {
    let cursor = Cursor::new("->");
    assert_eq!(cursor.peek(), Some('>'));
}

#[test]
fn peek_near_end_is_none() {
    let mut cursor = Cursor::new("ab");
    cursor.bump();
    assert_eq!(cursor.peek(), None);
}

// === EOF ===

#[test]
fn empty_source_is_eof() {
    let mut cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.location(), Location::START);
}

#[test]
fn bump_at_eof_does_not_move() {
    let mut cursor = Cursor::new("x");
    cursor.bump();
    assert!(cursor.is_eof());
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.location(), Location::new(1, 2));
}

// === Line / Column ===

#[test]
fn newline_resets_column() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.location(), Location::new(1, 3));
    cursor.bump(); // '\n'
    assert_eq!(cursor.location(), Location::new(2, 1));
    cursor.bump();
    assert_eq!(cursor.location(), Location::new(2, 2));
}

#[test]
fn carriage_return_is_a_column() {
    let mut cursor = Cursor::new("\r\n");
    cursor.bump();
    assert_eq!(cursor.location(), Location::new(1, 2));
    cursor.bump();
    assert_eq!(cursor.location(), Location::new(2, 1));
}

#[test]
fn multibyte_chars_count_as_one_column() {
    let mut cursor = Cursor::new("é€x");
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.location(), Location::new(1, 3));
    assert_eq!(cursor.offset(), 2);
    assert_eq!(cursor.pos(), "é€".len());
}

// === Runs ===

#[test]
fn eat_while_returns_consumed_slice() {
    let mut cursor = Cursor::new("abc123 rest");
    let run = cursor.eat_while(char::is_alphanumeric);
    assert_eq!(run, "abc123");
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn eat_while_can_consume_nothing() {
    let mut cursor = Cursor::new("x");
    assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), "");
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("// hi\r\nnext");
    assert_eq!(cursor.eat_until_newline_or_eof(), "// hi\r");
    assert_eq!(cursor.current(), Some('\n'));
}

#[test]
fn eat_until_newline_runs_to_eof() {
    let mut cursor = Cursor::new("// tail");
    assert_eq!(cursor.eat_until_newline_or_eof(), "// tail");
    assert!(cursor.is_eof());
}

#[test]
fn slice_between_positions() {
    let mut cursor = Cursor::new("hello world");
    let start = cursor.pos();
    cursor.eat_while(|c| c != ' ');
    assert_eq!(cursor.slice(start, cursor.pos()), "hello");
}

// === Property tests ===

proptest! {
    #[test]
    fn advance_law_holds_for_every_char(source in "\\PC{0,64}|[a\n\r\t ]{0,64}") {
        let mut cursor = Cursor::new(&source);
        let mut consumed = 0usize;
        while let Some(c) = cursor.current() {
            let before = cursor.location();
            cursor.bump();
            consumed += 1;
            let after = cursor.location();
            if c == '\n' {
                prop_assert_eq!(after, Location::new(before.line + 1, 1));
            } else {
                prop_assert_eq!(after, Location::new(before.line, before.column + 1));
            }
        }
        prop_assert_eq!(cursor.offset(), consumed);
        prop_assert_eq!(consumed, source.chars().count());
        prop_assert_eq!(cursor.pos(), source.len());
    }
}
