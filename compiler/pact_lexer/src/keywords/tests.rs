use super::*;

#[test]
fn lowercase_reserved_words() {
    assert_eq!(lookup("def"), Some(Keyword::Def));
    assert_eq!(lookup("contract"), Some(Keyword::Contract));
    assert_eq!(lookup("self"), Some(Keyword::SelfLower));
    assert_eq!(lookup("for"), Some(Keyword::For));
    assert_eq!(lookup("in"), Some(Keyword::In));
}

#[test]
fn case_insensitive_match() {
    assert_eq!(lookup("Def"), Some(Keyword::Def));
    assert_eq!(lookup("DEF"), Some(Keyword::Def));
    assert_eq!(lookup("CoNtRaCt"), Some(Keyword::Contract));
    assert_eq!(lookup("Self"), Some(Keyword::SelfLower));
    assert_eq!(lookup("FOR"), Some(Keyword::For));
    assert_eq!(lookup("IN"), Some(Keyword::In));
}

#[test]
fn every_keyword_round_trips() {
    for kw in Keyword::ALL {
        assert_eq!(lookup(kw.as_str()), Some(kw));
        assert_eq!(lookup(&kw.as_str().to_ascii_uppercase()), Some(kw));
    }
}

#[test]
fn near_misses_are_identifiers() {
    for text in [
        "de", "defs", "contracts", "contrac", "selfish", "sel", "fo", "fore", "i", "inn",
        "in_", "_in", "if", "fur", "dex", "elf",
    ] {
        assert_eq!(lookup(text), None, "{text:?} should not be a keyword");
    }
}

#[test]
fn rejects_out_of_range_lengths() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("contractor"), None);
}

#[test]
fn rejects_non_ascii_lookalikes() {
    // U+017F LATIN SMALL LETTER LONG S uppercases to `S` but is not ASCII.
    assert_eq!(lookup("\u{17f}elf"), None);
    // U+0131 LATIN SMALL LETTER DOTLESS I
    assert_eq!(lookup("\u{131}n"), None);
}

#[test]
fn leading_digit_or_underscore_rejected() {
    assert_eq!(lookup("1in"), None);
    assert_eq!(lookup("_def"), None);
}
