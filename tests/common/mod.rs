//! Shared test utilities.
//!
//! Strategies for generating comparable strings and a few fixed pairs with
//! known distances. Not every test binary uses every helper.

#![allow(dead_code)]

use proptest::prelude::*;

/// Pairs with hand-checked distances.
pub const KNOWN_PAIRS: &[(&str, &str, usize)] = &[
    ("kitten", "sitting", 3),
    ("", "abc", 3),
    ("abc", "", 3),
    ("", "", 0),
    ("flaw", "lawn", 2),
    ("abc", "abc", 0),
    ("sunday", "saturday", 3),
    ("gumbo", "gambol", 2),
    ("intention", "execution", 5),
    ("abcdef", "cdefgh", 4),
    ("a", "b", 1),
    ("ab", "ba", 2),
];

/// Split a string into chars, the default comparison unit.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Strings over a tiny alphabet, so random pairs share a lot of structure and
/// land at small distances (where the bound is interesting).
pub fn narrow_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,12}").unwrap()
}

/// Word-like strings over a wider alphabet.
pub fn word_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,20}").unwrap()
}

/// Arbitrary Unicode, including multi-byte and supplementary-plane chars.
pub fn unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..12).prop_map(|cs| cs.into_iter().collect())
}

/// Words with and without diacritics, all precomposed.
pub fn diacritic_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "cafe".to_string(),
        "caf\u{e9}".to_string(),
        "naive".to_string(),
        "na\u{ef}ve".to_string(),
        "resume".to_string(),
        "r\u{e9}sum\u{e9}".to_string(),
        "tokyo".to_string(),
        "t\u{14d}ky\u{14d}".to_string(),
        "తెలుగు".to_string(),
        "\u{1d11e}clef".to_string(),
    ])
}
