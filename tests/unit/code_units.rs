//! Comparing in chars, bytes and UTF-16 units.

use levdist::{distance_in, CodeUnit};

const CLEF: &str = "\u{1d11e}";

fn d(units: CodeUnit, a: &str, b: &str) -> usize {
    distance_in(units, Some(a), Some(b), None).unwrap()
}

#[test]
fn test_ascii_is_unit_agnostic() {
    for units in [CodeUnit::Char, CodeUnit::Byte, CodeUnit::Utf16] {
        assert_eq!(d(units, "kitten", "sitting"), 3, "{}", units);
        assert_eq!(d(units, "flaw", "lawn"), 2, "{}", units);
    }
}

#[test]
fn test_two_byte_character() {
    assert_eq!(d(CodeUnit::Char, "na\u{ef}ve", "naive"), 1);
    assert_eq!(d(CodeUnit::Utf16, "na\u{ef}ve", "naive"), 1);
    assert_eq!(d(CodeUnit::Byte, "na\u{ef}ve", "naive"), 2);
}

#[test]
fn test_supplementary_plane_character() {
    assert_eq!(d(CodeUnit::Char, CLEF, "x"), 1);
    assert_eq!(d(CodeUnit::Utf16, CLEF, "x"), 2);
    assert_eq!(d(CodeUnit::Byte, CLEF, "x"), 4);
}

#[test]
fn test_empty_fast_path_counts_units() {
    let s = format!("a{}", CLEF);
    assert_eq!(d(CodeUnit::Char, "", &s), 2);
    assert_eq!(d(CodeUnit::Utf16, "", &s), 3);
    assert_eq!(d(CodeUnit::Byte, &s, ""), 5);
}

#[test]
fn test_count_matches_empty_distance() {
    for s in ["", "abc", "caf\u{e9}", CLEF, "తెలుగు"] {
        for units in [CodeUnit::Char, CodeUnit::Byte, CodeUnit::Utf16] {
            assert_eq!(d(units, s, ""), units.count(s), "{:?} in {}", s, units);
        }
    }
}

#[test]
fn test_bound_applies_in_units() {
    // Four bytes apart, one char apart
    assert_eq!(distance_in(CodeUnit::Char, Some(CLEF), Some(""), Some(1)), Ok(1));
    assert_eq!(distance_in(CodeUnit::Byte, Some(CLEF), Some(""), Some(1)), Ok(2));
}
