//! Differential testing: the optimized sweep against the oracles and against
//! `strsim`, an independent crate.
//!
//! Each entry point is checked on the same inputs by something simpler. If
//! they disagree, the simpler one is right.

use super::oracles::{oracle_bounded, oracle_levenshtein};
use crate::common::{chars, narrow_string, unicode_string, word_string, KNOWN_PAIRS};
use levdist::{
    distance, distance_bounded, distance_in, sequence_distance, sequence_distance_bounded,
    CodeUnit,
};
use proptest::prelude::*;

#[test]
fn diff_known_pairs() {
    for &(a, b, expected) in KNOWN_PAIRS {
        assert_eq!(distance(Some(a), Some(b)), Ok(expected), "({:?}, {:?})", a, b);
        assert_eq!(strsim::levenshtein(a, b), expected, "strsim on ({:?}, {:?})", a, b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Sweep matches the full-matrix oracle on dense near-matches.
    #[test]
    fn diff_sweep_vs_oracle_narrow(a in narrow_string(), b in narrow_string()) {
        let (ca, cb) = (chars(&a), chars(&b));
        prop_assert_eq!(sequence_distance(&ca, &cb), oracle_levenshtein(&ca, &cb));
    }

    /// Sweep matches the oracle on word-like input.
    #[test]
    fn diff_sweep_vs_oracle_words(a in word_string(), b in word_string()) {
        let (ca, cb) = (chars(&a), chars(&b));
        prop_assert_eq!(sequence_distance(&ca, &cb), oracle_levenshtein(&ca, &cb));
    }

    /// The string entry point agrees with strsim, which also counts chars.
    #[test]
    fn diff_distance_vs_strsim(a in unicode_string(), b in unicode_string()) {
        prop_assert_eq!(
            distance(Some(a.as_str()), Some(b.as_str())).unwrap(),
            strsim::levenshtein(&a, &b),
            "a={:?} b={:?}", a, b
        );
    }

    /// Bounded sweep matches the bounded contract applied to the oracle.
    #[test]
    fn diff_bounded_vs_oracle(a in narrow_string(), b in narrow_string(), max in 0usize..14) {
        let (ca, cb) = (chars(&a), chars(&b));
        prop_assert_eq!(
            sequence_distance_bounded(&ca, &cb, max),
            oracle_bounded(&ca, &cb, max),
            "a={:?} b={:?} max={}", a, b, max
        );
        prop_assert_eq!(
            distance_bounded(Some(a.as_str()), Some(b.as_str()), max).unwrap(),
            oracle_bounded(&ca, &cb, max)
        );
    }

    /// Byte units agree with the oracle over raw UTF-8.
    #[test]
    fn diff_byte_units_vs_oracle(a in unicode_string(), b in unicode_string()) {
        prop_assert_eq!(
            distance_in(CodeUnit::Byte, Some(a.as_str()), Some(b.as_str()), None).unwrap(),
            oracle_levenshtein(a.as_bytes(), b.as_bytes())
        );
    }

    /// UTF-16 units agree with the oracle over encoded code units.
    #[test]
    fn diff_utf16_units_vs_oracle(a in unicode_string(), b in unicode_string()) {
        let wa: Vec<u16> = a.encode_utf16().collect();
        let wb: Vec<u16> = b.encode_utf16().collect();
        prop_assert_eq!(
            distance_in(CodeUnit::Utf16, Some(a.as_str()), Some(b.as_str()), None).unwrap(),
            oracle_levenshtein(&wa, &wb)
        );
    }
}
