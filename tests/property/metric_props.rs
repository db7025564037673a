//! Edit distance is a metric: identity, symmetry, length bounds, triangle
//! inequality.

use crate::common::{diacritic_word, narrow_string, unicode_string, word_string};
use levdist::distance;
use proptest::prelude::*;

fn d(a: &str, b: &str) -> usize {
    distance(Some(a), Some(b)).expect("both operands present")
}

fn len(s: &str) -> usize {
    s.chars().count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: a string is at distance 0 from itself.
    #[test]
    fn prop_identity(s in unicode_string()) {
        prop_assert_eq!(d(&s, &s), 0);
    }

    /// Property: distance 0 only for equal strings.
    #[test]
    fn prop_zero_means_equal(a in narrow_string(), b in narrow_string()) {
        prop_assert_eq!(d(&a, &b) == 0, a == b);
    }

    /// Property: swapping the operands changes nothing.
    #[test]
    fn prop_symmetry(a in word_string(), b in word_string()) {
        prop_assert_eq!(d(&a, &b), d(&b, &a));
    }

    /// Property: symmetry holds across scripts and planes too.
    #[test]
    fn prop_symmetry_unicode(a in unicode_string(), b in unicode_string()) {
        prop_assert_eq!(d(&a, &b), d(&b, &a));
    }

    /// Property: |len(a) - len(b)| <= d(a, b) <= max(len(a), len(b)).
    #[test]
    fn prop_length_bounds(a in word_string(), b in word_string()) {
        let dist = d(&a, &b);
        prop_assert!(dist >= len(&a).abs_diff(len(&b)), "below length gap: {}", dist);
        prop_assert!(dist <= len(&a).max(len(&b)), "above longer length: {}", dist);
    }

    /// Property: against the empty string, distance is the length in chars.
    #[test]
    fn prop_empty_operand(s in unicode_string()) {
        prop_assert_eq!(d(&s, ""), len(&s));
        prop_assert_eq!(d("", &s), len(&s));
    }

    /// Property: d(a, c) <= d(a, b) + d(b, c).
    #[test]
    fn prop_triangle_inequality(
        a in narrow_string(),
        b in narrow_string(),
        c in narrow_string(),
    ) {
        prop_assert!(d(&a, &c) <= d(&a, &b) + d(&b, &c));
    }

    /// Property: one appended char is one edit, whatever its width in bytes.
    #[test]
    fn prop_append_is_one_edit(s in diacritic_word(), c in any::<char>()) {
        let mut extended = s.clone();
        extended.push(c);
        prop_assert_eq!(d(&s, &extended), 1);
    }

    /// Property: one substituted char is one edit.
    #[test]
    fn prop_substitution_is_one_edit(s in "[a-z]{1,20}", idx in any::<prop::sample::Index>()) {
        let mut cs: Vec<char> = s.chars().collect();
        let i = idx.index(cs.len());
        cs[i] = if cs[i] == 'x' { 'y' } else { 'x' };
        let mutated: String = cs.into_iter().collect();
        prop_assert_eq!(d(&s, &mutated), 1);
    }
}
