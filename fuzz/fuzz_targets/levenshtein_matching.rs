// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the distance engine.
//!
//! Arbitrary text pairs and bounds go through every entry point. The exact
//! and bounded answers must agree with each other and stay inside the
//! metric's length bounds.

#![no_main]

use arbitrary::Arbitrary;
use levdist::{
    distance, distance_bounded, distance_in, distance_within, levenshtein_within, CodeUnit,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for distance computation
#[derive(Debug, Arbitrary)]
struct MatchInput {
    first_bytes: Vec<u8>,
    second_bytes: Vec<u8>,
    /// Bound for the bounded entry points (kept small so early exits fire)
    max_distance: u8,
}

fuzz_target!(|input: MatchInput| {
    let first = String::from_utf8_lossy(&input.first_bytes);
    let second = String::from_utf8_lossy(&input.second_bytes);

    // Cap lengths to avoid quadratic timeouts
    let first: String = first.chars().take(64).collect();
    let second: String = second.chars().take(64).collect();
    let max = usize::from(input.max_distance % 16);
    let (a, b) = (Some(first.as_str()), Some(second.as_str()));

    let exact = distance(a, b).expect("both operands present");

    // INVARIANT 1: Symmetry
    assert_eq!(
        exact,
        distance(b, a).expect("both operands present"),
        "distance not symmetric for first='{}', second='{}'",
        first,
        second
    );

    // INVARIANT 2: Length bounds
    let first_len = first.chars().count();
    let second_len = second.chars().count();
    assert!(
        exact >= first_len.abs_diff(second_len),
        "distance {} below length gap for first='{}', second='{}'",
        exact,
        first,
        second
    );
    assert!(
        exact <= first_len.max(second_len),
        "distance {} above longer length for first='{}', second='{}'",
        exact,
        first,
        second
    );

    // INVARIANT 3: Zero only for equal text
    assert_eq!(exact == 0, first == second);

    // INVARIANT 4: Bounded answer is exact or the sentinel
    let bounded = distance_bounded(a, b, max).expect("both operands present");
    assert_eq!(
        bounded,
        exact.min(max + 1),
        "bounded {} disagrees with exact {} at max={} for first='{}', second='{}'",
        bounded,
        exact,
        max,
        first,
        second
    );

    // INVARIANT 5: Explicit verdict carries the same answer
    let verdict = distance_within(a, b, max).expect("both operands present");
    assert_eq!(verdict.to_sentinel(), bounded);
    assert_eq!(levenshtein_within(&first, &second, max), exact <= max);

    // INVARIANT 6: Other unit choices still satisfy the bound
    for units in [CodeUnit::Byte, CodeUnit::Utf16] {
        let unbounded = distance_in(units, a, b, None).expect("both operands present");
        let clipped = distance_in(units, a, b, Some(max)).expect("both operands present");
        assert_eq!(clipped, unbounded.min(max + 1), "units={}", units);
    }

    // INVARIANT 7: Missing operands are rejected, never panic
    assert!(distance(None, b).is_err());
    assert!(distance_bounded(a, None, max).is_err());
});
