// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded Wagner-Fischer sweep over arbitrary unit slices.
//!
//! Everything here works on `&[T]` for any `T: PartialEq`, so the same code
//! serves `char`, `u8` and `u16` units. Slices can't be absent, so nothing in
//! this module fails; validation lives one level up.
//!
//! The ceiling is an `Option<usize>`. `None` means "no ceiling" and disables
//! both early exits, which is how the unbounded entry points share this code
//! without picking a magic "very large" maximum.

use super::rows::WorkRows;
use crate::contracts::{
    check_bounded_result, check_distance_range, check_row_minimum, check_row_well_formed,
    check_row_width,
};
use crate::types::exceeded;

/// Edit distance between two unit sequences, no ceiling.
///
/// # Examples
///
/// ```
/// use levdist::sequence_distance;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(sequence_distance(&a, &b), 3);
/// assert_eq!(sequence_distance(b"flaw", b"lawn"), 2);
/// ```
pub fn sequence_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let distance = bounded_sweep(a, b, None);
    check_distance_range(distance, a.len(), b.len());
    distance
}

/// Edit distance with a ceiling: exact if `<= max_distance`, otherwise
/// `max_distance + 1`.
///
/// ```
/// use levdist::sequence_distance_bounded;
///
/// assert_eq!(sequence_distance_bounded(b"kitten", b"sitting", 2), 3);
/// assert_eq!(sequence_distance_bounded(b"kitten", b"sitting", 5), 3);
/// assert_eq!(sequence_distance_bounded(b"abc", b"xyz", 1), 2);
/// ```
pub fn sequence_distance_bounded<T: PartialEq>(a: &[T], b: &[T], max_distance: usize) -> usize {
    let result = bounded_sweep(a, b, Some(max_distance));
    check_bounded_result(result, max_distance);
    result
}

/// Shared core of every entry point.
///
/// Fast paths first, in a fixed order: empty `a`, empty `b`, equal inputs,
/// then (bounded only) the length gap. Only if none of them applies are the
/// work rows allocated.
pub(crate) fn bounded_sweep<T: PartialEq>(a: &[T], b: &[T], ceiling: Option<usize>) -> usize {
    if a.is_empty() {
        return clip(b.len(), ceiling);
    }
    if b.is_empty() {
        return clip(a.len(), ceiling);
    }
    if a == b {
        return 0;
    }

    // `|len(a) - len(b)|` is a lower bound on edit distance
    if let Some(max) = ceiling {
        if a.len().abs_diff(b.len()) > max {
            return exceeded(max);
        }
    }

    let mut rows = WorkRows::new(b.len());
    check_row_width(rows.len(), b.len());

    for (i, unit_a) in a.iter().enumerate() {
        let (previous, current) = rows.split();
        current[0] = i + 1;
        let mut row_min = i + 1;

        for (j, unit_b) in b.iter().enumerate() {
            current[j + 1] = if unit_a == unit_b {
                previous[j]
            } else {
                // deletion, insertion, substitution
                1 + previous[j + 1].min(current[j]).min(previous[j])
            };
            row_min = row_min.min(current[j + 1]);
        }

        check_row_well_formed(current, i + 1);
        check_row_minimum(current, row_min);

        // Every path to the final cell crosses this row, so the distance is
        // at least `row_min` from here on.
        if let Some(max) = ceiling {
            if row_min > max {
                return exceeded(max);
            }
        }

        rows.swap();
    }

    // The row-minimum test can pass while the last cell still overshoots.
    clip(rows.last(), ceiling)
}

/// Apply the sentinel rule to an exact value.
#[inline]
fn clip(distance: usize, ceiling: Option<usize>) -> usize {
    match ceiling {
        Some(max) if distance > max => exceeded(max),
        _ => distance,
    }
}
