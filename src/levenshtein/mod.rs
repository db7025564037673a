// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit bound.
//!
//! Two families of entry points share one sweep:
//!
//! - **Validated string entry points** (`distance`, `distance_bounded`,
//!   `distance_within`, `distance_in`) take `Option<&str>`. `None` stands for
//!   an argument the caller never set (an unfilled form field, a missing CLI
//!   positional) and comes back as [`DistanceError::InvalidInput`]. An empty
//!   string is a perfectly good input.
//! - **Slice entry points** (`sequence_distance`, `sequence_distance_bounded`)
//!   take `&[T]` for any `T: PartialEq` and can't fail.
//!
//! The bound is a promise about how much the caller cares: once every cell of
//! a row exceeds it, no path through the matrix can come back under, so the
//! sweep stops and reports `max_distance + 1`. With a tight bound most
//! non-matches are rejected after a handful of rows, or before allocating
//! anything when the lengths alone are too far apart.

mod rows;
mod sweep;
mod units;

pub use sweep::{sequence_distance, sequence_distance_bounded};
pub use units::CodeUnit;

use crate::types::{BoundedDistance, DistanceError, Operand, Result};

/// Edit distance between two strings, counted in `char`s.
///
/// # Examples
///
/// ```
/// use levdist::distance;
///
/// assert_eq!(distance(Some("kitten"), Some("sitting")), Ok(3));
/// assert_eq!(distance(Some(""), Some("abc")), Ok(3));
/// assert!(distance(None, Some("abc")).is_err());
/// ```
pub fn distance(a: Option<&str>, b: Option<&str>) -> Result<usize> {
    distance_in(CodeUnit::Char, a, b, None)
}

/// Edit distance if it is `<= max_distance`, otherwise `max_distance + 1`.
///
/// The value above the bound is a sentinel, not a distance: the sweep stops
/// as soon as the verdict is certain.
///
/// ```
/// use levdist::distance_bounded;
///
/// assert_eq!(distance_bounded(Some("kitten"), Some("sitting"), 2), Ok(3)); // sentinel
/// assert_eq!(distance_bounded(Some("kitten"), Some("sitting"), 5), Ok(3)); // exact
/// ```
pub fn distance_bounded(a: Option<&str>, b: Option<&str>, max_distance: usize) -> Result<usize> {
    distance_in(CodeUnit::Char, a, b, Some(max_distance))
}

/// Bounded comparison with the verdict spelled out instead of encoded.
///
/// ```
/// use levdist::{distance_within, BoundedDistance};
///
/// assert_eq!(
///     distance_within(Some("kitten"), Some("sitting"), 2),
///     Ok(BoundedDistance::Exceeds { max_distance: 2 })
/// );
/// assert_eq!(
///     distance_within(Some("flaw"), Some("lawn"), 2),
///     Ok(BoundedDistance::Within(2))
/// );
/// ```
pub fn distance_within(
    a: Option<&str>,
    b: Option<&str>,
    max_distance: usize,
) -> Result<BoundedDistance> {
    let sentinel = distance_bounded(a, b, max_distance)?;
    Ok(BoundedDistance::from_sentinel(sentinel, max_distance))
}

/// General form of the validated entry points.
///
/// `units` picks how strings are split (see [`CodeUnit`]); `max_distance`
/// of `None` disables the bound entirely.
pub fn distance_in(
    units: CodeUnit,
    a: Option<&str>,
    b: Option<&str>,
    max_distance: Option<usize>,
) -> Result<usize> {
    let (a, b) = validate(a, b)?;
    Ok(units.sweep(a, b, max_distance))
}

/// Are these strings within `max` edits of each other?
///
/// Infallible shorthand for callers that already hold both strings.
///
/// ```
/// use levdist::levenshtein_within;
///
/// assert!(levenshtein_within("hello", "hallo", 1));
/// assert!(!levenshtein_within("a", "abcdef", 1));
/// ```
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    CodeUnit::Char.sweep(a, b, Some(max)) <= max
}

/// Reject absent operands before any work is done.
fn validate<'a>(a: Option<&'a str>, b: Option<&'a str>) -> Result<(&'a str, &'a str)> {
    let a = a.ok_or(DistanceError::InvalidInput {
        operand: Operand::First,
    })?;
    let b = b.ok_or(DistanceError::InvalidInput {
        operand: Operand::Second,
    })?;
    Ok((a, b))
}
