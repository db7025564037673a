// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result and error types shared by the distance entry points.
//!
//! There is exactly one way to fail: handing the engine an absent sequence.
//! Empty sequences are fine (they hit a fast path). Everything else is a
//! plain `usize` or, for callers who prefer not to decode the `max + 1`
//! sentinel themselves, a [`BoundedDistance`].

use serde::Serialize;
use std::fmt;

/// Which argument of a two-sequence call was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// Error returned by the validated entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// A sequence argument was `None`. Empty sequences never produce this.
    #[error("{operand} sequence is missing")]
    InvalidInput { operand: Operand },
}

impl DistanceError {
    /// The operand that was missing.
    pub fn operand(&self) -> Operand {
        match self {
            DistanceError::InvalidInput { operand } => *operand,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DistanceError>;

/// Outcome of a bounded comparison, without the sentinel encoding.
///
/// `distance_bounded` reports "over the limit" as `max_distance + 1`. This
/// type carries the same information as an explicit variant; the two forms
/// convert losslessly via [`BoundedDistance::from_sentinel`] and
/// [`BoundedDistance::to_sentinel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundedDistance {
    /// The exact distance, which is `<= max_distance`.
    Within(usize),
    /// The distance is strictly greater than `max_distance`.
    Exceeds { max_distance: usize },
}

impl BoundedDistance {
    /// Decode a sentinel-style result produced under `max_distance`.
    pub fn from_sentinel(value: usize, max_distance: usize) -> Self {
        if value > max_distance {
            BoundedDistance::Exceeds { max_distance }
        } else {
            BoundedDistance::Within(value)
        }
    }

    /// Encode back into the sentinel form (`max_distance + 1` when exceeded).
    pub fn to_sentinel(self) -> usize {
        match self {
            BoundedDistance::Within(d) => d,
            BoundedDistance::Exceeds { max_distance } => exceeded(max_distance),
        }
    }

    /// The exact distance, if it was within the bound.
    pub fn value(self) -> Option<usize> {
        match self {
            BoundedDistance::Within(d) => Some(d),
            BoundedDistance::Exceeds { .. } => None,
        }
    }

    pub fn is_within(self) -> bool {
        matches!(self, BoundedDistance::Within(_))
    }
}

/// The "distance exceeds bound" sentinel.
///
/// Saturates at `usize::MAX`; no real distance can get there because it is
/// bounded by the longer input's length.
#[inline]
pub(crate) fn exceeded(max_distance: usize) -> usize {
    max_distance.saturating_add(1)
}
