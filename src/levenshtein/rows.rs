// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-row double buffer behind the sweep.
//!
//! A full `(m+1) × (n+1)` matrix is never materialized. Row `i` only depends
//! on row `i - 1`, so two buffers of `n + 1` cells are enough: fill `current`
//! from `previous`, then swap the two by reference. The old `previous`
//! allocation is reused as the next `current`, so the sweep allocates exactly
//! twice no matter how long the first input is.

/// Previous and current rows of the edit-distance matrix.
#[derive(Debug, Clone)]
pub(crate) struct WorkRows {
    previous: Vec<usize>,
    current: Vec<usize>,
}

impl WorkRows {
    /// Rows for a second operand of length `width`.
    ///
    /// `previous` starts as `0, 1, ..., width`: turning the empty prefix of the
    /// first input into `k` units of the second takes `k` insertions.
    pub(crate) fn new(width: usize) -> Self {
        Self {
            previous: (0..=width).collect(),
            current: vec![0; width + 1],
        }
    }

    /// Borrow both rows at once: `previous` to read, `current` to fill.
    #[inline]
    pub(crate) fn split(&mut self) -> (&[usize], &mut [usize]) {
        (&self.previous, &mut self.current)
    }

    /// Promote `current` to `previous`. No cells are copied.
    #[inline]
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
    }

    /// Cell count of each row (`width + 1`).
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.previous.len()
    }

    /// Final answer once every row has been processed and swapped.
    #[inline]
    pub(crate) fn last(&self) -> usize {
        self.previous[self.previous.len() - 1]
    }
}
