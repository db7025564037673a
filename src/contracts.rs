//! Runtime contracts for the distance sweep.
//!
//! Debug-mode assertions of the properties the sweep relies on. These are
//! zero-cost in release builds (everything goes through `debug_assert!`) and
//! fail loudly during development and under `cargo test`.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                         |
//! |--------------------------|--------------------------------------------------|
//! | `check_row_width`        | both work rows hold `len(b) + 1` cells           |
//! | `check_row_well_formed`  | adjacent cells of a row differ by at most one    |
//! | `check_row_minimum`      | the tracked row minimum is the true minimum       |
//! | `check_distance_range`   | unbounded result lies in `[|m-n|, max(m, n)]`    |
//! | `check_bounded_result`   | bounded result never exceeds `max + 1`           |
//!
//! # Usage
//!
//! ```ignore
//! use levdist::contracts::*;
//!
//! // In debug builds, this panics if the row has the wrong width
//! check_row_width(current.len(), b.len());
//! ```

// ============================================================================
// ROW CONTRACTS
// ============================================================================

/// Check that a work row has exactly `width + 1` cells.
///
/// # Panics (debug builds only)
/// Panics if `row_len != width + 1`.
#[inline]
pub fn check_row_width(row_len: usize, width: usize) {
    // INVARIANT: row_width (rows always span len(b) + 1 cells)
    debug_assert_eq!(
        row_len,
        width + 1,
        "Contract violation: work row has {} cells, expected {}",
        row_len,
        width + 1
    );
}

/// Check that a completed row is a valid edit-distance row.
///
/// Moving one cell right costs at most one insertion, and a cell can never be
/// cheaper than its left neighbour minus one, so neighbours differ by at most
/// one. The first cell must equal the number of consumed units of `a`.
#[inline]
pub fn check_row_well_formed(row: &[usize], consumed: usize) {
    // INVARIANT: row_start (deleting `consumed` units reaches the empty prefix)
    debug_assert_eq!(
        row.first().copied(),
        Some(consumed),
        "Contract violation: row starts at {:?}, expected {}",
        row.first(),
        consumed
    );

    // INVARIANT: row_lipschitz (adjacent cells differ by at most one edit)
    for (j, pair) in row.windows(2).enumerate() {
        debug_assert!(
            pair[0].abs_diff(pair[1]) <= 1,
            "Contract violation: cells {} and {} differ by more than one ({} vs {})",
            j,
            j + 1,
            pair[0],
            pair[1]
        );
    }
}

/// Check that the running minimum tracked during the sweep is the row minimum.
#[inline]
pub fn check_row_minimum(row: &[usize], tracked: usize) {
    // INVARIANT: row_minimum (early exit compares the real minimum)
    debug_assert_eq!(
        row.iter().copied().min(),
        Some(tracked),
        "Contract violation: tracked row minimum {} does not match row",
        tracked
    );
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check the bounds of an exact (unbounded) distance.
///
/// The length difference is a lower bound (that many insertions or deletions
/// are unavoidable) and the longer length is an upper bound (substitute the
/// overlap, insert or delete the rest).
#[inline]
pub fn check_distance_range(distance: usize, a_len: usize, b_len: usize) {
    // INVARIANT: distance_range (|m - n| <= d <= max(m, n))
    debug_assert!(
        distance >= a_len.abs_diff(b_len) && distance <= a_len.max(b_len),
        "Contract violation: distance {} outside [{}, {}]",
        distance,
        a_len.abs_diff(b_len),
        a_len.max(b_len)
    );
}

/// Check that a bounded result is either exact or the `max + 1` sentinel.
#[inline]
pub fn check_bounded_result(result: usize, max_distance: usize) {
    // INVARIANT: bounded_result (never above the sentinel)
    debug_assert!(
        result <= max_distance.saturating_add(1),
        "Contract violation: bounded result {} above sentinel {}",
        result,
        max_distance.saturating_add(1)
    );
}
