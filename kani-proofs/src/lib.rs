// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the levdist sweep.
//!
//! This standalone crate carries the two-row sweep over fixed-capacity
//! byte arrays and proves its properties for every input up to
//! `MAX_LEN` units using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the sweep never indexes out of bounds or overflows
//! 2. **Identity**: d(a, a) == 0
//! 3. **Symmetry**: d(a, b) == d(b, a)
//! 4. **Bounded equivalence**: the early exits return min(d(a, b), max + 1)

/// Longest input the proofs enumerate. Kani cost grows fast with this.
pub const MAX_LEN: usize = 4;

// ============================================================================
// SWEEP (fixed-width copy of src/levenshtein/sweep.rs)
// ============================================================================

/// Edit distance with an optional ceiling over byte slices of at most
/// `MAX_LEN` units.
pub fn sweep(a: &[u8], b: &[u8], ceiling: Option<usize>) -> usize {
    assert!(a.len() <= MAX_LEN && b.len() <= MAX_LEN);

    if a.is_empty() {
        return clip(b.len(), ceiling);
    }
    if b.is_empty() {
        return clip(a.len(), ceiling);
    }
    if a == b {
        return 0;
    }
    if let Some(max) = ceiling {
        if a.len().abs_diff(b.len()) > max {
            return max.saturating_add(1);
        }
    }

    let width = b.len() + 1;
    let mut previous = [0usize; MAX_LEN + 1];
    let mut current = [0usize; MAX_LEN + 1];
    for (j, cell) in previous.iter_mut().enumerate().take(width) {
        *cell = j;
    }

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        let mut row_min = current[0];
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let cell = (previous[j] + cost)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
            current[j + 1] = cell;
            row_min = row_min.min(cell);
        }
        if let Some(max) = ceiling {
            if row_min > max {
                return max.saturating_add(1);
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    clip(previous[b.len()], ceiling)
}

fn clip(value: usize, ceiling: Option<usize>) -> usize {
    match ceiling {
        Some(max) if value > max => max.saturating_add(1),
        _ => value,
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic slice of length `<= MAX_LEN` over a two-letter alphabet.
    fn any_input(buf: &mut [u8; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for cell in buf.iter_mut() {
            *cell = kani::any_where(|&c: &u8| c == b'a' || c == b'b');
        }
        len
    }

    /// Verify the sweep never panics for any inputs and any ceiling.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_sweep_no_panic() {
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        let la = any_input(&mut a);
        let lb = any_input(&mut b);
        let ceiling: Option<usize> = if kani::any() { Some(kani::any()) } else { None };

        let d = sweep(&a[..la], &b[..lb], ceiling);

        if ceiling.is_none() {
            kani::assert(d <= la.max(lb), "distance must not exceed longer length");
            kani::assert(d >= la.abs_diff(lb), "distance must not undercut length gap");
        }
    }

    /// Verify d(a, a) == 0.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_identity() {
        let mut a = [0u8; MAX_LEN];
        let la = any_input(&mut a);
        kani::assert(sweep(&a[..la], &a[..la], None) == 0, "identity must hold");
    }

    /// Verify d(a, b) == d(b, a).
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_symmetry() {
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        let la = any_input(&mut a);
        let lb = any_input(&mut b);
        kani::assert(
            sweep(&a[..la], &b[..lb], None) == sweep(&b[..lb], &a[..la], None),
            "symmetry must hold",
        );
    }

    /// Verify the bounded sweep equals the unbounded one clipped to max + 1.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_bounded_equivalence() {
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        let la = any_input(&mut a);
        let lb = any_input(&mut b);
        let max: usize = kani::any_where(|&k| k <= MAX_LEN + 1);

        let exact = sweep(&a[..la], &b[..lb], None);
        let bounded = sweep(&a[..la], &b[..lb], Some(max));
        kani::assert(bounded == exact.min(max + 1), "bounded must clip exact");
    }
}
