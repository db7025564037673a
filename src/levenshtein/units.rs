// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What counts as "one character" when comparing strings.
//!
//! Rust strings are UTF-8, so there are three reasonable answers: Unicode
//! scalar values (`char`), raw bytes, or UTF-16 code units. They agree on
//! ASCII and diverge as soon as a character needs more than one unit: `"é"`
//! is one char, two bytes, one UTF-16 unit; `"𝄞"` is one char, four bytes,
//! two UTF-16 units.

use serde::Serialize;
use std::fmt;

use super::sweep::bounded_sweep;

/// Unit of comparison for the string entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CodeUnit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// UTF-8 bytes.
    Byte,
    /// UTF-16 code units, the unit JVM and JavaScript strings index by.
    Utf16,
}

impl CodeUnit {
    /// Number of units in `s`.
    pub fn count(self, s: &str) -> usize {
        match self {
            CodeUnit::Char => s.chars().count(),
            CodeUnit::Byte => s.len(),
            CodeUnit::Utf16 => s.encode_utf16().count(),
        }
    }

    /// Split both strings into units and run the sweep.
    pub(crate) fn sweep(self, a: &str, b: &str, ceiling: Option<usize>) -> usize {
        match self {
            CodeUnit::Char => {
                let a: Vec<char> = a.chars().collect();
                let b: Vec<char> = b.chars().collect();
                bounded_sweep(&a, &b, ceiling)
            }
            // Bytes are already a slice, no copy needed
            CodeUnit::Byte => bounded_sweep(a.as_bytes(), b.as_bytes(), ceiling),
            CodeUnit::Utf16 => {
                let a: Vec<u16> = a.encode_utf16().collect();
                let b: Vec<u16> = b.encode_utf16().collect();
                bounded_sweep(&a, &b, ceiling)
            }
        }
    }
}

impl fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeUnit::Char => write!(f, "char"),
            CodeUnit::Byte => write!(f, "byte"),
            CodeUnit::Utf16 => write!(f, "utf16"),
        }
    }
}
