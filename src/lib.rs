//! Levenshtein edit distance with an early-exit bound.
//!
//! The edit distance between two sequences is the minimum number of
//! single-unit insertions, deletions and substitutions that turns one into
//! the other. This crate computes it with the two-row Wagner-Fischer sweep,
//! optionally capped by a maximum distance past which the caller stops caring.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ levenshtein/     │────▶│ levenshtein/     │────▶│ levenshtein/     │
//! │ mod.rs           │     │ units.rs         │     │ sweep.rs         │
//! │ (validate Option,│     │ (char/byte/utf16 │     │ (fast paths,     │
//! │  entry points)   │     │  splitting)      │     │  bounded sweep)  │
//! └──────────────────┘     └──────────────────┘     └──────────────────┘
//!          │                                                 │
//!          ▼                                                 ▼
//! ┌──────────────────┐                              ┌──────────────────┐
//! │ types.rs         │                              │ rows.rs          │
//! │ (DistanceError,  │                              │ (WorkRows double │
//! │  BoundedDistance)│                              │  buffer)         │
//! └──────────────────┘                              └──────────────────┘
//! ```
//!
//! `contracts.rs` holds debug-only assertions that the sweep calls on every
//! row and result.
//!
//! # Usage
//!
//! ```
//! use levdist::{distance, distance_bounded, distance_within, BoundedDistance};
//!
//! assert_eq!(distance(Some("kitten"), Some("sitting")), Ok(3));
//!
//! // Over the bound: `max + 1` comes back as a sentinel
//! assert_eq!(distance_bounded(Some("kitten"), Some("sitting"), 2), Ok(3));
//!
//! // ...or as an explicit verdict
//! assert_eq!(
//!     distance_within(Some("kitten"), Some("sitting"), 2),
//!     Ok(BoundedDistance::Exceeds { max_distance: 2 })
//! );
//!
//! // An unset argument is an error; an empty one is not
//! assert!(distance(None, Some("abc")).is_err());
//! assert_eq!(distance(Some(""), Some("abc")), Ok(3));
//! ```

// Module declarations
pub mod contracts;
mod levenshtein;
mod types;

// Re-exports for public API
pub use levenshtein::{
    distance, distance_bounded, distance_in, distance_within, levenshtein_within,
    sequence_distance, sequence_distance_bounded, CodeUnit,
};
pub use types::{BoundedDistance, DistanceError, Operand, Result};
