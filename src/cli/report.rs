// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What `compare` prints: the distance with the inputs echoed back, or the
//! failure message in place of the number.

use serde::Serialize;

use super::display;
use super::DistanceOptions;
use levdist::{BoundedDistance, CodeUnit, DistanceError};

/// Rendered outcome of one comparison.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Report<'a> {
    Distance {
        text1: &'a str,
        text2: &'a str,
        units: CodeUnit,
        max_distance: Option<usize>,
        /// Exact distance, or `max_distance + 1` when `exceeded`.
        distance: usize,
        exceeded: bool,
    },
    Failure {
        message: String,
    },
}

impl<'a> Report<'a> {
    /// Build a report from the engine's answer for `first`/`second`.
    pub fn new(
        first: Option<&'a str>,
        second: Option<&'a str>,
        options: DistanceOptions,
        outcome: Result<usize, DistanceError>,
    ) -> Self {
        match outcome {
            Ok(distance) => {
                let exceeded = options.max.is_some_and(|max| {
                    !BoundedDistance::from_sentinel(distance, max).is_within()
                });
                Report::Distance {
                    text1: first.unwrap_or_default(),
                    text2: second.unwrap_or_default(),
                    units: options.units,
                    max_distance: options.max,
                    distance,
                    exceeded,
                }
            }
            Err(err) => Report::Failure {
                message: err.to_string(),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Report::Failure { .. })
    }

    /// Plain-text form: just the number (or `> max`), or the message.
    pub fn render_text(&self) -> String {
        match self {
            Report::Distance {
                distance,
                max_distance,
                exceeded,
                ..
            } => {
                let bound = if *exceeded { *max_distance } else { None };
                display::distance_value(*distance, bound)
            }
            Report::Failure { message } => display::failure(message),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
