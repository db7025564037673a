//! Absent operands fail, empty ones don't.

use crate::common::unicode_string;
use levdist::{
    distance, distance_bounded, distance_in, distance_within, CodeUnit, DistanceError, Operand,
};
use proptest::prelude::*;

fn missing(operand: Operand) -> DistanceError {
    DistanceError::InvalidInput { operand }
}

#[test]
fn absent_operands_fail_every_entry_point() {
    assert_eq!(distance(None, Some("x")), Err(missing(Operand::First)));
    assert_eq!(distance(Some("x"), None), Err(missing(Operand::Second)));
    assert_eq!(distance_bounded(None, None, 0), Err(missing(Operand::First)));
    assert_eq!(
        distance_within(Some(""), None, 7),
        Err(missing(Operand::Second))
    );
    for units in [CodeUnit::Char, CodeUnit::Byte, CodeUnit::Utf16] {
        assert_eq!(
            distance_in(units, None, Some(""), Some(1)),
            Err(missing(Operand::First))
        );
    }
}

#[test]
fn failure_message_is_renderable() {
    let err = distance(Some("token1"), None).unwrap_err();
    assert_eq!(err.to_string(), "second sequence is missing");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}

proptest! {
    /// Property: any present string against an absent one fails, whatever it holds.
    #[test]
    fn prop_absent_always_fails(s in unicode_string(), k in any::<Option<usize>>()) {
        prop_assert_eq!(
            distance_in(CodeUnit::Char, Some(s.as_str()), None, k),
            Err(missing(Operand::Second))
        );
        prop_assert_eq!(
            distance_in(CodeUnit::Char, None, Some(s.as_str()), k),
            Err(missing(Operand::First))
        );
    }

    /// Property: empty operands never fail.
    #[test]
    fn prop_empty_never_fails(s in unicode_string(), k in 0usize..8) {
        prop_assert!(distance(Some(""), Some(s.as_str())).is_ok());
        prop_assert!(distance_bounded(Some(s.as_str()), Some(""), k).is_ok());
    }
}
