//! Property tests: equality with a tolerance is not transitive, and the
//! transitivity primitive always notices.

use proptest::prelude::*;
use value_objects::{ContractProperty, EqualityTests};

/// Readings are "equal" when within `TOLERANCE` of each other.
#[derive(Debug, Clone, Copy)]
struct Reading(i32);

const TOLERANCE: i32 = 2;

impl PartialEq for Reading {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() <= TOLERANCE
    }
}

proptest! {
    /// Stepping by the full tolerance twice lands outside it.
    #[test]
    fn chained_tolerance_breaks_transitivity(start in -1_000_000i32..1_000_000) {
        let a1 = Reading(start);
        let a2 = Reading(start + TOLERANCE);
        let a3 = Reading(start + 2 * TOLERANCE);

        let err = EqualityTests.verify_transitivity(&a1, &a2, &a3).unwrap_err();
        prop_assert_eq!(err.property, ContractProperty::Transitivity);
        prop_assert!(err.message.contains("since a1 == a2 and a2 == a3"));
    }

    /// Readings inside one tolerance window are still symmetric.
    #[test]
    fn tolerance_is_symmetric(x in -1_000i32..1_000, y in -1_000i32..1_000) {
        prop_assert!(EqualityTests.verify_symmetry(&Reading(x), &Reading(y)).is_ok());
    }

    /// Values far apart give nothing to deduce.
    #[test]
    fn distant_readings_pass(x in -1_000i32..1_000) {
        let far = Reading(x + 100);
        prop_assert!(EqualityTests
            .verify_transitivity(&Reading(x), &far, &Reading(x + 200))
            .is_ok());
    }
}
