//! Panicking assertions for use directly inside `#[test]` functions.

use crate::equality::EqualityTests;
use crate::instances::Instances;
use crate::runner::ConformanceRunner;
use std::fmt::Debug;
use std::hash::Hash;

/// Panic unless `T` obeys both the equality and the hashing contract.
#[track_caller]
pub fn assert_equals_and_hashcode<T, I>(instances: &I)
where
    T: PartialEq + Hash + Debug,
    I: Instances<T> + ?Sized,
{
    if let Err(violation) = EqualityTests.verify_equals_and_hashcode(instances) {
        panic!("{}", violation);
    }
}

/// Panic unless `T` obeys the equality contract.
#[track_caller]
pub fn assert_equals<T, I>(instances: &I)
where
    T: PartialEq + Debug,
    I: Instances<T> + ?Sized,
{
    if let Err(violation) = EqualityTests.verify_equals(instances) {
        panic!("{}", violation);
    }
}

/// Panic unless equal instances of `T` hash equally.
#[track_caller]
pub fn assert_hashcode<T, I>(instances: &I)
where
    T: PartialEq + Hash + Debug,
    I: Instances<T> + ?Sized,
{
    if let Err(violation) = EqualityTests.verify_hashcode(instances) {
        panic!("{}", violation);
    }
}

/// Run every property and panic with the full report if any failed.
#[track_caller]
pub fn assert_conformant<T, I>(instances: &I)
where
    T: PartialEq + Hash + Debug,
    I: Instances<T> + ?Sized,
{
    match ConformanceRunner::new().run(instances) {
        Ok(report) if report.all_passed() => {}
        Ok(report) => panic!(
            "type '{}' does not conform to the equality contract:\n{}",
            report.type_name, report
        ),
        Err(e) => panic!("conformance run failed: {}", e),
    }
}
