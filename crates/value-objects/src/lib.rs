//! Value-object contract checks.
//!
//! Verifies that a type's `PartialEq` and `Hash` implementations obey the
//! equivalence-relation contract, driven by an [`Instances`] factory that
//! hands out fresh sample values.
//!
//! # Properties
//!
//! | Property | Group | Part of `verify_equals` |
//! |----------|-------|-------------------------|
//! | Reflexivity | Equality | yes |
//! | Symmetry | Equality | yes |
//! | Transitivity | Equality | yes |
//! | Null inequality | Equality | yes |
//! | Consistency | Equality | runner only |
//! | Hash consistency | Hashing | `verify_hashcode` |
//!
//! # Quick Start
//!
//! ```rust
//! use value_objects::{ConformanceRunner, EqualityTests, FnInstances};
//!
//! let instances = FnInstances::new(|| String::from("a"), || String::from("b"));
//! EqualityTests.verify_equals_and_hashcode(&instances).unwrap();
//!
//! let report = ConformanceRunner::new().run(&instances).unwrap();
//! assert!(report.all_passed());
//! ```

#![deny(unsafe_code)]

pub mod equality;
pub mod error;
pub mod harness;
pub mod instances;
pub mod report;
pub mod runner;
pub mod types;

// Re-export key types at crate root.
pub use equality::{hash_code, EqualityTests};
pub use error::{ConformanceError, ConformanceResult, ContractResult, ContractViolation};
pub use harness::{assert_conformant, assert_equals, assert_equals_and_hashcode, assert_hashcode};
pub use instances::{FnInstances, Instances};
pub use report::{ConformanceReport, GroupReport};
pub use runner::ConformanceRunner;
pub use types::{
    ConformanceConfig, ConformanceSummary, ContractProperty, PropertyGroup, PropertyResult,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_conformance_pass() {
        let instances = FnInstances::new(|| vec![1u8, 2, 3], || vec![3u8, 2, 1]);
        let report = ConformanceRunner::new().run(&instances).unwrap();
        assert!(
            report.all_passed(),
            "Not all properties passed: {} failed",
            report.summary.failed
        );
        assert_eq!(report.summary.total, 6);
    }

    #[test]
    fn test_report_display() {
        let instances = FnInstances::new(|| 'x', || 'y');
        let report = ConformanceRunner::new().run(&instances).unwrap();
        let output = format!("{}", report);
        assert!(output.contains("Equality Contract Report"));
        assert!(output.contains("SATISFIED"));
    }

    #[test]
    fn test_report_json_serialization() {
        let instances = FnInstances::new(|| 1i64, || -1i64);
        let report = ConformanceRunner::new().run(&instances).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"total\": 6"));
        let deserialized: ConformanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.summary.total, 6);
    }

    #[test]
    fn test_verify_via_trait_object() {
        let instances = FnInstances::new(|| 5u16, || 6u16);
        let dynamic: &dyn Instances<u16> = &instances;
        assert!(EqualityTests.verify_equals_and_hashcode(dynamic).is_ok());
    }
}
