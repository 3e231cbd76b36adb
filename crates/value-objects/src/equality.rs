//! Checks that a type's `PartialEq` and `Hash` implementations obey the
//! equivalence-relation contract.
//!
//! | Property | Holds when |
//! |----------|------------|
//! | reflexivity | two distinct primary instances are equal, and each equals itself |
//! | symmetry | `a == b` and `b == a` agree |
//! | transitivity | `a1 == a2 && a2 == a3` implies `a1 == a3` |
//! | null inequality | no instance equals the absent value |
//! | consistency | repeated comparisons agree |
//! | hash consistency | equal instances hash equally |
//!
//! Every check draws fresh values from an [`Instances`] factory and stops at
//! the first violation.

use crate::error::{ContractResult, ContractViolation};
use crate::instances::Instances;
use crate::types::ContractProperty;
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};

/// Stateless verifier for the equality and hashing contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct EqualityTests;

impl EqualityTests {
    pub fn new() -> Self {
        Self
    }

    /// Verify the equality contract, then the hashing contract.
    pub fn verify_equals_and_hashcode<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Hash + Debug,
        I: Instances<T> + ?Sized,
    {
        self.verify_equals(instances)?;
        self.verify_hashcode(instances)
    }

    /// Reflexivity, symmetry, transitivity and null inequality, in that order.
    pub fn verify_equals<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        self.check_reflexive(instances)?;
        self.check_symmetric(instances)?;
        self.check_transitive(instances)?;
        self.check_not_equal_null(instances)
    }

    pub fn verify_hashcode<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Hash + Debug,
        I: Instances<T> + ?Sized,
    {
        self.check_equal_hashcodes(instances)
    }

    /// Two primary instances must be distinct objects yet equal.
    pub fn check_reflexive<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        let property = ContractProperty::Reflexivity;
        tracing::debug!(%property, "checking");

        let a1 = instances.primary();
        let a2 = instances.primary();

        if instances.same_instance(&a1, &a2) {
            return Err(violation(
                property,
                format!(
                    "expected distinct instances, but a1 ({:?}) and a2 ({:?}) are the same instance",
                    a1, a2
                ),
            ));
        }
        if !PartialEq::eq(&a1, &a1) {
            return Err(violation(
                property,
                format!("expected a1 ({:?}) to equal itself", a1),
            ));
        }
        if a1 != a2 {
            return Err(violation(
                property,
                format!("expected a1 ({:?}) to equal a2 ({:?})", a1, a2),
            ));
        }
        Ok(())
    }

    /// Symmetry between a primary and a secondary instance, then between
    /// two primary instances.
    pub fn check_symmetric<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        tracing::debug!(property = %ContractProperty::Symmetry, "checking");

        let a = instances.primary();
        let b = instances.secondary();
        self.verify_symmetry(&a, &b)?;
        let a2 = instances.primary();
        self.verify_symmetry(&a, &a2)
    }

    /// `a == b` must agree with `b == a`.
    pub fn verify_symmetry<T>(&self, a: &T, b: &T) -> ContractResult
    where
        T: PartialEq + Debug,
    {
        let property = ContractProperty::Symmetry;
        if a == b {
            if b != a {
                return Err(violation(
                    property,
                    format!(
                        "expected symmetric equality, but b ({:?}) != a ({:?})",
                        b, a
                    ),
                ));
            }
        } else if b == a {
            return Err(violation(
                property,
                format!(
                    "expected symmetric inequality, but a ({:?}) == b ({:?})",
                    a, b
                ),
            ));
        }
        Ok(())
    }

    /// Transitivity over three primary instances.
    pub fn check_transitive<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        tracing::debug!(property = %ContractProperty::Transitivity, "checking");

        let a1 = instances.primary();
        let a2 = instances.primary();
        let a3 = instances.primary();
        self.verify_transitivity(&a1, &a2, &a3)
    }

    /// Whatever can be deduced about `a1 == a3` from `a1 == a2` and
    /// `a2 == a3` must hold.
    pub fn verify_transitivity<T>(&self, a1: &T, a2: &T, a3: &T) -> ContractResult
    where
        T: PartialEq + Debug,
    {
        let property = ContractProperty::Transitivity;
        match (a1 == a2, a2 == a3) {
            (true, true) if a1 != a3 => Err(violation(
                property,
                format!(
                    "expected a1 ({:?}) == a3 ({:?}) since a1 == a2 and a2 == a3",
                    a1, a3
                ),
            )),
            (true, false) if a1 == a3 => Err(violation(
                property,
                format!(
                    "expected a1 ({:?}) != a3 ({:?}) since a1 == a2 and a2 != a3",
                    a1, a3
                ),
            )),
            (false, true) if a1 == a3 => Err(violation(
                property,
                format!(
                    "expected a1 ({:?}) != a3 ({:?}) since a1 != a2 and a2 == a3",
                    a1, a3
                ),
            )),
            // Nothing can be deduced when neither pair is equal.
            _ => Ok(()),
        }
    }

    /// Neither a primary nor a secondary instance may equal the absent value.
    pub fn check_not_equal_null<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        let property = ContractProperty::NullInequality;
        let Some(absent) = instances.absent() else {
            tracing::debug!(%property, "type has no absent value, holds trivially");
            return Ok(());
        };
        tracing::debug!(%property, "checking");

        let a = instances.primary();
        self.verify_not_null(&a, &absent)?;
        let b = instances.secondary();
        self.verify_not_null(&b, &absent)
    }

    /// `a == absent` must return `false`; a panic counts as a violation.
    pub fn verify_not_null<T>(&self, a: &T, absent: &T) -> ContractResult
    where
        T: PartialEq + Debug,
    {
        let property = ContractProperty::NullInequality;
        match panic::catch_unwind(AssertUnwindSafe(|| a == absent)) {
            Ok(false) => Ok(()),
            Ok(true) => Err(violation(
                property,
                format!("instance ({:?}) should not equal null ({:?})", a, absent),
            )),
            Err(payload) => Err(violation(
                property,
                format!(
                    "instance ({:?}) panicked when compared with null: {}",
                    a,
                    panic_message(payload.as_ref())
                ),
            )),
        }
    }

    /// Repeated comparisons of the same operands must keep returning the
    /// first answer.
    pub fn check_consistent<T, I>(&self, instances: &I, rounds: usize) -> ContractResult
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        tracing::debug!(property = %ContractProperty::Consistency, rounds, "checking");

        let a = instances.primary();
        let a2 = instances.primary();
        let b = instances.secondary();
        self.verify_consistency(&a, &a2, rounds)?;
        self.verify_consistency(&a, &b, rounds)
    }

    pub fn verify_consistency<T>(&self, a: &T, b: &T, rounds: usize) -> ContractResult
    where
        T: PartialEq + Debug,
    {
        let first = a == b;
        for round in 1..rounds {
            let again = a == b;
            if again != first {
                return Err(violation(
                    ContractProperty::Consistency,
                    format!(
                        "expected repeated comparisons of a ({:?}) and b ({:?}) to agree, but round {} returned {}",
                        a,
                        b,
                        round + 1,
                        again
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Two equal primary instances must produce the same hash code.
    pub fn check_equal_hashcodes<T, I>(&self, instances: &I) -> ContractResult
    where
        T: PartialEq + Hash + Debug,
        I: Instances<T> + ?Sized,
    {
        let property = ContractProperty::HashConsistency;
        tracing::debug!(%property, "checking");

        let a1 = instances.primary();
        let a2 = instances.primary();
        if a1 != a2 {
            return Err(violation(
                property,
                format!("expected a1 ({:?}) to equal a2 ({:?})", a1, a2),
            ));
        }

        let h1 = hash_code(&a1);
        let h2 = hash_code(&a2);
        if h1 != h2 {
            return Err(violation(
                property,
                format!(
                    "expected equal hash codes for a1 ({:?}) and a2 ({:?}), but got {:#018x} and {:#018x}",
                    a1, a2, h1, h2
                ),
            ));
        }
        Ok(())
    }
}

/// The value's hash under a fixed-key hasher.
pub fn hash_code<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn violation(property: ContractProperty, message: String) -> ContractViolation {
    tracing::warn!(%property, "equality contract violated: {}", message);
    ContractViolation::new(property, message)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
