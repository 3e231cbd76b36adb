//! Property tests: types with derived `PartialEq` and `Hash` always conform.

use proptest::prelude::*;
use value_objects::{ConformanceRunner, EqualityTests, FnInstances};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Account {
    owner: String,
    balance: i64,
    tags: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_account() -> impl Strategy<Value = Account> {
    ("[a-z]{1,12}", any::<i64>(), prop::collection::vec(any::<u8>(), 0..4)).prop_map(
        |(owner, balance, tags)| Account {
            owner,
            balance,
            tags,
        },
    )
}

/// Two accounts that are guaranteed to differ.
fn arb_distinct_accounts() -> impl Strategy<Value = (Account, Account)> {
    (arb_account(), arb_account()).prop_filter("accounts must differ", |(a, b)| a != b)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Any pair of distinct integers passes every check.
    #[test]
    fn integers_conform(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let instances = FnInstances::new(move || a, move || b);
        prop_assert!(EqualityTests.verify_equals_and_hashcode(&instances).is_ok());
    }

    /// Cloned strings are distinct allocations yet equal.
    #[test]
    fn strings_conform(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        prop_assume!(a != b);
        let instances = FnInstances::new(|| a.clone(), || b.clone());
        prop_assert!(EqualityTests.verify_equals_and_hashcode(&instances).is_ok());
    }

    /// Derived struct equality satisfies the full runner, consistency included.
    #[test]
    fn derived_structs_conform((a, b) in arb_distinct_accounts()) {
        let instances = FnInstances::new(|| a.clone(), || b.clone());
        let report = ConformanceRunner::new().run(&instances).unwrap();
        prop_assert!(report.all_passed(), "{}", report);
        prop_assert_eq!(report.summary.total, 6);
    }

    /// Symmetry holds for any two derived values, equal or not.
    #[test]
    fn derived_symmetry_holds(a in arb_account(), b in arb_account()) {
        prop_assert!(EqualityTests.verify_symmetry(&a, &b).is_ok());
    }
}
