//! Conformance runner.
//!
//! Runs every selected property against one factory, recording each
//! outcome instead of stopping at the first violation, and produces a
//! [`ConformanceReport`].

use crate::equality::EqualityTests;
use crate::error::{ConformanceError, ConformanceResult, ContractResult};
use crate::instances::Instances;
use crate::report::ConformanceReport;
use crate::types::{ConformanceConfig, ContractProperty, PropertyGroup, PropertyResult};
use chrono::Utc;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

/// Runs equality contract checks according to a [`ConformanceConfig`].
pub struct ConformanceRunner {
    config: ConformanceConfig,
    checks: EqualityTests,
}

impl ConformanceRunner {
    /// Create a runner with default config (all properties, no fail-fast).
    pub fn new() -> Self {
        Self::with_config(ConformanceConfig::default())
    }

    pub fn with_config(config: ConformanceConfig) -> Self {
        Self {
            config,
            checks: EqualityTests,
        }
    }

    pub fn config(&self) -> &ConformanceConfig {
        &self.config
    }

    /// Check every selected property, hashing included.
    pub fn run<T, I>(&self, instances: &I) -> ConformanceResult<ConformanceReport>
    where
        T: PartialEq + Hash + Debug,
        I: Instances<T> + ?Sized,
    {
        let properties = self.resolve_properties(None)?;
        Ok(self.run_properties::<T, _>(&properties, |property| {
            self.dispatch_hashed::<T, I>(property, instances)
        }))
    }

    /// Check the selected equality properties only, for types without `Hash`.
    pub fn run_equals<T, I>(&self, instances: &I) -> ConformanceResult<ConformanceReport>
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        let properties = self.resolve_properties(Some(PropertyGroup::Equals))?;
        Ok(self.run_properties::<T, _>(&properties, |property| {
            self.dispatch_equals::<T, I>(property, instances)
        }))
    }

    /// Check one property.
    pub fn run_single<T, I>(
        &self,
        property: ContractProperty,
        instances: &I,
    ) -> ConformanceResult<PropertyResult>
    where
        T: PartialEq + Hash + Debug,
        I: Instances<T> + ?Sized,
    {
        self.validate()?;
        Ok(timed(property, || self.dispatch_hashed::<T, I>(property, instances)))
    }

    fn run_properties<T, F>(&self, properties: &[ContractProperty], check: F) -> ConformanceReport
    where
        F: Fn(ContractProperty) -> ContractResult,
    {
        let started_at = Utc::now();
        let mut results = Vec::new();

        for property in properties {
            let result = timed(*property, || check(*property));
            let failed = !result.passed;
            results.push(result);

            if self.config.fail_fast && failed {
                break;
            }
        }

        let skipped = properties.len() - results.len();
        let report = ConformanceReport::from_results(
            std::any::type_name::<T>(),
            results,
            skipped,
            started_at,
            Utc::now(),
        );

        tracing::info!(
            type_name = %report.type_name,
            passed = report.summary.passed,
            failed = report.summary.failed,
            skipped = report.summary.skipped,
            "equality conformance run complete"
        );
        report
    }

    fn dispatch_hashed<T, I>(&self, property: ContractProperty, instances: &I) -> ContractResult
    where
        T: PartialEq + Hash + Debug,
        I: Instances<T> + ?Sized,
    {
        match property {
            ContractProperty::HashConsistency => self.checks.check_equal_hashcodes(instances),
            other => self.dispatch_equals::<T, I>(other, instances),
        }
    }

    fn dispatch_equals<T, I>(&self, property: ContractProperty, instances: &I) -> ContractResult
    where
        T: PartialEq + Debug,
        I: Instances<T> + ?Sized,
    {
        match property {
            ContractProperty::Reflexivity => self.checks.check_reflexive(instances),
            ContractProperty::Symmetry => self.checks.check_symmetric(instances),
            ContractProperty::Transitivity => self.checks.check_transitive(instances),
            ContractProperty::NullInequality => self.checks.check_not_equal_null(instances),
            ContractProperty::Consistency => self
                .checks
                .check_consistent(instances, self.config.consistency_rounds),
            ContractProperty::HashConsistency => unreachable!(
                "hash consistency is dispatched by dispatch_hashed and filtered out of equality-only runs"
            ),
        }
    }

    fn validate(&self) -> ConformanceResult<()> {
        if self.config.consistency_rounds == 0 {
            return Err(ConformanceError::InvalidConfiguration(
                "consistency_rounds must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Resolve which properties to check based on config filters.
    fn resolve_properties(
        &self,
        group: Option<PropertyGroup>,
    ) -> ConformanceResult<Vec<ContractProperty>> {
        self.validate()?;

        let mut properties: Vec<ContractProperty> = if self.config.properties.is_empty() {
            ContractProperty::all().to_vec()
        } else {
            // Canonical order, duplicates dropped.
            ContractProperty::all()
                .iter()
                .copied()
                .filter(|p| self.config.properties.contains(p))
                .collect()
        };

        if let Some(group) = group {
            properties.retain(|p| p.group() == group);
        }

        if properties.is_empty() {
            return Err(ConformanceError::InvalidConfiguration(format!(
                "no properties selected from {:?}",
                self.config.properties
            )));
        }
        Ok(properties)
    }
}

impl Default for ConformanceRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn timed(property: ContractProperty, check: impl FnOnce() -> ContractResult) -> PropertyResult {
    let start = Instant::now();
    let outcome = check();
    let elapsed_us = start.elapsed().as_micros() as u64;
    match outcome {
        Ok(()) => PropertyResult::pass(property, elapsed_us),
        Err(violation) => PropertyResult::fail(property, violation.message, elapsed_us),
    }
}
