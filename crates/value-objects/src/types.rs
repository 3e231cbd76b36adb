//! Core types for equality contract checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One clause of the `PartialEq` / `Hash` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractProperty {
    /// Distinct primary instances compare equal, and each equals itself.
    Reflexivity,
    /// `a == b` agrees with `b == a`.
    Symmetry,
    /// `a1 == a2` and `a2 == a3` imply `a1 == a3`.
    Transitivity,
    /// No instance equals the type's absent value.
    NullInequality,
    /// Repeated comparisons of the same operands return the same answer.
    Consistency,
    /// Equal instances hash to the same value.
    HashConsistency,
}

impl ContractProperty {
    /// All properties in canonical order.
    pub fn all() -> &'static [ContractProperty] {
        &[
            Self::Reflexivity,
            Self::Symmetry,
            Self::Transitivity,
            Self::NullInequality,
            Self::Consistency,
            Self::HashConsistency,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reflexivity => "reflexivity",
            Self::Symmetry => "symmetry",
            Self::Transitivity => "transitivity",
            Self::NullInequality => "null inequality",
            Self::Consistency => "consistency",
            Self::HashConsistency => "hash consistency",
        }
    }

    /// Which half of the contract the property belongs to.
    pub fn group(&self) -> PropertyGroup {
        match self {
            Self::HashConsistency => PropertyGroup::Hashcode,
            _ => PropertyGroup::Equals,
        }
    }
}

impl fmt::Display for ContractProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Grouping of properties by the trait they constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyGroup {
    /// `PartialEq` properties.
    Equals,
    /// `Hash` properties.
    Hashcode,
}

impl PropertyGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equals => "Equality",
            Self::Hashcode => "Hashing",
        }
    }

    /// Properties in this group, canonical order.
    pub fn properties(&self) -> Vec<ContractProperty> {
        ContractProperty::all()
            .iter()
            .copied()
            .filter(|p| p.group() == *self)
            .collect()
    }
}

impl fmt::Display for PropertyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of checking a single property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyResult {
    /// Which property was checked.
    pub property: ContractProperty,
    /// Whether the property holds.
    pub passed: bool,
    /// Violation message if the property failed.
    pub details: Option<String>,
    /// Time spent in the check, in microseconds.
    pub elapsed_us: u64,
    /// When the check was performed.
    pub checked_at: DateTime<Utc>,
}

impl PropertyResult {
    /// Create a passing result.
    pub fn pass(property: ContractProperty, elapsed_us: u64) -> Self {
        Self {
            property,
            passed: true,
            details: None,
            elapsed_us,
            checked_at: Utc::now(),
        }
    }

    /// Create a failing result.
    pub fn fail(property: ContractProperty, details: impl Into<String>, elapsed_us: u64) -> Self {
        Self {
            property,
            passed: false,
            details: Some(details.into()),
            elapsed_us,
            checked_at: Utc::now(),
        }
    }
}

impl fmt::Display for PropertyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}", status, self.property)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Configuration for a conformance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceConfig {
    /// Filter to specific properties (empty = all).
    pub properties: Vec<ContractProperty>,
    /// Whether to stop on first failure.
    pub fail_fast: bool,
    /// How many times each pair is re-compared by the consistency check.
    pub consistency_rounds: usize,
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            fail_fast: false,
            consistency_rounds: 3,
        }
    }
}

/// Summary statistics from a conformance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceSummary {
    /// Total properties selected for the run.
    pub total: usize,
    /// Number that passed.
    pub passed: usize,
    /// Number that failed.
    pub failed: usize,
    /// Number skipped (due to fail_fast).
    pub skipped: usize,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run completed.
    pub completed_at: DateTime<Utc>,
}

impl ConformanceSummary {
    /// Whether all checked properties passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Pass rate as a percentage of the properties actually checked.
    pub fn pass_rate(&self) -> f64 {
        let checked = self.passed + self.failed;
        if checked == 0 {
            return 100.0;
        }
        (self.passed as f64 / checked as f64) * 100.0
    }
}

impl fmt::Display for ConformanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} passed ({:.1}%), {} failed, {} skipped",
            self.passed,
            self.total,
            self.pass_rate(),
            self.failed,
            self.skipped,
        )
    }
}
