//! Conformance report generation.
//!
//! Produces structured reports of property check results with a
//! box-drawing display and per-group breakdowns.

use crate::error::{ConformanceError, ConformanceResult, ContractViolation};
use crate::types::{ConformanceSummary, PropertyGroup, PropertyResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-group report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub group: PropertyGroup,
    pub results: Vec<PropertyResult>,
    pub passed: usize,
    pub failed: usize,
}

impl GroupReport {
    /// Build from a filtered set of results.
    pub fn from_results(group: PropertyGroup, results: Vec<PropertyResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;
        Self {
            group,
            results,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for GroupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.all_passed() { "+" } else { "!" };
        writeln!(
            f,
            "  [{}] {} ({}/{})",
            icon,
            self.group.label(),
            self.passed,
            self.results.len(),
        )?;
        for r in &self.results {
            let mark = if r.passed { "+" } else { "x" };
            writeln!(f, "      [{}] {}", mark, r)?;
        }
        Ok(())
    }
}

/// The outcome of checking every selected property for one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Type under test, as reported by `std::any::type_name`.
    pub type_name: String,
    /// All individual property results, in check order.
    pub results: Vec<PropertyResult>,
    /// Per-group breakdowns.
    pub groups: Vec<GroupReport>,
    /// Summary statistics.
    pub summary: ConformanceSummary,
}

impl ConformanceReport {
    /// Create a report from a list of property results.
    pub fn from_results(
        type_name: impl Into<String>,
        results: Vec<PropertyResult>,
        skipped: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;

        let mut groups = Vec::new();
        for group in [PropertyGroup::Equals, PropertyGroup::Hashcode] {
            let group_results: Vec<PropertyResult> = results
                .iter()
                .filter(|r| r.property.group() == group)
                .cloned()
                .collect();
            if !group_results.is_empty() {
                groups.push(GroupReport::from_results(group, group_results));
            }
        }

        let summary = ConformanceSummary {
            total: results.len() + skipped,
            passed,
            failed,
            skipped,
            started_at,
            completed_at,
        };

        Self {
            type_name: type_name.into(),
            results,
            groups,
            summary,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.summary.all_passed()
    }

    /// Get only failed results.
    pub fn failures(&self) -> Vec<&PropertyResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }

    /// The first failed property as a violation.
    pub fn first_violation(&self) -> Option<ContractViolation> {
        self.results.iter().find(|r| !r.passed).map(|r| {
            ContractViolation::new(r.property, r.details.clone().unwrap_or_default())
        })
    }

    /// `Ok(self)` when every checked property held.
    pub fn into_result(self) -> ConformanceResult<Self> {
        match self.first_violation() {
            Some(violation) => Err(ConformanceError::Violation(violation)),
            None => Ok(self),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+-------------------------------------------------+")?;
        writeln!(f, "|   Equality Contract Report                      |")?;
        writeln!(f, "+-------------------------------------------------+")?;
        writeln!(f, "| Type: {}", self.type_name)?;
        writeln!(
            f,
            "| Total: {:3}  Passed: {:3}  Failed: {:3}  Skipped: {:3}",
            self.summary.total, self.summary.passed, self.summary.failed, self.summary.skipped,
        )?;
        writeln!(f, "+-------------------------------------------------+")?;
        writeln!(f)?;

        for group in &self.groups {
            write!(f, "{}", group)?;
        }

        writeln!(f)?;
        if self.all_passed() {
            writeln!(f, "  EQUALITY CONTRACT SATISFIED")?;
        } else {
            writeln!(f, "  {} PROPERTY(IES) VIOLATED", self.summary.failed)?;
        }
        Ok(())
    }
}
