//! Error types for equality contract checks.

use crate::types::ContractProperty;
use thiserror::Error;

/// An observed deviation from the `PartialEq` / `Hash` contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{property} violated: {message}")]
pub struct ContractViolation {
    /// Which clause of the contract was broken.
    pub property: ContractProperty,
    /// Description naming the offending values.
    pub message: String,
}

impl ContractViolation {
    pub fn new(property: ContractProperty, message: impl Into<String>) -> Self {
        Self {
            property,
            message: message.into(),
        }
    }
}

/// Outcome of a single verification: silent success or a violation.
pub type ContractResult = Result<(), ContractViolation>;

/// Errors raised by the conformance runner.
#[derive(Debug, Clone, Error)]
pub enum ConformanceError {
    #[error(transparent)]
    Violation(#[from] ContractViolation),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience result type for runner operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;
