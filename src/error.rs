//! Crate-wide error type.

use crate::constraint::ConstraintRef;
use crate::value::Value;
use thiserror::Error;

/// Errors raised by binding, solving and generation.
///
/// `Validation` is the only recoverable domain failure: the caller may retry
/// with another value and the previous binding is still in place. The
/// remaining variants report caller bugs or exhausted generation budgets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A value failed one of the constraints guarding a variable.
    #[error("value {value} violates constraint {constraint}: {reason}")]
    Validation {
        /// The violated constraint.
        constraint: ConstraintRef,
        /// The rejected value.
        value: Value,
        /// Why the constraint rejected the value.
        reason: String,
    },

    /// Structural misuse, e.g. constraining a solution.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An operation was invoked before its inputs were ready.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// No valid value could be sampled within the retry budget.
    #[error("could not generate a valid value for `{variable}` after {attempts} attempts")]
    Generation {
        /// Name of the variable being generated.
        variable: String,
        /// Number of samples drawn before giving up.
        attempts: usize,
    },

    /// A problem was assembled with an invalid variable list.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// Generator configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Whether retrying (with another value or seed) may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::Generation { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Range;

    #[test]
    fn test_validation_message() {
        let err = Error::Validation {
            constraint: Range::new(0, 9).into(),
            value: Value::Int(15),
            reason: "15 is above 9".into(),
        };
        assert_eq!(
            err.to_string(),
            "value 15 violates constraint Range(0..=9): 15 is above 9"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_caller_bugs_not_recoverable() {
        assert!(!Error::UnsupportedOperation("x".into()).is_recoverable());
        assert!(!Error::Precondition("x".into()).is_recoverable());
        assert!(!Error::InvalidConfig("x".into()).is_recoverable());
    }
}
