//! Error taxonomy for recorded comparisons
//!
//! ```text
//! ComparisonError
//!   ├── InvalidParameter - rejected before the algorithm runs
//!   ├── Algorithm        - the algorithm itself failed, tagged with the operation
//!   └── MissingOutcome   - a result carries neither score nor error (construction bug)
//! ```
//!
//! Lookup misses are never errors; stores and the manager answer them with `None`.

use crate::algorithms::AlgorithmError;
use serde::{Deserialize, Serialize};
use std::error::Error as _;
use std::fmt;
use thiserror::Error;

/// Programmatic classification of a [`ComparisonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidParameter,
    Algorithm,
    MissingOutcome,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::Algorithm => "algorithm failure",
            ErrorKind::MissingOutcome => "missing outcome",
        })
    }
}

/// Failure recorded inside a result value.
///
/// Two errors are equal when they have the same [`ErrorKind`] and the same
/// [`full_message`](ComparisonError::full_message), so independently built
/// errors describing the same failure compare equal.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ComparisonError {
    /// A size or length parameter was out of range
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: i64,
        reason: String,
    },

    /// The delegated algorithm rejected its inputs
    #[error("{operation} failed")]
    Algorithm {
        operation: String,
        #[source]
        source: AlgorithmError,
    },

    /// Neither a score nor an error was recorded
    #[error("result holds neither a score nor an error")]
    MissingOutcome,
}

impl ComparisonError {
    pub fn invalid_parameter(name: &str, value: i64, reason: &str) -> Self {
        ComparisonError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    /// Tag an algorithm failure with the operation that produced it.
    pub fn algorithm(operation: impl fmt::Display, source: AlgorithmError) -> Self {
        ComparisonError::Algorithm {
            operation: operation.to_string(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ComparisonError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            ComparisonError::Algorithm { .. } => ErrorKind::Algorithm,
            ComparisonError::MissingOutcome => ErrorKind::MissingOutcome,
        }
    }

    /// Operation marker of an algorithm failure.
    pub fn operation(&self) -> Option<&str> {
        match self {
            ComparisonError::Algorithm { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// This error's message followed by every cause in its source chain.
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut cause = self.source();
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }
        message
    }
}

impl PartialEq for ComparisonError {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.full_message() == other.full_message()
    }
}

/// Error compatibility: both absent, or both present and equal.
pub(crate) fn errors_match(a: Option<&ComparisonError>, b: Option<&ComparisonError>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
