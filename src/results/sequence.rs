//! List-valued results: shingle slices and LCS renderings

use super::{outcome, Discriminant, LcsType, ShingleType, StoredResult};
use crate::error::{errors_match, ComparisonError};
use crate::format;
use crate::slices::{compare_slices, NIL_SLICES_MATCH};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Ordered list of strings computed from one input and a secondary key.
///
/// Equality ignores the order of the list (see [`compare_slices`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, K: Serialize",
    deserialize = "T: DeserializeOwned, K: DeserializeOwned"
))]
pub struct SequenceResult<T, K> {
    kind: T,
    input: String,
    key: K,
    values: Option<Vec<String>>,
    error: Option<ComparisonError>,
}

/// Distinct shingles of one input; keyed by n-gram length.
pub type ShingleSliceResult = SequenceResult<ShingleType, isize>;

/// LCS rendering of two inputs; keyed by the second string.
pub type LcsResult = SequenceResult<LcsType, String>;

impl<T, K> SequenceResult<T, K>
where
    T: Discriminant,
    K: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display,
{
    pub fn new(
        kind: T,
        input: impl Into<String>,
        key: K,
        outcome: Result<Vec<String>, ComparisonError>,
    ) -> Self {
        let (values, error) = match outcome {
            Ok(values) => (Some(values), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            kind,
            input: input.into(),
            key,
            values,
            error,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The list, the recorded error, or `MissingOutcome` if neither is set.
    pub fn values(&self) -> Result<&[String], ComparisonError> {
        outcome(self.values.as_deref(), self.error.as_ref())
    }

    /// Equality with an explicit rule for two never-populated lists.
    pub fn is_match_with(&self, other: &Self, nil_equal: bool) -> bool {
        self.kind == other.kind
            && self.input == other.input
            && self.key == other.key
            && errors_match(self.error.as_ref(), other.error.as_ref())
            && compare_slices(self.values.as_deref(), other.values.as_deref(), nil_equal)
    }
}

impl<T, K> StoredResult for SequenceResult<T, K>
where
    T: Discriminant,
    K: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display,
{
    type Kind = T;
    type Key = K;

    fn kind(&self) -> T {
        self.kind
    }

    fn key(&self) -> K {
        self.key.clone()
    }

    fn inputs(&self) -> (&str, String) {
        (&self.input, self.key.to_string())
    }

    fn error(&self) -> Option<&ComparisonError> {
        self.error.as_ref()
    }

    fn is_match(&self, other: &Self) -> bool {
        self.is_match_with(other, NIL_SLICES_MATCH)
    }

    fn format(&self, verbose: bool) -> String {
        let signature = format!("{}({:?}, {})", self.kind, self.input, self.key);
        let values = self.values();
        if !verbose {
            return match values {
                Ok(values) => format!("{} = {}", signature, format::list(values)),
                Err(err) => format!("{} error: {}", signature, err.full_message()),
            };
        }

        let mut rows = vec![("Input", self.input.clone()), ("Key", self.key.to_string())];
        match values {
            Ok(values) => {
                rows.push(("Count", values.len().to_string()));
                let mut out = format::block(&format!("Result: {}", self.kind), &rows);
                out.push_str("\n  Values:");
                if !values.is_empty() {
                    out.push('\n');
                    out.push_str(&format::indent(&values.join("\n"), 4));
                }
                out
            }
            Err(err) => {
                rows.push(("Error", err.full_message()));
                format::block(&format!("Result: {}", self.kind), &rows)
            }
        }
    }
}

impl<T, K> fmt::Display for SequenceResult<T, K>
where
    T: Discriminant,
    K: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}
