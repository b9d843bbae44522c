//! Integer- and float-scored comparison results

use super::{outcome, ComparisonType, StoredResult};
use crate::error::{errors_match, ComparisonError};
use crate::format;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for float score equality.
pub const SCORE_EPSILON: f64 = 1e-5;

/// Numeric payload of a [`ScalarResult`].
pub trait Score: Copy + fmt::Debug + Serialize + DeserializeOwned {
    fn score_eq(&self, other: &Self) -> bool;
    fn render(&self) -> String;
}

impl Score for usize {
    fn score_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Score for f64 {
    fn score_eq(&self, other: &Self) -> bool {
        (self - other).abs() < SCORE_EPSILON
    }

    fn render(&self) -> String {
        format!("{:.4}", self)
    }
}

/// A scored comparison of two strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "S: Score")]
pub struct ScalarResult<S> {
    kind: ComparisonType,
    first: String,
    second: String,
    split_length: Option<isize>,
    score: Option<S>,
    error: Option<ComparisonError>,
}

pub type IntResult = ScalarResult<usize>;
pub type FloatResult = ScalarResult<f64>;

impl<S: Score> ScalarResult<S> {
    pub fn new(
        kind: ComparisonType,
        first: impl Into<String>,
        second: impl Into<String>,
        split_length: Option<isize>,
        outcome: Result<S, ComparisonError>,
    ) -> Self {
        let (score, error) = match outcome {
            Ok(score) => (Some(score), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            kind,
            first: first.into(),
            second: second.into(),
            split_length,
            score,
            error,
        }
    }

    /// The score, the recorded error, or `MissingOutcome` if neither is set.
    pub fn score(&self) -> Result<S, ComparisonError> {
        outcome(self.score.as_ref(), self.error.as_ref()).copied()
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn split_length(&self) -> Option<isize> {
        self.split_length
    }

    fn call_signature(&self) -> String {
        match self.split_length {
            Some(k) => format!("{}({:?}, {:?}, k={})", self.kind, self.first, self.second, k),
            None => format!("{}({:?}, {:?})", self.kind, self.first, self.second),
        }
    }
}

impl<S: Score> StoredResult for ScalarResult<S> {
    type Kind = ComparisonType;
    type Key = String;

    fn kind(&self) -> ComparisonType {
        self.kind
    }

    fn key(&self) -> String {
        self.second.clone()
    }

    fn inputs(&self) -> (&str, String) {
        (&self.first, self.second.clone())
    }

    fn error(&self) -> Option<&ComparisonError> {
        self.error.as_ref()
    }

    fn is_match(&self, other: &Self) -> bool {
        let scores_match = match (&self.score, &other.score) {
            (Some(a), Some(b)) => a.score_eq(b),
            (None, None) => true,
            _ => false,
        };
        self.kind == other.kind
            && self.first == other.first
            && self.second == other.second
            && self.split_length == other.split_length
            && errors_match(self.error.as_ref(), other.error.as_ref())
            && scores_match
    }

    fn format(&self, verbose: bool) -> String {
        let score = self.score();
        if !verbose {
            return match score {
                Ok(score) => format!("{} = {}", self.call_signature(), score.render()),
                Err(err) => format!("{} error: {}", self.call_signature(), err.full_message()),
            };
        }

        let mut rows = vec![("String 1", self.first.clone()), ("String 2", self.second.clone())];
        if let Some(k) = self.split_length {
            rows.push(("Split length", k.to_string()));
        }
        match score {
            Ok(score) => rows.push(("Score", score.render())),
            Err(err) => rows.push(("Error", err.full_message())),
        }
        format::block(&format!("Comparison: {}", self.kind), &rows)
    }
}

/// Value of the comparison store: one of the two scalar shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComparisonResult {
    Int(IntResult),
    Float(FloatResult),
}

impl ComparisonResult {
    pub fn as_int(&self) -> Option<&IntResult> {
        match self {
            ComparisonResult::Int(result) => Some(result),
            ComparisonResult::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<&FloatResult> {
        match self {
            ComparisonResult::Float(result) => Some(result),
            ComparisonResult::Int(_) => None,
        }
    }

    /// Score widened to `f64` regardless of shape.
    pub fn score_f64(&self) -> Result<f64, ComparisonError> {
        match self {
            ComparisonResult::Int(result) => result.score().map(|s| s as f64),
            ComparisonResult::Float(result) => result.score(),
        }
    }
}

impl From<IntResult> for ComparisonResult {
    fn from(result: IntResult) -> Self {
        ComparisonResult::Int(result)
    }
}

impl From<FloatResult> for ComparisonResult {
    fn from(result: FloatResult) -> Self {
        ComparisonResult::Float(result)
    }
}

impl StoredResult for ComparisonResult {
    type Kind = ComparisonType;
    type Key = String;

    fn kind(&self) -> ComparisonType {
        match self {
            ComparisonResult::Int(result) => result.kind(),
            ComparisonResult::Float(result) => result.kind(),
        }
    }

    fn key(&self) -> String {
        match self {
            ComparisonResult::Int(result) => result.key(),
            ComparisonResult::Float(result) => result.key(),
        }
    }

    fn inputs(&self) -> (&str, String) {
        match self {
            ComparisonResult::Int(result) => result.inputs(),
            ComparisonResult::Float(result) => result.inputs(),
        }
    }

    fn error(&self) -> Option<&ComparisonError> {
        match self {
            ComparisonResult::Int(result) => result.error(),
            ComparisonResult::Float(result) => result.error(),
        }
    }

    fn is_match(&self, other: &Self) -> bool {
        match (self, other) {
            (ComparisonResult::Int(a), ComparisonResult::Int(b)) => a.is_match(b),
            (ComparisonResult::Float(a), ComparisonResult::Float(b)) => a.is_match(b),
            _ => false,
        }
    }

    fn format(&self, verbose: bool) -> String {
        match self {
            ComparisonResult::Int(result) => result.format(verbose),
            ComparisonResult::Float(result) => result.format(verbose),
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmError;

    fn hamming_failure() -> ComparisonError {
        ComparisonError::algorithm("hamming", AlgorithmError::UnequalLengths { left: 3, right: 2 })
    }

    #[test]
    fn test_score_or_error() {
        let ok = IntResult::new(ComparisonType::Levenshtein, "hello", "helloo", None, Ok(1));
        assert_eq!(ok.score(), Ok(1));
        assert!(ok.error().is_none());

        let failed = IntResult::new(ComparisonType::Hamming, "abc", "ab", None, Err(hamming_failure()));
        assert_eq!(failed.score(), Err(hamming_failure()));
    }

    #[test]
    fn test_missing_outcome_is_reported() {
        let json = r#"{"kind":"Jaro","first":"a","second":"b","split_length":null,"score":null,"error":null}"#;
        let broken: FloatResult = serde_json::from_str(json).unwrap();
        assert_eq!(broken.score(), Err(ComparisonError::MissingOutcome));
        assert!(broken.format(false).contains("neither a score nor an error"));
    }

    #[test]
    fn test_float_match_within_tolerance() {
        let a = FloatResult::new(ComparisonType::Jaro, "a", "b", None, Ok(0.5));
        let b = FloatResult::new(ComparisonType::Jaro, "a", "b", None, Ok(0.5 + SCORE_EPSILON / 10.0));
        let c = FloatResult::new(ComparisonType::Jaro, "a", "b", None, Ok(0.6));
        assert!(a.is_match(&b));
        assert!(!a.is_match(&c));
    }

    #[test]
    fn test_match_checks_every_field() {
        let base = FloatResult::new(ComparisonType::Jaccard, "a", "b", Some(2), Ok(0.5));
        let other_split = FloatResult::new(ComparisonType::Jaccard, "a", "b", Some(3), Ok(0.5));
        let other_kind = FloatResult::new(ComparisonType::Cosine, "a", "b", Some(2), Ok(0.5));
        assert!(base.is_match(&base.clone()));
        assert!(!base.is_match(&other_split));
        assert!(!base.is_match(&other_kind));
    }

    #[test]
    fn test_cross_shape_never_matches() {
        let int: ComparisonResult =
            IntResult::new(ComparisonType::Levenshtein, "a", "b", None, Ok(1)).into();
        let float: ComparisonResult =
            FloatResult::new(ComparisonType::Levenshtein, "a", "b", None, Ok(1.0)).into();
        assert!(!int.is_match(&float));
        assert!(!float.is_match(&int));
    }

    #[test]
    fn test_format_compact_and_verbose() {
        let result = IntResult::new(ComparisonType::Levenshtein, "hello", "helloo", None, Ok(1));
        assert_eq!(result.format(false), r#"levenshtein("hello", "helloo") = 1"#);
        assert_eq!(
            result.format(true),
            "Comparison: levenshtein\n  String 1: hello\n  String 2: helloo\n  Score: 1"
        );

        let failed = IntResult::new(ComparisonType::Hamming, "abc", "ab", None, Err(hamming_failure()));
        assert_eq!(
            failed.format(false),
            r#"hamming("abc", "ab") error: hamming failed: undefined for strings of unequal length (3 vs 2 chars)"#
        );
    }
}
