//! Similarity scores keyed by algorithm identifier

use super::{outcome, StoredResult};
use crate::algorithms::Algorithm;
use crate::error::{errors_match, ComparisonError};
use crate::format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalised `[0.0, 1.0]` similarity produced by one [`Algorithm`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    algorithm: Algorithm,
    first: String,
    second: String,
    score: Option<f64>,
    error: Option<ComparisonError>,
}

impl SimilarityResult {
    pub fn new(
        algorithm: Algorithm,
        first: impl Into<String>,
        second: impl Into<String>,
        outcome: Result<f64, ComparisonError>,
    ) -> Self {
        let (score, error) = match outcome {
            Ok(score) => (Some(score), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            algorithm,
            first: first.into(),
            second: second.into(),
            score,
            error,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn score(&self) -> Result<f64, ComparisonError> {
        outcome(self.score.as_ref(), self.error.as_ref()).copied()
    }
}

impl StoredResult for SimilarityResult {
    type Kind = Algorithm;
    type Key = String;

    fn kind(&self) -> Algorithm {
        self.algorithm
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
        let scores_match = match (self.score, other.score) {
            (Some(a), Some(b)) => (a - b).abs() < super::SCORE_EPSILON,
            (None, None) => true,
            _ => false,
        };
        self.algorithm == other.algorithm
            && self.first == other.first
            && self.second == other.second
            && errors_match(self.error.as_ref(), other.error.as_ref())
            && scores_match
    }

    fn format(&self, verbose: bool) -> String {
        let score = self.score();
        if !verbose {
            let signature = format!("similarity[{}]({:?}, {:?})", self.algorithm, self.first, self.second);
            return match score {
                Ok(score) => format!("{} = {:.4}", signature, score),
                Err(err) => format!("{} error: {}", signature, err.full_message()),
            };
        }

        let mut rows = vec![("String 1", self.first.clone()), ("String 2", self.second.clone())];
        match score {
            Ok(score) => rows.push(("Score", format!("{:.4}", score))),
            Err(err) => rows.push(("Error", err.full_message())),
        }
        format::block(&format!("Similarity: {}", self.algorithm), &rows)
    }
}

impl fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_result() {
        let result = SimilarityResult::new(Algorithm::Jaro, "MARTHA", "MARHTA", Ok(0.9444));
        assert_eq!(result.kind(), Algorithm::Jaro);
        assert_eq!(result.key(), "MARHTA");
        assert_eq!(result.format(false), r#"similarity[jaro]("MARTHA", "MARHTA") = 0.9444"#);
    }

    #[test]
    fn test_algorithm_participates_in_match() {
        let a = SimilarityResult::new(Algorithm::Jaro, "a", "b", Ok(0.0));
        let b = SimilarityResult::new(Algorithm::Cosine, "a", "b", Ok(0.0));
        assert!(a.is_match(&a.clone()));
        assert!(!a.is_match(&b));
    }

    #[test]
    fn test_verbose_error() {
        let err = ComparisonError::invalid_parameter("split_length", -2, "must not be negative");
        let result = SimilarityResult::new(Algorithm::Qgram, "a", "b", Err(err));
        assert_eq!(
            result.format(true),
            "Similarity: qgram\n  String 1: a\n  String 2: b\n  Error: invalid parameter `split_length` = -2: must not be negative"
        );
    }

    #[test]
    fn test_compact_error_and_verbose_score() {
        let err = ComparisonError::algorithm(
            Algorithm::Hamming,
            crate::algorithms::AlgorithmError::UnequalLengths { left: 3, right: 2 },
        );
        let failed = SimilarityResult::new(Algorithm::Hamming, "abc", "ab", Err(err));
        assert_eq!(
            failed.format(false),
            r#"similarity[hamming]("abc", "ab") error: hamming failed: undefined for strings of unequal length (3 vs 2 chars)"#
        );

        let scored = SimilarityResult::new(Algorithm::Jaro, "MARTHA", "MARHTA", Ok(0.9444));
        assert_eq!(
            scored.format(true),
            "Similarity: jaro\n  String 1: MARTHA\n  String 2: MARHTA\n  Score: 0.9444"
        );
    }
}
