//! Recording wrappers around the algorithms
//!
//! Each function validates its parameters, runs one algorithm and returns a
//! result value holding either the payload or the failure. Nothing here
//! panics or returns `Err` for an expected failure; the error travels inside
//! the result.
//!
//! Size parameters are signed so that a negative request can be recorded as
//! an invalid-parameter failure. A size of `0` selects word shingles.

use crate::algorithms::{self, Algorithm, JaroWinklerConfig, ShingleProfile};
use crate::error::ComparisonError;
use crate::results::{
    ComparisonType, FloatResult, IntResult, LcsResult, LcsType, ShingleMapResult,
    ShingleSliceResult, ShingleType, SimilarityResult,
};

/// Reject negative shingle sizes.
pub fn validate_size(name: &str, size: isize) -> Result<usize, ComparisonError> {
    usize::try_from(size).map_err(|_| {
        ComparisonError::invalid_parameter(name, size as i64, "must not be negative")
    })
}

fn int(kind: ComparisonType, a: &str, b: &str, outcome: Result<usize, ComparisonError>) -> IntResult {
    IntResult::new(kind, a, b, None, outcome)
}

fn float(kind: ComparisonType, a: &str, b: &str, outcome: Result<f64, ComparisonError>) -> FloatResult {
    FloatResult::new(kind, a, b, None, outcome)
}

fn tagged<T>(kind: impl std::fmt::Display, outcome: Result<T, algorithms::AlgorithmError>) -> Result<T, ComparisonError> {
    outcome.map_err(|source| ComparisonError::algorithm(kind, source))
}

pub fn levenshtein(a: &str, b: &str) -> IntResult {
    int(ComparisonType::Levenshtein, a, b, Ok(algorithms::levenshtein(a, b)))
}

pub fn damerau_levenshtein(a: &str, b: &str) -> IntResult {
    let kind = ComparisonType::DamerauLevenshtein;
    int(kind, a, b, tagged(kind, algorithms::damerau_levenshtein(a, b)))
}

pub fn osa_damerau_levenshtein(a: &str, b: &str) -> IntResult {
    int(
        ComparisonType::OsaDamerauLevenshtein,
        a,
        b,
        Ok(algorithms::optimal_string_alignment(a, b)),
    )
}

pub fn hamming(a: &str, b: &str) -> IntResult {
    let kind = ComparisonType::Hamming;
    int(kind, a, b, tagged(kind, algorithms::hamming_distance(a, b)))
}

pub fn lcs_length(a: &str, b: &str) -> IntResult {
    int(ComparisonType::LcsLength, a, b, Ok(algorithms::lcs_length(a, b)))
}

pub fn qgram_distance(a: &str, b: &str, split_length: isize) -> IntResult {
    let outcome = validate_size("split_length", split_length)
        .map(|k| algorithms::qgram_distance(a, b, k));
    IntResult::new(ComparisonType::QgramDistance, a, b, Some(split_length), outcome)
}

/// Q-gram distance of `subject` against a caller-supplied shingle table.
///
/// The result is keyed by `label` rather than by a second string.
pub fn qgram_distance_custom(
    subject: &str,
    label: &str,
    table: &ShingleProfile,
    split_length: isize,
) -> IntResult {
    let profile = validate_size("split_length", split_length)
        .map(|k| algorithms::shingle(subject, k));
    qgram_distance_from_profile(subject, label, profile.as_ref().map_err(Clone::clone), table, split_length)
}

/// Same as [`qgram_distance_custom`] with the subject's profile already built.
pub(crate) fn qgram_distance_from_profile(
    subject: &str,
    label: &str,
    profile: Result<&ShingleProfile, ComparisonError>,
    table: &ShingleProfile,
    split_length: isize,
) -> IntResult {
    let outcome = profile.map(|profile| algorithms::qgram_distance_custom(profile, table));
    IntResult::new(ComparisonType::QgramDistanceCustom, subject, label, Some(split_length), outcome)
}

pub fn jaro(a: &str, b: &str) -> FloatResult {
    float(ComparisonType::Jaro, a, b, Ok(algorithms::jaro_similarity(a, b)))
}

pub fn jaro_winkler(a: &str, b: &str, config: &JaroWinklerConfig) -> FloatResult {
    let score = algorithms::jaro_winkler_similarity_params(
        a,
        b,
        config.prefix_weight,
        config.max_prefix_length,
    );
    float(ComparisonType::JaroWinkler, a, b, Ok(score))
}

fn shingle_coefficient(
    kind: ComparisonType,
    a: &str,
    b: &str,
    split_length: isize,
    coefficient: fn(&str, &str, usize) -> f64,
) -> FloatResult {
    let outcome = validate_size("split_length", split_length).map(|k| coefficient(a, b, k));
    FloatResult::new(kind, a, b, Some(split_length), outcome)
}

pub fn cosine(a: &str, b: &str, split_length: isize) -> FloatResult {
    shingle_coefficient(ComparisonType::Cosine, a, b, split_length, algorithms::cosine_similarity)
}

pub fn jaccard(a: &str, b: &str, split_length: isize) -> FloatResult {
    shingle_coefficient(ComparisonType::Jaccard, a, b, split_length, algorithms::jaccard_similarity)
}

pub fn sorensen_dice(a: &str, b: &str, split_length: isize) -> FloatResult {
    shingle_coefficient(
        ComparisonType::SorensenDice,
        a,
        b,
        split_length,
        algorithms::sorensen_dice_coefficient,
    )
}

pub fn qgram_similarity(a: &str, b: &str, split_length: isize) -> FloatResult {
    shingle_coefficient(
        ComparisonType::QgramSimilarity,
        a,
        b,
        split_length,
        algorithms::qgram_similarity,
    )
}

/// Normalised similarity with the chosen algorithm.
pub fn similarity(a: &str, b: &str, algorithm: Algorithm) -> SimilarityResult {
    let outcome = tagged(algorithm, algorithms::string_similarity(a, b, algorithm));
    SimilarityResult::new(algorithm, a, b, outcome)
}

pub fn shingle(input: &str, size: isize) -> ShingleMapResult {
    let outcome = validate_size("size", size).map(|k| algorithms::shingle(input, k));
    ShingleMapResult::new(input, size, outcome)
}

pub fn shingle_slice(input: &str, size: isize) -> ShingleSliceResult {
    let outcome = validate_size("size", size).map(|k| algorithms::shingle_slice(input, k));
    ShingleSliceResult::new(ShingleType::Slice, input, size, outcome)
}

pub fn lcs_backtrack(a: &str, b: &str) -> LcsResult {
    let kind = LcsType::Backtrack;
    let outcome = tagged(kind, algorithms::lcs_backtrack(a, b)).map(|lcs| vec![lcs]);
    LcsResult::new(kind, a, b.to_string(), outcome)
}

pub fn lcs_backtrack_all(a: &str, b: &str) -> LcsResult {
    let kind = LcsType::BacktrackAll;
    LcsResult::new(kind, a, b.to_string(), tagged(kind, algorithms::lcs_backtrack_all(a, b)))
}

pub fn lcs_diff(a: &str, b: &str) -> LcsResult {
    let kind = LcsType::Diff;
    let outcome = tagged(kind, algorithms::lcs_diff(a, b)).map(Vec::from);
    LcsResult::new(kind, a, b.to_string(), outcome)
}
