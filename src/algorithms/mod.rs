//! String distance and similarity algorithms
//!
//! Each algorithm is a standalone function so it can be called directly or
//! wrapped by the recording layer in [`crate::compare`]. The [`Algorithm`]
//! enum selects one of them at runtime and normalises its output to a
//! similarity score in `[0.0, 1.0]`.

pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;

pub use damerau::*;
pub use hamming::*;
pub use jaro::*;
pub use lcs::*;
pub use levenshtein::*;
pub use ngram::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failures reported by the raw algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmError {
    /// Hamming distance is undefined for strings of different lengths
    #[error("undefined for strings of unequal length ({left} vs {right} chars)")]
    UnequalLengths { left: usize, right: usize },

    /// Input exceeds the limit of a quadratic-space routine
    #[error("input of {len} chars exceeds the limit of {max}")]
    InputTooLong { len: usize, max: usize },

    /// Enumerating every longest common subsequence produced too many candidates
    #[error("more than {max} distinct longest common subsequences")]
    TooManySubsequences { max: usize },
}

/// Similarity algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Levenshtein,
    DamerauLevenshtein,
    OsaDamerauLevenshtein,
    Lcs,
    Hamming,
    Jaro,
    JaroWinkler,
    Cosine,
    Jaccard,
    SorensenDice,
    Qgram,
}

impl Algorithm {
    /// All identifiers, in declaration order.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Levenshtein,
        Algorithm::DamerauLevenshtein,
        Algorithm::OsaDamerauLevenshtein,
        Algorithm::Lcs,
        Algorithm::Hamming,
        Algorithm::Jaro,
        Algorithm::JaroWinkler,
        Algorithm::Cosine,
        Algorithm::Jaccard,
        Algorithm::SorensenDice,
        Algorithm::Qgram,
    ];

    /// Name of the algorithm for debugging/logging
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau_levenshtein",
            Algorithm::OsaDamerauLevenshtein => "osa_damerau_levenshtein",
            Algorithm::Lcs => "lcs",
            Algorithm::Hamming => "hamming",
            Algorithm::Jaro => "jaro",
            Algorithm::JaroWinkler => "jaro_winkler",
            Algorithm::Cosine => "cosine",
            Algorithm::Jaccard => "jaccard",
            Algorithm::SorensenDice => "sorensen_dice",
            Algorithm::Qgram => "qgram",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shingle size used by the set-based algorithms when selected through
/// [`string_similarity`].
pub const DEFAULT_SHINGLE_SIZE: usize = 2;

/// Turn an edit distance into a similarity using the longer input's length.
#[inline]
pub(crate) fn distance_to_similarity(distance: usize, a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (distance as f64 / max_len as f64)
    }
}

/// Compute a normalised similarity in `[0.0, 1.0]` with the chosen algorithm.
///
/// Set-based algorithms (`Cosine`, `Jaccard`, `SorensenDice`, `Qgram`) use
/// shingles of [`DEFAULT_SHINGLE_SIZE`] characters.
pub fn string_similarity(a: &str, b: &str, algorithm: Algorithm) -> Result<f64, AlgorithmError> {
    let score = match algorithm {
        Algorithm::Levenshtein => levenshtein_similarity(a, b),
        Algorithm::DamerauLevenshtein => distance_to_similarity(damerau_levenshtein(a, b)?, a, b),
        Algorithm::OsaDamerauLevenshtein => {
            distance_to_similarity(optimal_string_alignment(a, b), a, b)
        }
        Algorithm::Lcs => lcs_similarity(a, b),
        Algorithm::Hamming => distance_to_similarity(hamming_distance(a, b)?, a, b),
        Algorithm::Jaro => jaro_similarity(a, b),
        Algorithm::JaroWinkler => jaro_winkler_similarity(a, b),
        Algorithm::Cosine => cosine_similarity(a, b, DEFAULT_SHINGLE_SIZE),
        Algorithm::Jaccard => jaccard_similarity(a, b, DEFAULT_SHINGLE_SIZE),
        Algorithm::SorensenDice => sorensen_dice_coefficient(a, b, DEFAULT_SHINGLE_SIZE),
        Algorithm::Qgram => qgram_similarity(a, b, DEFAULT_SHINGLE_SIZE),
    };
    Ok(score)
}
