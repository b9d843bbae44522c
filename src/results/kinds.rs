//! Operation tags used as the first-level index of each store

use crate::algorithms::Algorithm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// First-level store index: a small closed set of named operation tags.
pub trait Discriminant: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {
    fn name(&self) -> &'static str;
}

/// Scalar-scored operations recorded in the comparison store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComparisonType {
    // Integer-scored
    Levenshtein,
    DamerauLevenshtein,
    OsaDamerauLevenshtein,
    Hamming,
    LcsLength,
    QgramDistance,
    QgramDistanceCustom,
    // Float-scored
    Jaro,
    JaroWinkler,
    Cosine,
    Jaccard,
    SorensenDice,
    QgramSimilarity,
}

impl ComparisonType {
    /// Whether the operation scores with an integer distance.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ComparisonType::Levenshtein
                | ComparisonType::DamerauLevenshtein
                | ComparisonType::OsaDamerauLevenshtein
                | ComparisonType::Hamming
                | ComparisonType::LcsLength
                | ComparisonType::QgramDistance
                | ComparisonType::QgramDistanceCustom
        )
    }
}

impl Discriminant for ComparisonType {
    fn name(&self) -> &'static str {
        match self {
            ComparisonType::Levenshtein => "levenshtein",
            ComparisonType::DamerauLevenshtein => "damerau_levenshtein",
            ComparisonType::OsaDamerauLevenshtein => "osa_damerau_levenshtein",
            ComparisonType::Hamming => "hamming",
            ComparisonType::LcsLength => "lcs_length",
            ComparisonType::QgramDistance => "qgram_distance",
            ComparisonType::QgramDistanceCustom => "qgram_distance_custom",
            ComparisonType::Jaro => "jaro",
            ComparisonType::JaroWinkler => "jaro_winkler",
            ComparisonType::Cosine => "cosine",
            ComparisonType::Jaccard => "jaccard",
            ComparisonType::SorensenDice => "sorensen_dice",
            ComparisonType::QgramSimilarity => "qgram_similarity",
        }
    }
}

/// Shapes of a shingle computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShingleType {
    /// n-gram -> occurrence count
    Map,
    /// Distinct n-grams in first-seen order
    Slice,
}

impl Discriminant for ShingleType {
    fn name(&self) -> &'static str {
        match self {
            ShingleType::Map => "shingle_map",
            ShingleType::Slice => "shingle_slice",
        }
    }
}

/// LCS renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LcsType {
    /// One longest common subsequence
    Backtrack,
    /// Every distinct longest common subsequence
    BacktrackAll,
    /// Two-line diff render
    Diff,
}

impl Discriminant for LcsType {
    fn name(&self) -> &'static str {
        match self {
            LcsType::Backtrack => "lcs_backtrack",
            LcsType::BacktrackAll => "lcs_backtrack_all",
            LcsType::Diff => "lcs_diff",
        }
    }
}

impl Discriminant for Algorithm {
    fn name(&self) -> &'static str {
        Algorithm::name(self)
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(Discriminant::name(self))
                }
            }
        )*
    };
}

display_by_name!(ComparisonType, ShingleType, LcsType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_split() {
        assert!(ComparisonType::Hamming.is_integer());
        assert!(ComparisonType::QgramDistanceCustom.is_integer());
        assert!(!ComparisonType::JaroWinkler.is_integer());
    }

    #[test]
    fn test_names_are_display() {
        assert_eq!(ComparisonType::SorensenDice.to_string(), "sorensen_dice");
        assert_eq!(LcsType::BacktrackAll.to_string(), "lcs_backtrack_all");
        assert_eq!(Discriminant::name(&Algorithm::JaroWinkler), "jaro_winkler");
    }
}
