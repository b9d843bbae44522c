//! Subject normalization used by the pipeline's value transforms

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Normalization applied to a pipeline subject before further comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Unicode NFKD decomposition
    UnicodeNfkd,
    /// Drop ASCII punctuation
    RemovePunctuation,
    /// Trim and collapse runs of whitespace into one space
    CollapseWhitespace,
    /// NFKD, lowercase, no punctuation, collapsed whitespace
    Strict,
}

impl NormalizationMode {
    pub fn name(&self) -> &'static str {
        match self {
            NormalizationMode::Lowercase => "lowercase",
            NormalizationMode::UnicodeNfkd => "nfkd",
            NormalizationMode::RemovePunctuation => "remove_punctuation",
            NormalizationMode::CollapseWhitespace => "collapse_whitespace",
            NormalizationMode::Strict => "strict",
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn remove_punctuation(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::UnicodeNfkd => s.nfkd().collect(),
        NormalizationMode::RemovePunctuation => remove_punctuation(s),
        NormalizationMode::CollapseWhitespace => collapse_whitespace(s),
        NormalizationMode::Strict => {
            let decomposed: String = s.nfkd().collect();
            collapse_whitespace(&remove_punctuation(&decomposed.to_lowercase()))
        }
    }
}
