//! Shingle results: occurrence maps and distinct-shingle lists

use super::{outcome, ShingleSliceResult, ShingleType, StoredResult};
use crate::algorithms::ShingleProfile;
use crate::error::{errors_match, ComparisonError};
use crate::format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shingle -> occurrence count for one input at one n-gram length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShingleMapResult {
    input: String,
    size: isize,
    shingles: Option<ShingleProfile>,
    error: Option<ComparisonError>,
}

impl ShingleMapResult {
    pub fn new(
        input: impl Into<String>,
        size: isize,
        outcome: Result<ShingleProfile, ComparisonError>,
    ) -> Self {
        let (shingles, error) = match outcome {
            Ok(shingles) => (Some(shingles), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            input: input.into(),
            size,
            shingles,
            error,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn size(&self) -> isize {
        self.size
    }

    pub fn shingles(&self) -> Result<&ShingleProfile, ComparisonError> {
        outcome(self.shingles.as_ref(), self.error.as_ref())
    }
}

impl StoredResult for ShingleMapResult {
    type Kind = ShingleType;
    type Key = isize;

    fn kind(&self) -> ShingleType {
        ShingleType::Map
    }

    fn key(&self) -> isize {
        self.size
    }

    fn inputs(&self) -> (&str, String) {
        (&self.input, self.size.to_string())
    }

    fn error(&self) -> Option<&ComparisonError> {
        self.error.as_ref()
    }

    fn is_match(&self, other: &Self) -> bool {
        self.input == other.input
            && self.size == other.size
            && errors_match(self.error.as_ref(), other.error.as_ref())
            && self.shingles == other.shingles
    }

    fn format(&self, verbose: bool) -> String {
        let rendered = self.shingles();
        if !verbose {
            let signature = format!("shingle_map({:?}, {})", self.input, self.size);
            return match rendered {
                Ok(shingles) => format!("{} = {}", signature, format::profile(shingles)),
                Err(err) => format!("{} error: {}", signature, err.full_message()),
            };
        }

        let mut rows = vec![("Input", self.input.clone()), ("Size", self.size.to_string())];
        match rendered {
            Ok(shingles) => {
                rows.push(("Distinct", shingles.len().to_string()));
                rows.push(("Total", shingles.values().sum::<usize>().to_string()));
                rows.push(("Shingles", format::profile(shingles)));
            }
            Err(err) => rows.push(("Error", err.full_message())),
        }
        format::block("Result: shingle_map", &rows)
    }
}

/// Value of the shingle store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShingleResult {
    Map(ShingleMapResult),
    Slice(ShingleSliceResult),
}

impl ShingleResult {
    pub fn as_map(&self) -> Option<&ShingleMapResult> {
        match self {
            ShingleResult::Map(result) => Some(result),
            ShingleResult::Slice(_) => None,
        }
    }

    pub fn as_slice(&self) -> Option<&ShingleSliceResult> {
        match self {
            ShingleResult::Slice(result) => Some(result),
            ShingleResult::Map(_) => None,
        }
    }
}

impl From<ShingleMapResult> for ShingleResult {
    fn from(result: ShingleMapResult) -> Self {
        ShingleResult::Map(result)
    }
}

impl From<ShingleSliceResult> for ShingleResult {
    fn from(result: ShingleSliceResult) -> Self {
        ShingleResult::Slice(result)
    }
}

impl StoredResult for ShingleResult {
    type Kind = ShingleType;
    type Key = isize;

    fn kind(&self) -> ShingleType {
        match self {
            ShingleResult::Map(result) => result.kind(),
            ShingleResult::Slice(result) => result.kind(),
        }
    }

    fn key(&self) -> isize {
        match self {
            ShingleResult::Map(result) => result.key(),
            ShingleResult::Slice(result) => result.key(),
        }
    }

    fn inputs(&self) -> (&str, String) {
        match self {
            ShingleResult::Map(result) => result.inputs(),
            ShingleResult::Slice(result) => result.inputs(),
        }
    }

    fn error(&self) -> Option<&ComparisonError> {
        match self {
            ShingleResult::Map(result) => result.error(),
            ShingleResult::Slice(result) => result.error(),
        }
    }

    fn is_match(&self, other: &Self) -> bool {
        match (self, other) {
            (ShingleResult::Map(a), ShingleResult::Map(b)) => a.is_match(b),
            (ShingleResult::Slice(a), ShingleResult::Slice(b)) => a.is_match(b),
            _ => false,
        }
    }

    fn format(&self, verbose: bool) -> String {
        match self {
            ShingleResult::Map(result) => result.format(verbose),
            ShingleResult::Slice(result) => result.format(verbose),
        }
    }
}

impl fmt::Display for ShingleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}
