//! Recorded comparison results
//!
//! Every value here is immutable once built: it carries the operation tag,
//! the inputs, and either a payload or a [`ComparisonError`]. Stores replace
//! whole values and never edit one in place.
//!
//! Four families exist, one per store:
//!
//! | Family      | Value                | Discriminant       | Key                     |
//! |-------------|----------------------|--------------------|-------------------------|
//! | comparison  | [`ComparisonResult`] | [`ComparisonType`] | second string or label  |
//! | similarity  | [`SimilarityResult`] | [`Algorithm`]      | second string           |
//! | shingle     | [`ShingleResult`]    | [`ShingleType`]    | n-gram length           |
//! | lcs         | [`LcsResult`]        | [`LcsType`]        | second string           |
//!
//! [`Algorithm`]: crate::algorithms::Algorithm

pub mod kinds;
pub mod scalar;
pub mod sequence;
pub mod shingle;
pub mod similarity;

pub use kinds::{ComparisonType, Discriminant, LcsType, ShingleType};
pub use scalar::{ComparisonResult, FloatResult, IntResult, ScalarResult, Score, SCORE_EPSILON};
pub use sequence::{LcsResult, SequenceResult, ShingleSliceResult};
pub use shingle::{ShingleMapResult, ShingleResult};
pub use similarity::SimilarityResult;

use crate::error::ComparisonError;
use std::fmt;
use std::hash::Hash;

/// Capability set shared by every value a [`ResultStore`](crate::store::ResultStore) holds.
pub trait StoredResult: Clone + fmt::Debug {
    /// First-level index of the store
    type Kind: Discriminant;
    /// Second-level index of the store
    type Key: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display;

    /// Operation tag the value is filed under.
    fn kind(&self) -> Self::Kind;

    /// Stable lowercase name of [`kind`](Self::kind).
    fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Comparison identity the value is filed under within its kind.
    fn key(&self) -> Self::Key;

    /// Primary input and the comparison identity, rendered as text.
    fn inputs(&self) -> (&str, String);

    /// The recorded failure, if the operation failed.
    fn error(&self) -> Option<&ComparisonError>;

    /// Structural equality; values of a different concrete shape never match.
    fn is_match(&self, other: &Self) -> bool;

    /// Compact one-liner, or a labelled multi-line block when `verbose`.
    fn format(&self, verbose: bool) -> String;

    /// Write [`format`](Self::format) to stdout.
    fn print(&self, verbose: bool) {
        println!("{}", self.format(verbose));
    }
}

/// Pick the payload or explain why there is none.
pub(crate) fn outcome<'a, T: ?Sized>(
    payload: Option<&'a T>,
    error: Option<&ComparisonError>,
) -> Result<&'a T, ComparisonError> {
    match (payload, error) {
        (_, Some(err)) => Err(err.clone()),
        (Some(value), None) => Ok(value),
        (None, None) => Err(ComparisonError::MissingOutcome),
    }
}
