//! FuzzyLedger - string comparison with recorded results
//!
//! A Rust library for computing string distances and similarity scores and
//! keeping every outcome, success or failure, in a queryable store.
//!
//! # Features
//! - Edit distances (Levenshtein, Damerau-Levenshtein, OSA, Hamming, LCS)
//! - Similarity scores (Jaro, Jaro-Winkler, cosine, Jaccard, Sorensen-Dice, q-gram)
//! - Shingling into n-gram maps and ordered lists
//! - Two-level result stores behind a lazily allocating [`ResultManager`]
//! - A fluent [`Pipeline`] that stops at the first failure
//!
//! ```
//! use fuzzyledger::{ComparisonType, Pipeline};
//!
//! let pipeline = Pipeline::new("hello").levenshtein("helloo").jaccard("yellow", 2);
//! let manager = pipeline.manager().unwrap();
//! let found = manager
//!     .get_comparison_result(ComparisonType::Levenshtein, "helloo")
//!     .unwrap();
//! assert_eq!(found.score_f64(), Ok(1.0));
//! ```

pub mod algorithms;
pub mod compare;
pub mod config;
pub mod error;
mod format;
pub mod manager;
pub mod pipeline;
pub mod results;
pub mod slices;
pub mod store;

pub use algorithms::normalize::NormalizationMode;
pub use algorithms::{Algorithm, AlgorithmError, JaroWinklerConfig, ShingleProfile};
pub use config::PipelineConfig;
pub use error::{ComparisonError, ErrorKind};
pub use manager::ResultManager;
pub use pipeline::Pipeline;
pub use results::{
    ComparisonResult, ComparisonType, FloatResult, IntResult, LcsResult, LcsType,
    ShingleMapResult, ShingleResult, ShingleSliceResult, ShingleType, SimilarityResult,
    StoredResult,
};
pub use slices::{compare_slices, NIL_SLICES_MATCH};
pub use store::{
    ComparisonResultsMap, LcsResultsMap, ResultStore, ShingleResultsMap, SimilarityResultsMap,
};
