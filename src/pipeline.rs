//! Fluent comparison pipeline
//!
//! A [`Pipeline`] wraps one subject string. Each chained call compares the
//! subject against something, records the result in the pipeline's
//! [`ResultManager`] (created on first use), and hands the pipeline back.
//!
//! The first failing call moves the pipeline into the errored state. With
//! the default [`PipelineConfig`] that state is sticky: every later chained
//! call is skipped, leaving the value, the error and the stored results as
//! they were. The terminal methods [`Pipeline::result`], [`Pipeline::build`]
//! and [`Pipeline::error`] report it.
//!
//! ```
//! use fuzzyledger::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new("hello")
//!     .levenshtein("helloo")
//!     .jaro_winkler("hallo")
//!     .hamming("help")     // unequal lengths: fails here
//!     .jaccard("yellow", 2); // skipped
//!
//! assert!(pipeline.error().is_some());
//! let manager = pipeline.manager().unwrap();
//! assert_eq!(manager.get_comparison_results_map().unwrap().entry_count(), 3);
//! ```

use crate::algorithms::normalize::{normalize_string, NormalizationMode};
use crate::algorithms::{Algorithm, ShingleProfile};
use crate::compare;
use crate::config::PipelineConfig;
use crate::error::ComparisonError;
use crate::manager::ResultManager;
use crate::results::{
    FloatResult, IntResult, LcsResult, ShingleMapResult, ShingleSliceResult, ShingleType,
    SimilarityResult, StoredResult,
};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// A result the pipeline knows how to file into its manager.
trait Recordable: StoredResult {
    fn record(self, manager: &mut ResultManager);
}

impl Recordable for IntResult {
    fn record(self, manager: &mut ResultManager) {
        manager.add_comparison_result(self);
    }
}

impl Recordable for FloatResult {
    fn record(self, manager: &mut ResultManager) {
        manager.add_comparison_result(self);
    }
}

impl Recordable for SimilarityResult {
    fn record(self, manager: &mut ResultManager) {
        manager.add_similarity_result(self);
    }
}

impl Recordable for ShingleMapResult {
    fn record(self, manager: &mut ResultManager) {
        manager.add_shingle_result(self);
    }
}

impl Recordable for ShingleSliceResult {
    fn record(self, manager: &mut ResultManager) {
        manager.add_shingle_result(self);
    }
}

impl Recordable for LcsResult {
    fn record(self, manager: &mut ResultManager) {
        manager.add_lcs_result(self);
    }
}

/// Chain-call accumulator around one subject string.
#[derive(Debug, Clone)]
pub struct Pipeline {
    value: String,
    original: String,
    manager: Option<ResultManager>,
    error: Option<ComparisonError>,
    config: PipelineConfig,
    history: VecDeque<String>,
}

impl Pipeline {
    /// Start a pipeline with the default configuration.
    pub fn new(subject: impl Into<String>) -> Self {
        Self::with_config(subject, PipelineConfig::default())
    }

    pub fn with_config(subject: impl Into<String>, config: PipelineConfig) -> Self {
        let value = subject.into();
        Self {
            original: value.clone(),
            value,
            manager: None,
            error: None,
            config,
            history: VecDeque::new(),
        }
    }

    /// Attach an empty result manager now rather than on the first comparison.
    #[must_use]
    pub fn with_manager(mut self) -> Self {
        self.manager.get_or_insert_with(ResultManager::new);
        self
    }

    fn halted(&self) -> bool {
        self.error.is_some() && self.config.halt_on_error
    }

    fn push_history(&mut self, entry: String) {
        if self.config.history_limit == 0 {
            return;
        }
        while self.history.len() >= self.config.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(entry);
    }

    /// Run one recording step unless the pipeline has halted.
    fn apply<R: Recordable>(mut self, compute: impl FnOnce(&str) -> R) -> Self {
        if self.halted() {
            trace!(subject = %self.value, "pipeline halted, skipping operation");
            return self;
        }

        let result = compute(&self.value);
        let failure = result.error().cloned();
        self.push_history(result.format(false));
        result.record(self.manager.get_or_insert_with(ResultManager::new));

        if let Some(err) = failure {
            debug!(subject = %self.value, error = %err.full_message(), "pipeline operation failed");
            self.error = Some(err);
        }
        self
    }

    /// Replace the current value unless the pipeline has halted.
    fn transform(mut self, label: &str, change: impl FnOnce(&str) -> String) -> Self {
        if self.halted() {
            trace!(subject = %self.value, "pipeline halted, skipping transform");
            return self;
        }

        let next = change(&self.value);
        self.push_history(format!("{}: {:?} -> {:?}", label, self.value, next));
        self.value = next;
        self
    }

    // Integer-scored comparisons

    #[must_use]
    pub fn levenshtein(self, other: &str) -> Self {
        self.apply(|value| compare::levenshtein(value, other))
    }

    #[must_use]
    pub fn damerau_levenshtein(self, other: &str) -> Self {
        self.apply(|value| compare::damerau_levenshtein(value, other))
    }

    #[must_use]
    pub fn osa_damerau_levenshtein(self, other: &str) -> Self {
        self.apply(|value| compare::osa_damerau_levenshtein(value, other))
    }

    #[must_use]
    pub fn hamming(self, other: &str) -> Self {
        self.apply(|value| compare::hamming(value, other))
    }

    #[must_use]
    pub fn lcs_length(self, other: &str) -> Self {
        self.apply(|value| compare::lcs_length(value, other))
    }

    #[must_use]
    pub fn qgram_distance(self, other: &str, split_length: isize) -> Self {
        self.apply(|value| compare::qgram_distance(value, other, split_length))
    }

    /// Q-gram distance of the subject against a named shingle table.
    ///
    /// Reuses the subject's recorded shingle map for `split_length`,
    /// computing and recording it first when it is missing or stale.
    #[must_use]
    pub fn qgram_distance_custom(self, label: &str, table: &ShingleProfile, split_length: isize) -> Self {
        if self.halted() {
            trace!(subject = %self.value, "pipeline halted, skipping operation");
            return self;
        }

        let this = if self.cached_shingles(split_length).is_some() {
            self
        } else {
            trace!(subject = %self.value, split_length, "computing shingle map for custom q-gram distance");
            self.shingle(split_length)
        };
        if this.halted() {
            return this;
        }

        let profile = match this.cached_shingles(split_length) {
            Some(found) => found.shingles().cloned(),
            None => Err(ComparisonError::MissingOutcome),
        };
        this.apply(|value| {
            compare::qgram_distance_from_profile(value, label, profile.as_ref().map_err(Clone::clone), table, split_length)
        })
    }

    /// Recorded shingle map of the current value at `size`, if any.
    fn cached_shingles(&self, size: isize) -> Option<&ShingleMapResult> {
        self.manager
            .as_ref()?
            .get_shingle_result(ShingleType::Map, &size)?
            .as_map()
            .filter(|found| found.input() == self.value)
    }

    // Float-scored comparisons

    #[must_use]
    pub fn jaro(self, other: &str) -> Self {
        self.apply(|value| compare::jaro(value, other))
    }

    #[must_use]
    pub fn jaro_winkler(self, other: &str) -> Self {
        let config = self.config.jaro_winkler;
        self.apply(|value| compare::jaro_winkler(value, other, &config))
    }

    #[must_use]
    pub fn cosine(self, other: &str, split_length: isize) -> Self {
        self.apply(|value| compare::cosine(value, other, split_length))
    }

    #[must_use]
    pub fn jaccard(self, other: &str, split_length: isize) -> Self {
        self.apply(|value| compare::jaccard(value, other, split_length))
    }

    #[must_use]
    pub fn sorensen_dice(self, other: &str, split_length: isize) -> Self {
        self.apply(|value| compare::sorensen_dice(value, other, split_length))
    }

    #[must_use]
    pub fn qgram_similarity(self, other: &str, split_length: isize) -> Self {
        self.apply(|value| compare::qgram_similarity(value, other, split_length))
    }

    // Other families

    #[must_use]
    pub fn similarity(self, other: &str, algorithm: Algorithm) -> Self {
        self.apply(|value| compare::similarity(value, other, algorithm))
    }

    #[must_use]
    pub fn shingle(self, size: isize) -> Self {
        self.apply(|value| compare::shingle(value, size))
    }

    #[must_use]
    pub fn shingle_slice(self, size: isize) -> Self {
        self.apply(|value| compare::shingle_slice(value, size))
    }

    #[must_use]
    pub fn lcs_backtrack(self, other: &str) -> Self {
        self.apply(|value| compare::lcs_backtrack(value, other))
    }

    #[must_use]
    pub fn lcs_backtrack_all(self, other: &str) -> Self {
        self.apply(|value| compare::lcs_backtrack_all(value, other))
    }

    #[must_use]
    pub fn lcs_diff(self, other: &str) -> Self {
        self.apply(|value| compare::lcs_diff(value, other))
    }

    // Value transforms

    /// Normalize the current value; later comparisons use the new value.
    #[must_use]
    pub fn normalize(self, mode: NormalizationMode) -> Self {
        self.transform(&format!("normalize[{}]", mode), |value| normalize_string(value, mode))
    }

    /// Restore the value the pipeline was created with.
    #[must_use]
    pub fn reset(self) -> Self {
        let original = self.original.clone();
        self.transform("reset", move |_| original)
    }

    // Terminal reads

    /// Current value and the recorded error, if any. Nothing is cleared.
    pub fn result(&self) -> (&str, Option<&ComparisonError>) {
        (&self.value, self.error.as_ref())
    }

    /// The current value, or the recorded error.
    pub fn build(self) -> Result<String, ComparisonError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    pub fn error(&self) -> Option<&ComparisonError> {
        self.error.as_ref()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn manager(&self) -> Option<&ResultManager> {
        self.manager.as_ref()
    }

    /// Detach the manager, leaving the pipeline without one.
    pub fn take_manager(&mut self) -> Option<ResultManager> {
        self.manager.take()
    }

    /// Recorded operations, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Numbered history listing, oldest first.
    pub fn format_history(&self) -> String {
        self.history
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>3}. {}", i + 1, entry))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
