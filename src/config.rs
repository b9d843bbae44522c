//! Pipeline configuration

use crate::algorithms::JaroWinklerConfig;
use serde::{Deserialize, Serialize};

/// Default number of entries kept in a pipeline's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Behaviour switches for a [`Pipeline`](crate::pipeline::Pipeline).
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Once an operation fails, skip every later chained operation
    pub halt_on_error: bool,
    /// Maximum history entries; the oldest are dropped first. `0` disables history.
    pub history_limit: usize,
    /// Parameters for `jaro_winkler` comparisons
    pub jaro_winkler: JaroWinklerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            halt_on_error: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            jaro_winkler: JaroWinklerConfig::default(),
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_halt_on_error(mut self, halt: bool) -> Self {
        self.halt_on_error = halt;
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn with_jaro_winkler(mut self, config: JaroWinklerConfig) -> Self {
        self.jaro_winkler = config;
        self
    }
}
