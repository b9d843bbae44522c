//! Jaro and Jaro-Winkler similarity implementations
//!
//! Jaro-Winkler gives extra weight to a shared prefix, which suits names
//! and other short identifiers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JaroWinklerConfig {
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: 0.1,
            max_prefix_length: 4,
        }
    }
}

impl JaroWinklerConfig {
    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        self.prefix_weight = weight;
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self
    }
}

/// Calculate Jaro similarity between two strings (0.0 to 1.0).
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    // Bytes are characters for ASCII input
    if a.is_ascii() && b.is_ascii() {
        return jaro_core(a.as_bytes(), b.as_bytes());
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_core(&a_chars, &b_chars)
}

fn jaro_core<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 && b_len == 0 {
        return 1.0;
    }
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    let window = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];
    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b_len);
        for j in start..end {
            if !b_matched[j] && a[i] == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut half_transpositions = 0usize;
    let mut k = 0usize;
    for i in (0..a_len).filter(|&i| a_matched[i]) {
        while k < b_len && !b_matched[k] {
            k += 1;
        }
        if k >= b_len {
            break;
        }
        if a[i] != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;
    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Calculate Jaro-Winkler similarity with custom parameters.
///
/// `prefix_weight` is clamped to `[0.0, 0.25]` so the result stays in `[0.0, 1.0]`.
#[must_use]
pub fn jaro_winkler_similarity_params(
    a: &str,
    b: &str,
    prefix_weight: f64,
    max_prefix_len: usize,
) -> f64 {
    let jaro = jaro_similarity(a, b);
    if jaro == 0.0 {
        return 0.0;
    }

    let prefix_weight = prefix_weight.clamp(0.0, 0.25);
    let prefix_len = a
        .chars()
        .zip(b.chars())
        .take(max_prefix_len)
        .take_while(|(ac, bc)| ac == bc)
        .count();

    jaro + prefix_len as f64 * prefix_weight * (1.0 - jaro)
}

/// Jaro-Winkler similarity with the standard parameters (0.1, 4).
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    let config = JaroWinklerConfig::default();
    jaro_winkler_similarity_params(a, b, config.prefix_weight, config.max_prefix_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_jaro_basic() {
        assert!(approx_eq(jaro_similarity("", ""), 1.0));
        assert!(approx_eq(jaro_similarity("abc", ""), 0.0));
        assert!(approx_eq(jaro_similarity("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_jaro_examples() {
        assert!(approx_eq(jaro_similarity("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro_similarity("DWAYNE", "DUANE"), 0.822));
    }

    #[test]
    fn test_jaro_winkler_boost() {
        assert!(approx_eq(jaro_winkler_similarity("MARTHA", "MARHTA"), 0.961));
        assert!(jaro_winkler_similarity("DWAYNE", "DUANE") > jaro_similarity("DWAYNE", "DUANE"));
    }

    #[test]
    fn test_unicode_matches_ascii_path() {
        let score = jaro_similarity("caf\u{e9}", "cafe");
        assert!(approx_eq(score, jaro_similarity("cafx", "cafe")));
    }
}
